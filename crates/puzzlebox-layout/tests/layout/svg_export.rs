use puzzlebox_layout::{
    canvas_size, render, render_to_string, write_svg, BoxDimensions, BoxTemplate, RenderOptions,
    StrokeStyle,
};

fn default_template() -> BoxTemplate {
    BoxTemplate::generate(&BoxDimensions::default()).unwrap()
}

fn quiet_options() -> RenderOptions {
    RenderOptions {
        timestamp: false,
        ..RenderOptions::default()
    }
}

#[test]
fn test_canvas_includes_padding() {
    let template = default_template();
    assert_eq!(canvas_size(&template, &RenderOptions::default()), (1055.0, 586.0));

    let svg = render_to_string(&template, &quiet_options());
    assert!(svg.contains(r#"width="1055""#));
    assert!(svg.contains(r#"viewBox="0 0 1055 586""#));
    assert!(svg.contains("translate(20, 20)"));
    assert!(svg.contains("fill:white"));
}

#[test]
fn test_paths_styled_by_feature() {
    let svg = render_to_string(&default_template(), &quiet_options());

    assert_eq!(svg.matches("<path").count(), 12);
    assert_eq!(svg.matches(r#"class="fold_lines""#).count(), 4);
    assert_eq!(
        svg.matches("stroke:red;stroke-width:1;stroke-dasharray:5,1;fill:none").count(),
        4
    );
    assert_eq!(svg.matches("stroke:blue;stroke-width:1;fill:none").count(), 8);
    assert!(svg.contains(r#"d="M0,247L0,443L206,443L206,247""#));
}

#[test]
fn test_title_and_timestamp() {
    let template = default_template();

    let quiet = render_to_string(&template, &quiet_options());
    assert!(quiet.contains("Box 276x206x196 mm"));
    assert!(!quiet.contains("<desc"));

    let stamped = render_to_string(&template, &RenderOptions::default());
    assert!(stamped.contains("Generated on "));
    assert!(stamped.contains("Box dimensions: 276x206x196 mm"));
}

#[test]
fn test_custom_styles_and_title() {
    let options = RenderOptions {
        padding: 0.0,
        cut_style: StrokeStyle::solid("black", 0.25),
        title: Some("Gift box".to_string()),
        timestamp: false,
        ..RenderOptions::default()
    };
    let svg = render_to_string(&default_template(), &options);

    assert!(svg.contains("Gift box"));
    assert!(svg.contains("stroke:black;stroke-width:0.25;fill:none"));
    assert!(svg.contains(r#"viewBox="0 0 1015 546""#));
}

#[test]
fn test_write_svg_creates_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("box.svg");

    let document = render(&default_template(), &quiet_options());
    write_svg(&path, &document).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("<svg"));
    assert!(written.contains("side_tabs"));
}

#[test]
fn test_write_svg_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("box.svg");

    let document = render(&default_template(), &quiet_options());
    assert!(write_svg(&path, &document).is_err());
}
