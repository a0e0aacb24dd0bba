use puzzlebox_core::shapes::rectangle;
use puzzlebox_core::{validate_path, PathCommand, PathData, PathParseError, Point};

#[test]
fn test_parse_builder_output() {
    let built = rectangle(30.0, 20.0, 50.0, 30.0, 1.0).unwrap();
    let text = built.to_string();
    let parsed: PathData = text.parse().unwrap();
    assert_eq!(parsed, built);
}

#[test]
fn test_parse_implicit_line_after_move() {
    let data: PathData = "M0,0 10,0 10,10".parse().unwrap();
    assert_eq!(
        data.commands(),
        &[
            PathCommand::MoveTo(Point::new(0.0, 0.0)),
            PathCommand::LineTo(Point::new(10.0, 0.0)),
            PathCommand::LineTo(Point::new(10.0, 10.0)),
        ]
    );
}

#[test]
fn test_parse_errors() {
    assert_eq!("".parse::<PathData>(), Err(PathParseError::Empty));
    assert_eq!(
        "M0,0Q1,2".parse::<PathData>(),
        Err(PathParseError::MissingOperand {
            command: 'Q',
            expected: 4
        })
    );
    assert_eq!(
        "M0,0C1,2,3,4,5,6".parse::<PathData>(),
        Err(PathParseError::UnexpectedCommand {
            command: 'C',
            offset: 4
        })
    );
    assert!(matches!(
        "M0,0L1..5,2".parse::<PathData>(),
        Err(PathParseError::InvalidNumber(_))
    ));
}

#[test]
fn test_validate_path() {
    assert!(validate_path("M0,0L10,0"));
    assert!(validate_path("M 5 5"));
    assert!(!validate_path("L10,0"));
    assert!(!validate_path(""));
    assert!(!validate_path("M0"));
}

#[test]
fn test_bounds_of_sharp_rectangle() {
    let data = rectangle(10.0, 20.0, 100.0, 60.0, 0.0).unwrap();
    let bounds = data.bounds().unwrap();
    assert!((bounds.min_x - 10.0).abs() < 1e-4);
    assert!((bounds.min_y - 20.0).abs() < 1e-4);
    assert!((bounds.width() - 100.0).abs() < 1e-4);
    assert!((bounds.height() - 60.0).abs() < 1e-4);
}

#[test]
fn test_bounds_of_rounded_rectangle_stay_inside_nominal_box() {
    let data = rectangle(0.0, 0.0, 100.0, 60.0, 10.0).unwrap();
    let bounds = data.bounds().unwrap();
    assert!(bounds.min_x >= -1e-4 && bounds.max_x <= 100.0 + 1e-4);
    assert!(bounds.min_y >= -1e-4 && bounds.max_y <= 60.0 + 1e-4);
}

#[test]
fn test_bounds_none_for_bare_move() {
    let data: PathData = "M4,4".parse().unwrap();
    assert!(data.bounds().is_none());
}

#[test]
fn test_serde_json_shape() {
    let data: PathData = "M0,0L5,0Z".parse().unwrap();
    let json = serde_json::to_value(&data).unwrap();
    assert_eq!(json["commands"][0]["cmd"], "move_to");
    assert_eq!(json["commands"][2]["cmd"], "close_path");

    let back: PathData = serde_json::from_value(json).unwrap();
    assert_eq!(back, data);
}

#[test]
fn test_lyon_resumes_at_subpath_start_after_close() {
    use lyon::path::Event;

    let data: PathData = "M0,0L10,0ZL-5,5".parse().unwrap();
    let begins: Vec<lyon::math::Point> = data
        .to_lyon()
        .iter()
        .filter_map(|e| match e {
            Event::Begin { at } => Some(at),
            _ => None,
        })
        .collect();

    assert_eq!(begins, vec![lyon::math::point(0.0, 0.0), lyon::math::point(0.0, 0.0)]);
    assert!((data.straight_length() - (10.0 + 50f64.sqrt())).abs() < 1e-9);
}
