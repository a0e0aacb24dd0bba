use puzzlebox_settings::{BoxSettings, OutputSettings};
use std::path::PathBuf;

#[test]
fn test_explicit_name_gets_svg_extension() {
    let output = OutputSettings {
        file_name: Some("mybox".to_string()),
        ..OutputSettings::default()
    };
    assert_eq!(output.file_name_for(&BoxSettings::default()), "mybox.svg");
}

#[test]
fn test_explicit_svg_name_unchanged() {
    let output = OutputSettings {
        file_name: Some("mybox.svg".to_string()),
        ..OutputSettings::default()
    };
    assert_eq!(output.file_name_for(&BoxSettings::default()), "mybox.svg");
}

#[test]
fn test_other_extension_is_kept_and_extended() {
    let output = OutputSettings {
        file_name: Some("mybox.png".to_string()),
        ..OutputSettings::default()
    };
    assert_eq!(output.file_name_for(&BoxSettings::default()), "mybox.png.svg");
}

#[test]
fn test_derived_name_rounds_dimensions() {
    let settings = BoxSettings {
        width: 100.4,
        depth: 50.6,
        height: 30.0,
        ..BoxSettings::default()
    };
    let output = OutputSettings::default();
    assert_eq!(output.file_name_for(&settings), "box_100_51_30.svg");
    assert_eq!(
        output.path_for(&settings),
        PathBuf::from("out").join("box_100_51_30.svg")
    );
}
