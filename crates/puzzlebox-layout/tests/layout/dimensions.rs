use puzzlebox_layout::{BoxDimensions, LayoutError, DEFAULT_BOTTOM_TAB_PERCENT};

#[test]
fn test_new_uses_default_tab_percent() {
    let dims = BoxDimensions::new(100.0, 50.0, 80.0, 1.0);
    assert_eq!(dims.bottom_tab_percent, DEFAULT_BOTTOM_TAB_PERCENT);
    assert_eq!(dims.corner_radius, 0.0);
}

#[test]
fn test_fractional_sizes_truncate_positions() {
    let dims = BoxDimensions::new(100.7, 50.5, 80.9, 0.0);
    assert_eq!(dims.w(), 100.0);
    assert_eq!(dims.front_panel_left(), 50.0);
    // 50.5 + 100.7
    assert_eq!(dims.front_panel_right(), 151.0);
    // 10.1 + 50.5
    assert_eq!(dims.top(), 60.0);
}

#[test]
fn test_gap_must_leave_flap_length() {
    let err = BoxDimensions::new(100.0, 8.0, 80.0, 4.0).validate().unwrap_err();
    assert!(matches!(err, LayoutError::InvalidDimensions(_)));
    assert!(err.to_string().contains("fold gap"));
}

#[test]
fn test_tab_percent_bounds() {
    let mut dims = BoxDimensions::default();
    dims.bottom_tab_percent = 0.0;
    assert!(!dims.is_valid());
    dims.bottom_tab_percent = 1.0;
    assert!(dims.is_valid());
    dims.bottom_tab_percent = 1.5;
    assert!(!dims.is_valid());
}

#[test]
fn test_dimensions_deserialize_without_radius() {
    let json = r#"{"width":10,"depth":20,"height":30,"fold_gap":1,"bottom_tab_percent":0.5}"#;
    let dims: BoxDimensions = serde_json::from_str(json).unwrap();
    assert_eq!(dims.corner_radius, 0.0);
    assert_eq!(dims.depth, 20.0);
}
