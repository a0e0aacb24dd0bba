use puzzlebox_layout::{BoxDimensions, BoxTemplate, FeatureKind, LayoutError};

fn strings(template: &BoxTemplate, kind: FeatureKind) -> Vec<String> {
    template
        .feature(kind)
        .map(|f| f.paths.iter().map(|p| p.to_string()).collect())
        .unwrap_or_default()
}

#[test]
fn test_default_template_canvas_and_order() {
    let template = BoxTemplate::generate(&BoxDimensions::default()).unwrap();

    assert_eq!(template.width(), 1015.0);
    assert_eq!(template.height(), 546.0);
    let kinds: Vec<FeatureKind> = template.features().iter().map(|f| f.kind).collect();
    assert_eq!(kinds, FeatureKind::ALL.to_vec());
    assert_eq!(template.path_count(), 12);
}

#[test]
fn test_default_fold_and_cut_lines() {
    let template = BoxTemplate::generate(&BoxDimensions::default()).unwrap();

    assert_eq!(
        strings(&template, FeatureKind::FoldLines),
        vec![
            "M0,443L964,443L964,247L0,247",
            "M206,247L206,443",
            "M482,247L482,443",
            "M688,247L688,443",
        ]
    );
    assert_eq!(
        strings(&template, FeatureKind::CutLines),
        vec!["M0,247L0,443L206,443L206,247"]
    );
}

#[test]
fn test_flaps_are_inset_by_fold_gap() {
    let template = BoxTemplate::generate(&BoxDimensions::default()).unwrap();

    assert_eq!(
        strings(&template, FeatureKind::BottomFlaps),
        vec![
            "M208,443L208,546L480,546L480,443",
            "M690,443L690,546L962,546L962,443",
        ]
    );
    assert_eq!(
        strings(&template, FeatureKind::TopFlaps),
        vec![
            "M208,247L208,206L480,206L480,247",
            "M690,247L690,206L962,206L962,247",
        ]
    );
    // 0.66 * 206 = 135.96
    assert_eq!(
        strings(&template, FeatureKind::SideFlaps),
        vec![
            "M2,247L2,112L204,112L204,247",
            "M484,247L484,112L686,112L686,247",
        ]
    );
    assert_eq!(
        strings(&template, FeatureKind::SideTabs),
        vec!["M964,249L1015,249L1015,441L964,441"]
    );
}

#[test]
fn test_zero_gap_flaps_span_panel() {
    let dims = BoxDimensions::new(100.0, 50.0, 80.0, 0.0);
    let template = BoxTemplate::generate(&dims).unwrap();
    // top = 10 + 50, bottom = 140, bottom flap 25
    assert_eq!(
        strings(&template, FeatureKind::BottomFlaps)[0],
        "M50,140L50,165L150,165L150,140"
    );
}

#[test]
fn test_rounded_flaps_only_curve_outer_corners() {
    let dims = BoxDimensions::default().with_corner_radius(5.0);
    let template = BoxTemplate::generate(&dims).unwrap();

    for kind in [
        FeatureKind::BottomFlaps,
        FeatureKind::TopFlaps,
        FeatureKind::SideFlaps,
        FeatureKind::SideTabs,
    ] {
        for path in &template.feature(kind).unwrap().paths {
            assert_eq!(path.quadratic_count(), 2, "{kind}");
        }
    }
    for path in &template.feature(FeatureKind::FoldLines).unwrap().paths {
        assert_eq!(path.quadratic_count(), 0);
    }
}

#[test]
fn test_paths_stay_inside_canvas() {
    let dims = BoxDimensions::new(120.5, 80.25, 60.0, 1.5).with_corner_radius(3.0);
    let template = BoxTemplate::generate(&dims).unwrap();

    for (_, path) in template.paths() {
        let bounds = path.bounds().unwrap();
        assert!(bounds.min_x >= 0.0 && bounds.min_y >= 0.0);
        assert!(bounds.max_x <= template.width());
        assert!(bounds.max_y <= template.height());
    }
}

#[test]
fn test_invalid_dimensions_rejected() {
    let err = BoxTemplate::generate(&BoxDimensions::new(0.0, 10.0, 10.0, 0.0)).unwrap_err();
    assert!(matches!(err, LayoutError::InvalidDimensions(_)));
}

#[test]
fn test_negative_radius_rejected() {
    let dims = BoxDimensions::default().with_corner_radius(-1.0);
    assert!(BoxTemplate::generate(&dims).is_err());
}

#[test]
fn test_json_lists_features() {
    let template = BoxTemplate::generate(&BoxDimensions::default()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&template.to_json().unwrap()).unwrap();

    assert_eq!(value["width"], 1015.0);
    assert_eq!(value["features"]["side_tabs"][0], "M964,249L1015,249L1015,441L964,441");
    assert_eq!(value["features"]["fold_lines"].as_array().unwrap().len(), 4);
}

#[test]
fn test_fractional_depth_cannot_invert_flaps() {
    let err = BoxTemplate::generate(&BoxDimensions::new(10.0, 4.6, 10.0, 2.2)).unwrap_err();
    assert!(matches!(err, LayoutError::InvalidDimensions(_)));
}
