//! Box template generation
//!
//! Lays out the flattened box as one path set per logical feature. Panels
//! run left to right: side A, front, side B, back, then the glue tab.
//!
//! ```text
//!            top flaps / side flaps
//! top    +------+--------+------+--------+
//!        | side | front  | side | back   |tab
//! bottom +------+--------+------+--------+
//!               bottom flaps
//! ```

use crate::dimensions::BoxDimensions;
use crate::error::LayoutResult;
use puzzlebox_core::{flap, FlapDirection, PathBuilder, PathData, Point};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, info};

/// Logical feature of the dieline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKind {
    FoldLines,
    CutLines,
    BottomFlaps,
    TopFlaps,
    SideFlaps,
    SideTabs,
}

impl FeatureKind {
    pub const ALL: [FeatureKind; 6] = [
        FeatureKind::FoldLines,
        FeatureKind::CutLines,
        FeatureKind::BottomFlaps,
        FeatureKind::TopFlaps,
        FeatureKind::SideFlaps,
        FeatureKind::SideTabs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureKind::FoldLines => "fold_lines",
            FeatureKind::CutLines => "cut_lines",
            FeatureKind::BottomFlaps => "bottom_flaps",
            FeatureKind::TopFlaps => "top_flaps",
            FeatureKind::SideFlaps => "side_flaps",
            FeatureKind::SideTabs => "side_tabs",
        }
    }

    /// Fold features are scored, everything else is cut.
    pub fn is_fold(&self) -> bool {
        matches!(self, FeatureKind::FoldLines)
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Paths making up one feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateFeature {
    pub kind: FeatureKind,
    pub paths: Vec<PathData>,
}

/// A complete laid-out box template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxTemplate {
    dimensions: BoxDimensions,
    width: f64,
    height: f64,
    features: Vec<TemplateFeature>,
}

impl BoxTemplate {
    /// Validate the dimensions and lay out every feature.
    pub fn generate(dims: &BoxDimensions) -> LayoutResult<Self> {
        dims.validate()?;

        info!(
            width = dims.width,
            depth = dims.depth,
            height = dims.height,
            fold_gap = dims.fold_gap,
            "Generating box template"
        );

        let features = vec![
            TemplateFeature {
                kind: FeatureKind::FoldLines,
                paths: fold_lines(dims)?,
            },
            TemplateFeature {
                kind: FeatureKind::CutLines,
                paths: cut_lines(dims)?,
            },
            TemplateFeature {
                kind: FeatureKind::BottomFlaps,
                paths: bottom_flaps(dims)?,
            },
            TemplateFeature {
                kind: FeatureKind::TopFlaps,
                paths: top_flaps(dims)?,
            },
            TemplateFeature {
                kind: FeatureKind::SideFlaps,
                paths: side_flaps(dims)?,
            },
            TemplateFeature {
                kind: FeatureKind::SideTabs,
                paths: side_tabs(dims)?,
            },
        ];

        for feature in &features {
            debug!(
                feature = %feature.kind,
                paths = feature.paths.len(),
                "Added feature"
            );
        }

        Ok(Self {
            dimensions: dims.clone(),
            width: dims.total_width(),
            height: dims.total_height(),
            features,
        })
    }

    pub fn dimensions(&self) -> &BoxDimensions {
        &self.dimensions
    }

    /// Template extent, without any rendering padding.
    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn features(&self) -> &[TemplateFeature] {
        &self.features
    }

    pub fn feature(&self, kind: FeatureKind) -> Option<&TemplateFeature> {
        self.features.iter().find(|f| f.kind == kind)
    }

    /// Every path with the feature it belongs to, in drawing order.
    pub fn paths(&self) -> impl Iterator<Item = (FeatureKind, &PathData)> {
        self.features
            .iter()
            .flat_map(|f| f.paths.iter().map(move |p| (f.kind, p)))
    }

    pub fn path_count(&self) -> usize {
        self.features.iter().map(|f| f.paths.len()).sum()
    }

    /// Serialized path descriptions keyed by feature name.
    pub fn path_strings(&self) -> BTreeMap<String, Vec<String>> {
        self.features
            .iter()
            .map(|f| {
                (
                    f.kind.as_str().to_string(),
                    f.paths.iter().map(|p| p.to_string()).collect(),
                )
            })
            .collect()
    }

    /// Pretty JSON of [`path_strings`](Self::path_strings) with the canvas size.
    pub fn to_json(&self) -> LayoutResult<String> {
        let value = serde_json::json!({
            "width": self.width,
            "height": self.height,
            "dimensions": self.dimensions,
            "features": self.path_strings(),
        });
        Ok(serde_json::to_string_pretty(&value)?)
    }
}

/// Main fold outline plus the vertical folds between panels.
pub fn fold_lines(dims: &BoxDimensions) -> LayoutResult<Vec<PathData>> {
    let origin_x = dims.side_a_left();
    let origin_y = dims.bottom();
    let main_box_width = dims.total_width() - dims.side_flap_width().trunc();

    let mut builder = PathBuilder::new();
    builder
        .move_to(origin_x, origin_y)?
        .horizontal_line(main_box_width)
        .square()
        .vertical_line(-dims.h())
        .square()
        .horizontal_line(-main_box_width)
        .square();
    let mut paths = vec![builder.build()?];

    let panel_height = dims.bottom() - dims.top();
    for x in [
        dims.front_panel_left(),
        dims.front_panel_right(),
        dims.back_panel_left(),
    ] {
        builder.clear();
        builder
            .move_to(x, dims.top())?
            .vertical_line(panel_height)
            .square();
        paths.push(builder.build()?);
    }

    Ok(paths)
}

/// Outline of the left side panel.
pub fn cut_lines(dims: &BoxDimensions) -> LayoutResult<Vec<PathData>> {
    let mut builder = PathBuilder::new();
    builder
        .move_to(dims.side_a_left(), dims.top())?
        .vertical_line(dims.h())
        .square()
        .horizontal_line(dims.d())
        .square()
        .vertical_line(-dims.h())
        .square();
    Ok(vec![builder.build()?])
}

/// Hinged flaps along one panel edge, inset by the fold gap at both ends.
fn panel_flaps(
    dims: &BoxDimensions,
    panel_lefts: &[f64],
    panel_width: f64,
    fold_y: f64,
    depth: f64,
    direction: FlapDirection,
) -> LayoutResult<Vec<PathData>> {
    let gap = dims.fold_gap;
    panel_lefts
        .iter()
        .map(|&left| -> LayoutResult<PathData> {
            Ok(flap(
                Point::new(left + gap, fold_y),
                panel_width - 2.0 * gap,
                depth,
                direction,
                dims.corner_radius,
            )?)
        })
        .collect()
}

/// Bottom flaps on the front and back panels.
pub fn bottom_flaps(dims: &BoxDimensions) -> LayoutResult<Vec<PathData>> {
    panel_flaps(
        dims,
        &[dims.front_panel_left(), dims.back_panel_left()],
        dims.w(),
        dims.bottom(),
        dims.bottom_flap_max_height().trunc(),
        FlapDirection::Down,
    )
}

/// Top flaps on the front and back panels.
pub fn top_flaps(dims: &BoxDimensions) -> LayoutResult<Vec<PathData>> {
    panel_flaps(
        dims,
        &[dims.front_panel_left(), dims.back_panel_left()],
        dims.w(),
        dims.top(),
        dims.top_flap_height().trunc(),
        FlapDirection::Up,
    )
}

/// Dust flaps on top of both side panels.
pub fn side_flaps(dims: &BoxDimensions) -> LayoutResult<Vec<PathData>> {
    panel_flaps(
        dims,
        &[dims.side_a_left(), dims.front_panel_right()],
        dims.d(),
        dims.top(),
        dims.side_flap_height().trunc(),
        FlapDirection::Up,
    )
}

/// Glue tab to the right of the back panel.
pub fn side_tabs(dims: &BoxDimensions) -> LayoutResult<Vec<PathData>> {
    let gap = dims.fold_gap;
    let panel_height = dims.bottom() - dims.top();
    let tab = flap(
        Point::new(dims.back_panel_right(), dims.top() + gap),
        panel_height - 2.0 * gap,
        dims.side_flap_width().trunc(),
        FlapDirection::Right,
        dims.corner_radius,
    )?;
    Ok(vec![tab])
}
