//! SVG export for box templates
//!
//! Renders a [`BoxTemplate`] to an SVG [`Document`] using the `svg` crate:
//! - White background covering the padded canvas
//! - Title and optional generation timestamp
//! - One translated group holding a `<path>` per template path, styled by
//!   whether the feature is folded or cut

use crate::error::LayoutResult;
use crate::template::{BoxTemplate, FeatureKind};
use puzzlebox_core::format_coord;
use serde::{Deserialize, Serialize};
use std::path::Path;
use svg::node::element::{Element, Group, Path as SvgPath, Rectangle};
use svg::node::Text as TextNode;
use svg::{Document, Node};
use tracing::info;

/// Stroke used for one class of line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub color: String,
    pub width: f64,
    /// SVG dash array, e.g. `"5,1"`
    pub dash: Option<String>,
}

impl StrokeStyle {
    pub fn solid(color: &str, width: f64) -> Self {
        Self {
            color: color.to_string(),
            width,
            dash: None,
        }
    }

    pub fn dashed(color: &str, width: f64, dash: &str) -> Self {
        Self {
            color: color.to_string(),
            width,
            dash: Some(dash.to_string()),
        }
    }

    /// Inline `style` attribute value.
    pub fn to_css(&self) -> String {
        let mut css = format!(
            "stroke:{};stroke-width:{};",
            self.color,
            format_coord(self.width)
        );
        if let Some(dash) = &self.dash {
            css.push_str(&format!("stroke-dasharray:{};", dash));
        }
        css.push_str("fill:none");
        css
    }
}

/// Options controlling SVG output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Space around the template on every side. Default: 20.
    pub padding: f64,
    pub fold_style: StrokeStyle,
    pub cut_style: StrokeStyle,
    /// Overrides the default `Box WxDxH mm` title.
    pub title: Option<String>,
    /// Whether to add a `<desc>` with the generation time.
    pub timestamp: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            padding: 20.0,
            fold_style: StrokeStyle::dashed("red", 1.0, "5,1"),
            cut_style: StrokeStyle::solid("blue", 1.0),
            title: None,
            timestamp: true,
        }
    }
}

impl RenderOptions {
    pub fn style_for(&self, kind: FeatureKind) -> &StrokeStyle {
        if kind.is_fold() {
            &self.fold_style
        } else {
            &self.cut_style
        }
    }
}

/// `WxDxH` with whole-millimetre precision.
fn dimension_label(template: &BoxTemplate) -> String {
    let dims = template.dimensions();
    format!("{:.0}x{:.0}x{:.0}", dims.width, dims.depth, dims.height)
}

fn text_element(name: &str, content: String) -> Element {
    let mut element = Element::new(name);
    element.append(TextNode::new(content));
    element
}

/// Padded canvas size for a template.
pub fn canvas_size(template: &BoxTemplate, options: &RenderOptions) -> (f64, f64) {
    (
        template.width() + 2.0 * options.padding,
        template.height() + 2.0 * options.padding,
    )
}

/// Render a template to an SVG document.
pub fn render(template: &BoxTemplate, options: &RenderOptions) -> Document {
    let (canvas_width, canvas_height) = canvas_size(template, options);
    let width = format_coord(canvas_width);
    let height = format_coord(canvas_height);
    let label = dimension_label(template);

    let mut doc = Document::new()
        .set("xmlns", "http://www.w3.org/2000/svg")
        .set("width", width.as_str())
        .set("height", height.as_str())
        .set("viewBox", format!("0 0 {} {}", width, height));

    doc = doc.add(
        Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", width.as_str())
            .set("height", height.as_str())
            .set("style", "fill:white"),
    );

    let title = options
        .title
        .clone()
        .unwrap_or_else(|| format!("Box {} mm", label));
    doc = doc.add(text_element("title", title));

    if options.timestamp {
        let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        doc = doc.add(text_element(
            "desc",
            format!("Generated on {} - Box dimensions: {} mm", now, label),
        ));
    }

    let padding = format_coord(options.padding);
    let mut group = Group::new().set("transform", format!("translate({}, {})", padding, padding));
    for (kind, data) in template.paths() {
        group = group.add(
            SvgPath::new()
                .set("class", kind.as_str())
                .set("d", data.to_string())
                .set("style", options.style_for(kind).to_css()),
        );
    }

    doc.add(group)
}

/// Render a template to an SVG string.
pub fn render_to_string(template: &BoxTemplate, options: &RenderOptions) -> String {
    render(template, options).to_string()
}

/// Write a rendered document to `path`.
pub fn write_svg(path: &Path, document: &Document) -> LayoutResult<()> {
    svg::save(path, document)?;
    info!(file = %path.display(), "Wrote SVG template");
    Ok(())
}
