//! # Puzzlebox Layout
//!
//! Turns box dimensions into a complete dieline and exports it.
//!
//! - [`BoxDimensions`]: panel sizes, fold gap and derived positions
//! - [`BoxTemplate`]: fold lines, cut lines, flaps and the glue tab, each as
//!   a [`TemplateFeature`] of core [`PathData`](puzzlebox_core::PathData)
//! - [`svg_export`]: SVG rendering with fold/cut stroke styles
//!
//! ```
//! use puzzlebox_layout::{BoxDimensions, BoxTemplate, FeatureKind};
//!
//! let template = BoxTemplate::generate(&BoxDimensions::default())?;
//! assert_eq!(template.features().len(), FeatureKind::ALL.len());
//! # Ok::<(), puzzlebox_layout::LayoutError>(())
//! ```

pub mod dimensions;
pub mod error;
pub mod svg_export;
pub mod template;

pub use dimensions::{BoxDimensions, DEFAULT_BOTTOM_TAB_PERCENT};
pub use error::{LayoutError, LayoutResult};
pub use svg_export::{canvas_size, render, render_to_string, write_svg, RenderOptions, StrokeStyle};
pub use template::{BoxTemplate, FeatureKind, TemplateFeature};
