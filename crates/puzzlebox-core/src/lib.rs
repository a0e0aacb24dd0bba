//! # Puzzlebox Core
//!
//! Path construction engine for Puzzlebox box templates.
//!
//! ## Components
//!
//! - **Builder**: fluent `move_to` / `line_to` calls, each line completed with a
//!   sharp or rounded corner, resolved in one pass by `build()`
//! - **Corners**: radius clamping and quadratic blend geometry
//! - **Commands**: the immutable [`PathData`] description, its compact
//!   serialized form, parsing, and bounds via lyon
//! - **Shapes**: rectangles and fold-hinged flaps built on the builder
//!
//! ## Usage
//!
//! ```
//! use puzzlebox_core::shapes::rectangle;
//!
//! let outline = rectangle(0.0, 0.0, 100.0, 60.0, 10.0)?;
//! assert_eq!(outline.quadratic_count(), 4);
//! # Ok::<(), puzzlebox_core::PathError>(())
//! ```

pub mod builder;
pub mod command;
pub mod corner;
pub mod error;
pub mod geometry;
pub mod shapes;

pub use builder::{CornerBuilder, PathBuilder, PendingSegment};
pub use command::{format_coord, validate_path, Bounds, PathCommand, PathData};
pub use corner::{resolve_corner, CornerPolicy, CornerResolution};
pub use error::{PathError, PathParseError, PathResult};
pub use geometry::Point;
pub use shapes::{flap, rectangle, FlapDirection};
