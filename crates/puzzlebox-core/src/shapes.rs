//! Composite shapes issued as fixed builder call sequences.

use crate::builder::PathBuilder;
use crate::command::PathData;
use crate::corner::CornerPolicy;
use crate::error::PathResult;
use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Closed rectangle from the top-left corner, winding right, down, left, up
/// (y grows downward).
///
/// `radius <= 0` gives four sharp corners; otherwise all four are rounded,
/// the start corner included. The fourth edge returns exactly to the start
/// and an explicit close command is emitted.
pub fn rectangle(x: f64, y: f64, width: f64, height: f64, radius: f64) -> PathResult<PathData> {
    let corner = CornerPolicy::uniform(radius)?;
    let mut builder = PathBuilder::new();
    builder
        .move_to(x, y)?
        .horizontal_line(width)
        .with_corner(corner)?
        .vertical_line(height)
        .with_corner(corner)?
        .horizontal_line(-width)
        .with_corner(corner)?
        .vertical_line(-height)
        .with_corner(corner)?
        .close();
    builder.build()
}

/// Direction a flap extends away from its fold edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlapDirection {
    Up,
    Down,
    Left,
    Right,
}

impl FlapDirection {
    /// Unit vector pointing away from the fold.
    fn outward(self) -> Point {
        match self {
            FlapDirection::Up => Point::new(0.0, -1.0),
            FlapDirection::Down => Point::new(0.0, 1.0),
            FlapDirection::Left => Point::new(-1.0, 0.0),
            FlapDirection::Right => Point::new(1.0, 0.0),
        }
    }

    /// Unit vector running along the fold.
    fn along(self) -> Point {
        match self {
            FlapDirection::Up | FlapDirection::Down => Point::new(1.0, 0.0),
            FlapDirection::Left | FlapDirection::Right => Point::new(0.0, 1.0),
        }
    }
}

/// Open three-sided outline of a flap or tab hinged on a fold edge.
///
/// Starts at `origin` on the fold, goes out by `depth`, along the fold by
/// `length`, and back to the fold. The two outer corners use `radius`; the
/// return to the fold is the last segment and stays sharp.
pub fn flap(
    origin: Point,
    length: f64,
    depth: f64,
    direction: FlapDirection,
    radius: f64,
) -> PathResult<PathData> {
    let corner = CornerPolicy::uniform(radius)?;
    let out = direction.outward() * depth;
    let along = direction.along() * length;

    let mut builder = PathBuilder::new();
    builder
        .move_to(origin.x, origin.y)?
        .relative_line(out.x, out.y)
        .with_corner(corner)?
        .relative_line(along.x, along.y)
        .with_corner(corner)?
        .relative_line(-out.x, -out.y)
        .square();
    builder.build()
}
