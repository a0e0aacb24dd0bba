//! Fluent path builder with deferred corner resolution.
//!
//! Segments are collected with their corner policy and only resolved when
//! [`PathBuilder::build`] runs, because the room available to a rounded
//! corner depends on the segment that follows it.
//!
//! ```
//! use puzzlebox_core::PathBuilder;
//!
//! let mut builder = PathBuilder::new();
//! builder
//!     .move_to(0.0, 0.0)?
//!     .horizontal_line(100.0)
//!     .rounded(10.0)?
//!     .vertical_line(60.0)
//!     .square();
//! assert_eq!(builder.build()?.to_string(), "M0,0L90,0Q100,0,100,10L100,60");
//! # Ok::<(), puzzlebox_core::PathError>(())
//! ```

use crate::command::{PathCommand, PathData};
use crate::corner::{resolve_corner, CornerPolicy, CornerResolution};
use crate::error::{PathError, PathResult};
use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A committed edge waiting to be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendingSegment {
    /// Absolute endpoint of the edge.
    pub target: Point,
    /// Join applied on arrival at `target`.
    pub corner: CornerPolicy,
}

/// Accumulates a start point and pending segments, then resolves them into
/// a [`PathData`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathBuilder {
    start: Option<Point>,
    position: Point,
    segments: Vec<PendingSegment>,
    closed: bool,
}

/// Handle returned by the line methods; pick the corner to commit the segment.
#[must_use = "a line is only added once square(), rounded() or with_corner() is called"]
pub struct CornerBuilder<'a> {
    builder: &'a mut PathBuilder,
    target: Point,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the path start. Only one start is allowed per path.
    pub fn move_to(&mut self, x: f64, y: f64) -> PathResult<&mut Self> {
        if let Some(start) = self.start {
            return Err(PathError::AlreadyStarted {
                x: start.x,
                y: start.y,
            });
        }
        let p = Point::new(x, y);
        self.start = Some(p);
        self.position = p;
        Ok(self)
    }

    /// Line to absolute coordinates.
    pub fn line_to(&mut self, x: f64, y: f64) -> CornerBuilder<'_> {
        CornerBuilder {
            builder: self,
            target: Point::new(x, y),
        }
    }

    /// Line by an offset from the current position.
    pub fn relative_line(&mut self, dx: f64, dy: f64) -> CornerBuilder<'_> {
        let target = self.position.offset(dx, dy);
        CornerBuilder {
            builder: self,
            target,
        }
    }

    pub fn horizontal_line(&mut self, dx: f64) -> CornerBuilder<'_> {
        self.relative_line(dx, 0.0)
    }

    pub fn vertical_line(&mut self, dy: f64) -> CornerBuilder<'_> {
        self.relative_line(0.0, dy)
    }

    /// Single-call form of `line_to(..).with_corner(..)`.
    pub fn add_segment(&mut self, target: Point, corner: CornerPolicy) -> PathResult<&mut Self> {
        corner.validate()?;
        self.push_segment(target, corner);
        Ok(self)
    }

    /// Mark the path closed. The last corner then blends into the first edge
    /// and a close command is emitted.
    pub fn close(&mut self) -> &mut Self {
        self.closed = true;
        self
    }

    pub fn current_position(&self) -> Point {
        self.position
    }

    pub fn start(&self) -> Option<Point> {
        self.start
    }

    pub fn segments(&self) -> &[PendingSegment] {
        &self.segments
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Reset to the pre-use state so the builder can trace a new path.
    pub fn clear(&mut self) -> &mut Self {
        self.start = None;
        self.position = Point::ORIGIN;
        self.segments.clear();
        self.closed = false;
        self
    }

    fn push_segment(&mut self, target: Point, corner: CornerPolicy) {
        self.segments.push(PendingSegment { target, corner });
        self.position = target;
    }

    /// The corner each segment blends toward, `None` for an unblended end.
    fn next_target(&self, index: usize, start: Point, wraps: bool) -> Option<Point> {
        let n = self.segments.len();
        if index + 1 < n {
            return Some(self.segments[index + 1].target);
        }
        if !self.closed || n < 2 {
            return None;
        }
        if wraps {
            Some(self.segments[0].target)
        } else {
            Some(start)
        }
    }

    /// Resolve the pending segments into drawing commands.
    ///
    /// Each corner is computed against the nominal neighbouring targets, so
    /// consecutive rounded corners never compound their trimming. Calling
    /// `build` again yields the same output.
    pub fn build(&self) -> PathResult<PathData> {
        let start = self.start.ok_or(PathError::MissingStart)?;
        let n = self.segments.len();
        let wraps = self.closed && n >= 2 && self.segments[n - 1].target == start;

        trace!(segments = n, closed = self.closed, "Resolving path");

        let mut commands = Vec::with_capacity(2 * n + 2);
        commands.push(PathCommand::MoveTo(start));

        let mut prev = start;
        for (i, segment) in self.segments.iter().enumerate() {
            let corner = segment.target;
            match self.next_target(i, start, wraps) {
                Some(next) if !segment.corner.is_sharp() => {
                    match resolve_corner(prev, corner, next, segment.corner.radius()) {
                        CornerResolution::Line(p) => commands.push(PathCommand::LineTo(p)),
                        CornerResolution::Blend {
                            start: curve_start,
                            ctrl,
                            end,
                            ..
                        } => {
                            commands.push(PathCommand::LineTo(curve_start));
                            commands.push(PathCommand::QuadraticTo { ctrl, to: end });
                            if wraps && i == n - 1 {
                                // The outline now begins just past the rounded start corner.
                                commands[0] = PathCommand::MoveTo(end);
                            }
                        }
                    }
                }
                _ => commands.push(PathCommand::LineTo(corner)),
            }
            prev = corner;
        }

        if self.closed {
            commands.push(PathCommand::ClosePath);
        }

        Ok(PathData::new(commands))
    }
}

impl<'a> CornerBuilder<'a> {
    /// Commit the segment with a sharp corner.
    pub fn square(self) -> &'a mut PathBuilder {
        self.builder.push_segment(self.target, CornerPolicy::Sharp);
        self.builder
    }

    /// Commit the segment with a rounded corner. The radius is clamped only
    /// when the path is built.
    pub fn rounded(self, radius: f64) -> PathResult<&'a mut PathBuilder> {
        let policy = CornerPolicy::rounded(radius)?;
        self.builder.push_segment(self.target, policy);
        Ok(self.builder)
    }

    /// Commit the segment with an explicit policy.
    pub fn with_corner(self, corner: CornerPolicy) -> PathResult<&'a mut PathBuilder> {
        corner.validate()?;
        self.builder.push_segment(self.target, corner);
        Ok(self.builder)
    }

    /// Endpoint this segment will commit.
    pub fn target(&self) -> Point {
        self.target
    }
}
