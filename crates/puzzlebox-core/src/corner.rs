//! Corner policies and the rounded-corner blend geometry.

use crate::error::PathError;
use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Per-vertex join applied when a segment arrives at its endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "radius", rename_all = "snake_case")]
pub enum CornerPolicy {
    #[default]
    Sharp,
    Rounded(f64),
}

impl CornerPolicy {
    /// Validated rounded policy. Negative and non-finite radii are rejected.
    pub fn rounded(radius: f64) -> Result<Self, PathError> {
        let policy = CornerPolicy::Rounded(radius);
        policy.validate()?;
        Ok(policy)
    }

    /// Sharp for `radius <= 0`, rounded otherwise.
    pub fn uniform(radius: f64) -> Result<Self, PathError> {
        if radius.is_nan() {
            return Err(PathError::InvalidRadius { radius });
        }
        if radius <= 0.0 {
            Ok(CornerPolicy::Sharp)
        } else {
            CornerPolicy::rounded(radius)
        }
    }

    pub fn validate(&self) -> Result<(), PathError> {
        match *self {
            CornerPolicy::Sharp => Ok(()),
            CornerPolicy::Rounded(radius) if radius >= 0.0 && radius.is_finite() => Ok(()),
            CornerPolicy::Rounded(radius) => Err(PathError::InvalidRadius { radius }),
        }
    }

    /// Requested radius; zero for sharp corners.
    pub fn radius(&self) -> f64 {
        match *self {
            CornerPolicy::Sharp => 0.0,
            CornerPolicy::Rounded(r) => r,
        }
    }

    pub fn is_sharp(&self) -> bool {
        self.radius() == 0.0
    }
}

/// Outcome of resolving a single corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CornerResolution {
    /// Plain join: a line straight into the corner.
    Line(Point),
    /// Trimmed line to `start`, then a quadratic through `ctrl` to `end`.
    Blend {
        start: Point,
        ctrl: Point,
        end: Point,
        radius: f64,
    },
}

/// Resolve the join at `corner`, between the edge arriving from `prev` and
/// the edge leaving toward `next`.
///
/// The effective radius is `min(radius, |prev - corner| / 2, |next - corner| / 2)`
/// so a blend never consumes more than half of either adjacent edge. A
/// zero-length neighbour has no direction and falls back to a plain line.
pub fn resolve_corner(prev: Point, corner: Point, next: Point, radius: f64) -> CornerResolution {
    if radius <= 0.0 {
        return CornerResolution::Line(corner);
    }

    let incoming = prev - corner;
    let outgoing = next - corner;
    let (incoming_unit, outgoing_unit) = match (incoming.normalized(), outgoing.normalized()) {
        (Some(i), Some(o)) => (i, o),
        _ => {
            debug!(
                x = corner.x,
                y = corner.y,
                "Degenerate corner, zero-length neighbour; using a straight join"
            );
            return CornerResolution::Line(corner);
        }
    };

    let max_radius = (incoming.length() / 2.0).min(outgoing.length() / 2.0);
    let effective = if radius > max_radius {
        debug!(
            requested = radius,
            clamped = max_radius,
            "Clamped corner radius to half the shorter adjacent edge"
        );
        max_radius
    } else {
        radius
    };

    CornerResolution::Blend {
        start: corner + incoming_unit * effective,
        ctrl: corner,
        end: corner + outgoing_unit * effective,
        radius: effective,
    }
}
