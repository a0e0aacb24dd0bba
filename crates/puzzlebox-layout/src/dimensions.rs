//! Box dimensions and the derived panel and flap geometry.
//!
//! Sizes are kept as floats; positions handed to the path builder are
//! truncated to whole millimetres.

use crate::error::{LayoutError, LayoutResult};
use serde::{Deserialize, Serialize};

/// Default share of the depth used for the bottom flaps.
pub const DEFAULT_BOTTOM_TAB_PERCENT: f64 = 0.50;

/// Box dimensions in millimetres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxDimensions {
    /// Front and back panel width
    pub width: f64,
    /// Side panel width
    pub depth: f64,
    /// Panel height
    pub height: f64,
    /// Clearance left at both ends of each flap
    pub fold_gap: f64,
    /// Bottom flap height as a fraction of the depth
    pub bottom_tab_percent: f64,
    /// Radius applied to the outer corners of flaps and tabs
    #[serde(default)]
    pub corner_radius: f64,
}

impl Default for BoxDimensions {
    fn default() -> Self {
        Self::new(276.0, 206.0, 196.0, 2.0)
    }
}

impl BoxDimensions {
    pub fn new(width: f64, depth: f64, height: f64, fold_gap: f64) -> Self {
        Self {
            width,
            depth,
            height,
            fold_gap,
            bottom_tab_percent: DEFAULT_BOTTOM_TAB_PERCENT,
            corner_radius: 0.0,
        }
    }

    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn w(&self) -> f64 {
        self.width.trunc()
    }

    pub fn d(&self) -> f64 {
        self.depth.trunc()
    }

    pub fn h(&self) -> f64 {
        self.height.trunc()
    }

    pub fn side_flap_width(&self) -> f64 {
        0.25 * self.depth
    }

    pub fn top_flap_height(&self) -> f64 {
        0.2 * self.depth
    }

    pub fn bottom_flap_max_height(&self) -> f64 {
        self.bottom_tab_percent * self.depth
    }

    pub fn side_flap_height(&self) -> f64 {
        0.66 * self.depth
    }

    pub fn total_width(&self) -> f64 {
        (2.0 * self.width + 2.0 * self.depth + self.side_flap_width()).trunc()
    }

    pub fn total_height(&self) -> f64 {
        (self.top_flap_height() + self.depth + self.height + self.bottom_flap_max_height()).trunc()
    }

    /// Y of the upper panel edge.
    pub fn top(&self) -> f64 {
        (self.top_flap_height() + self.depth).trunc()
    }

    /// Y of the lower panel edge.
    pub fn bottom(&self) -> f64 {
        (self.top_flap_height() + self.depth + self.height).trunc()
    }

    pub fn side_a_left(&self) -> f64 {
        0.0
    }

    pub fn front_panel_left(&self) -> f64 {
        self.depth.trunc()
    }

    pub fn front_panel_right(&self) -> f64 {
        (self.depth + self.width).trunc()
    }

    pub fn back_panel_left(&self) -> f64 {
        (2.0 * self.depth + self.width).trunc()
    }

    pub fn back_panel_right(&self) -> f64 {
        (2.0 * self.depth + 2.0 * self.width).trunc()
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn validate(&self) -> LayoutResult<()> {
        let sizes = [
            ("width", self.width),
            ("depth", self.depth),
            ("height", self.height),
        ];
        for (name, value) in sizes {
            if !value.is_finite() || value <= 0.0 {
                return Err(LayoutError::InvalidDimensions(format!(
                    "{} must be > 0 (got {})",
                    name, value
                )));
            }
        }

        if !self.fold_gap.is_finite() || self.fold_gap < 0.0 {
            return Err(LayoutError::InvalidDimensions(format!(
                "fold gap must be >= 0 (got {})",
                self.fold_gap
            )));
        }

        if !(self.bottom_tab_percent > 0.0 && self.bottom_tab_percent <= 1.0) {
            return Err(LayoutError::InvalidDimensions(format!(
                "bottom tab percent must be in (0, 1] (got {})",
                self.bottom_tab_percent
            )));
        }

        if !self.corner_radius.is_finite() || self.corner_radius < 0.0 {
            return Err(LayoutError::InvalidDimensions(format!(
                "corner radius must be >= 0 (got {})",
                self.corner_radius
            )));
        }

        // Flaps and the tab are laid out on the truncated edge lengths.
        let shortest = self
            .w()
            .min(self.d())
            .min(self.h())
            .min(self.bottom() - self.top());
        if 2.0 * self.fold_gap >= shortest {
            return Err(LayoutError::InvalidDimensions(format!(
                "fold gap {} leaves no flap length on a {} mm edge",
                self.fold_gap, shortest
            )));
        }

        Ok(())
    }
}
