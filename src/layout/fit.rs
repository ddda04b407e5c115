use crate::error::{LayoutError, Result};
use crate::math::TOLERANCE;

/// Margin factor applied to the fitted scale to leave breathing room
/// around the drawing.
pub const MARGIN_FACTOR: f64 = 0.88;

/// Computes the uniform scale that fits a raw drawing extent into an
/// available page region.
///
/// Scaling is always uniform so drawn shapes stay proportionally
/// correct. Degenerate raw extents (zero-sized drawings) are skipped
/// per axis rather than producing a division by zero; a fully
/// degenerate drawing gets scale 1.0.
pub struct FitScale {
    raw_width: f64,
    raw_height: f64,
    avail_width: f64,
    avail_height: f64,
    margin: f64,
}

impl FitScale {
    /// Creates a fit computation with the default margin factor.
    #[must_use]
    pub fn new(raw_width: f64, raw_height: f64, avail_width: f64, avail_height: f64) -> Self {
        Self {
            raw_width,
            raw_height,
            avail_width,
            avail_height,
            margin: MARGIN_FACTOR,
        }
    }

    /// Overrides the margin factor.
    #[must_use]
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Executes the computation, returning a finite, positive scale.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::EmptyRegion`] if the available region has
    /// a non-positive side.
    pub fn execute(&self) -> Result<f64> {
        if self.avail_width <= 0.0 || self.avail_height <= 0.0 {
            return Err(LayoutError::EmptyRegion {
                width: self.avail_width,
                height: self.avail_height,
            }
            .into());
        }

        let mut scale = f64::INFINITY;
        if self.raw_width > TOLERANCE {
            scale = scale.min(self.avail_width / self.raw_width);
        }
        if self.raw_height > TOLERANCE {
            scale = scale.min(self.avail_height / self.raw_height);
        }
        if !scale.is_finite() {
            return Ok(1.0);
        }
        Ok(scale * self.margin)
    }
}
