//! Pure transformations. Each one builds a new [`Bbox`] through
//! [`Bbox::new`], so a result that would be inverted is reported as
//! [`BboxError::InvalidGeometry`] instead of being constructed.

use super::Bbox;
use crate::error::BboxError;

impl Bbox {
    /// Translates the box by `dx` horizontally and `dy` vertically.
    pub fn shift(&self, dx: f64, dy: f64) -> Result<Self, BboxError> {
        Self::new(
            self.left + dx,
            self.top + dy,
            self.right + dx,
            self.bottom + dy,
        )
    }

    /// Scales width and height by `factor` around the center.
    ///
    /// A factor of `0` collapses the box onto its center point.
    ///
    /// # Errors
    ///
    /// [`BboxError::InvalidArgument`] if `factor` is negative or NaN.
    pub fn scale(&self, factor: f64) -> Result<Self, BboxError> {
        if !(factor >= 0.0) {
            return Err(BboxError::invalid_argument(format!(
                "Scaling with a negative value would result in an invalid Bbox. Received {}",
                factor
            )));
        }

        let (cx, cy) = self.center();
        let half_width = self.width() * factor / 2.0;
        let half_height = self.height() * factor / 2.0;
        Self::new(
            cx - half_width,
            cy - half_height,
            cx + half_width,
            cy + half_height,
        )
    }

    /// Grows every side outward by `padding`. Negative padding shrinks.
    pub fn expand_uniform(&self, padding: f64) -> Result<Self, BboxError> {
        self.expand(padding, padding, padding, padding)
    }

    /// Grows each side outward by its own amount. Negative amounts shrink.
    pub fn expand(&self, left: f64, top: f64, right: f64, bottom: f64) -> Result<Self, BboxError> {
        Self::new(
            self.left - left,
            self.top - top,
            self.right + right,
            self.bottom + bottom,
        )
    }

    /// Grows the shorter dimension symmetrically so the box becomes square.
    pub fn pad_to_square(&self) -> Result<Self, BboxError> {
        let width = self.width();
        let height = self.height();

        if width > height {
            let diff = (width - height) / 2.0;
            self.expand(0.0, diff, 0.0, diff)
        } else if height > width {
            let diff = (height - width) / 2.0;
            self.expand(diff, 0.0, diff, 0.0)
        } else {
            Ok(*self)
        }
    }

    /// Grows width or height symmetrically to reach `target_ratio`
    /// (width over height).
    ///
    /// # Errors
    ///
    /// [`BboxError::InvalidArgument`] if `target_ratio` is zero, negative or NaN.
    pub fn pad_to_aspect_ratio(&self, target_ratio: f64) -> Result<Self, BboxError> {
        if !(target_ratio > 0.0) {
            return Err(BboxError::invalid_argument(format!(
                "Target ratio cannot be negative or zero. Received {}",
                target_ratio
            )));
        }

        let current_ratio = self.aspect_ratio();
        if current_ratio > target_ratio {
            let new_height = self.width() / target_ratio;
            let diff = (new_height - self.height()) / 2.0;
            self.expand(0.0, diff, 0.0, diff)
        } else if current_ratio < target_ratio {
            let new_width = self.height() * target_ratio;
            let diff = (new_width - self.width()) / 2.0;
            self.expand(diff, 0.0, diff, 0.0)
        } else {
            Ok(*self)
        }
    }

    /// Clips the box to an image of `img_w` x `img_h` pixels.
    ///
    /// The right and bottom edges are inclusive, so the largest result is
    /// `(0, 0, img_w - 1, img_h - 1)`. The near edges are raised to `0` and
    /// the far edges lowered to the last pixel index.
    ///
    /// # Errors
    ///
    /// [`BboxError::InvalidGeometry`] when the box lies entirely outside
    /// the image on either axis. Check [`Bbox::overlaps`] against the image
    /// box first if an empty result should be skipped silently.
    pub fn clip_to_img(&self, img_w: u32, img_h: u32) -> Result<Self, BboxError> {
        let max_x = f64::from(img_w) - 1.0;
        let max_y = f64::from(img_h) - 1.0;
        Self::new(
            self.left.max(0.0),
            self.top.max(0.0),
            self.right.min(max_x),
            self.bottom.min(max_y),
        )
    }
}
