//! The validated axis-aligned bounding box.
//!
//! A [`Bbox`] is stored in Pascal VOC layout: top-left and bottom-right
//! corners with a top-left origin, so `top <= bottom` and `left <= right`.
//! The bottom and right edges are inclusive: for an image of width `W` and
//! height `H`, the box covering the whole image is `Bbox::new(0, 0, W-1, H-1)`.
//!
//! Every operation returns a new value; a `Bbox` is never modified in place.

mod convert;
mod ops;
mod transform;

use std::fmt;
use std::ops::{BitAnd, BitOr};

use serde::{Deserialize, Serialize};

use crate::error::BboxError;

/// An axis-aligned bounding box in pixel space.
///
/// The four coordinates are private so that the ordering invariant
/// (`left <= right`, `top <= bottom`) holds for every value that exists.
/// Derived quantities (width, height, area, center, aspect ratio) are
/// recomputed on each call.
#[derive(Clone, Copy, PartialEq, Serialize)]
pub struct Bbox {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

impl Bbox {
    /// Creates a new bounding box from its four edges.
    ///
    /// # Errors
    ///
    /// Returns [`BboxError::InvalidGeometry`] if `left > right` or
    /// `top > bottom`, or if any coordinate is NaN.
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Result<Self, BboxError> {
        if !(left <= right && top <= bottom) {
            return Err(BboxError::InvalidGeometry {
                left,
                top,
                right,
                bottom,
            });
        }

        Ok(Self {
            left,
            top,
            right,
            bottom,
        })
    }

    /// Returns the left coordinate.
    #[inline]
    pub fn left(&self) -> f64 {
        self.left
    }

    /// Returns the top coordinate.
    #[inline]
    pub fn top(&self) -> f64 {
        self.top
    }

    /// Returns the right coordinate.
    #[inline]
    pub fn right(&self) -> f64 {
        self.right
    }

    /// Returns the bottom coordinate.
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    /// Returns the width of the bounding box (never negative).
    #[inline]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Returns the height of the bounding box (never negative).
    #[inline]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Returns the area of the bounding box.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Returns the center of the bounding box in `(x, y)` order.
    #[inline]
    pub fn center(&self) -> (f64, f64) {
        (
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Returns the aspect ratio (width over height).
    ///
    /// A zero-height box yields `inf`, or NaN when the width is zero too.
    #[inline]
    pub fn aspect_ratio(&self) -> f64 {
        self.width() / self.height()
    }
}

impl fmt::Debug for Bbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bbox")
            .field("left", &self.left)
            .field("top", &self.top)
            .field("right", &self.right)
            .field("bottom", &self.bottom)
            .finish()
    }
}

impl fmt::Display for Bbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bbox(left={}, top={}, right={}, bottom={})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

// Deserialization goes through `Bbox::new` so inverted boxes are rejected.
impl<'de> Deserialize<'de> for Bbox {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct BboxData {
            left: f64,
            top: f64,
            right: f64,
            bottom: f64,
        }
        let data = BboxData::deserialize(deserializer)?;
        Bbox::new(data.left, data.top, data.right, data.bottom).map_err(serde::de::Error::custom)
    }
}

/// `a | b` is [`Bbox::union`].
impl BitOr for Bbox {
    type Output = Bbox;

    fn bitor(self, rhs: Bbox) -> Bbox {
        self.union(&rhs)
    }
}

/// `a & b` is [`Bbox::intersection`].
impl BitAnd for Bbox {
    type Output = Option<Bbox>;

    fn bitand(self, rhs: Bbox) -> Option<Bbox> {
        self.intersection(&rhs)
    }
}
