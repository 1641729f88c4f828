//! Conversions between [`Bbox`] and the coordinate formats used by
//! detection tooling.
//!
//! | Format          | Layout                               | Factory       | Serializer      |
//! |-----------------|--------------------------------------|---------------|-----------------|
//! | Pascal VOC/XYXY | `[left, top, right, bottom]`         | `from_tlbr`   | `to_tlbr`       |
//! | COCO            | `[left, top, width, height]`         | `from_tlwh`   | `to_tlwh`       |
//! | center          | `[cx, cy, width, height]`            | `from_cwh`    | `to_cwh`        |
//! | Albumentations  | normalized `[left, top, right, bottom]` | -          | `to_norm_tlbr`  |
//! | YOLO            | normalized `[cx, cy, width, height]` | -             | `to_norm_cwh`   |
//!
//! Normalization divides x values by `img_w - 1` and y values by `img_h - 1`,
//! matching the inclusive right/bottom edge convention: the pixel at index
//! `img_w - 1` maps to `1.0`.

use super::Bbox;
use crate::error::BboxError;

const SEQUENCE_LEN: usize = 4;

fn check_len(seq: &[f64]) -> Result<[f64; SEQUENCE_LEN], BboxError> {
    <[f64; SEQUENCE_LEN]>::try_from(seq).map_err(|_| {
        BboxError::invalid_argument(format!(
            "A sequence of len {} has been passed. Need a sequence of len {}.",
            seq.len(),
            SEQUENCE_LEN
        ))
    })
}

/// Divisors mapping pixel indices onto `[0, 1]`.
#[inline]
fn norm_divisors(img_w: u32, img_h: u32) -> (f64, f64) {
    (f64::from(img_w) - 1.0, f64::from(img_h) - 1.0)
}

/// Factory conversions.
impl Bbox {
    /// Builds a box from `[left, top, right, bottom]`.
    ///
    /// # Errors
    ///
    /// [`BboxError::InvalidArgument`] if `tlbr` does not hold exactly four
    /// values, [`BboxError::InvalidGeometry`] if the box is inverted.
    pub fn from_tlbr(tlbr: &[f64]) -> Result<Self, BboxError> {
        let [left, top, right, bottom] = check_len(tlbr)?;
        Self::new(left, top, right, bottom)
    }

    /// Same as [`Bbox::from_tlbr`].
    pub fn from_xyxy(xyxy: &[f64]) -> Result<Self, BboxError> {
        Self::from_tlbr(xyxy)
    }

    /// Same as [`Bbox::from_tlbr`].
    pub fn from_pascal_voc(voc: &[f64]) -> Result<Self, BboxError> {
        Self::from_tlbr(voc)
    }

    /// Same as [`Bbox::from_tlbr`].
    pub fn from_list(list: &[f64]) -> Result<Self, BboxError> {
        Self::from_tlbr(list)
    }

    /// Builds a box from `[left, top, width, height]`.
    ///
    /// `right` and `bottom` are computed as `left + width` and `top + height`
    /// in `f64`, so a round trip through [`Bbox::to_tlwh`] is exact only when
    /// those sums are exactly representable (e.g. integer or dyadic
    /// coordinates). Otherwise it can differ in the last bits.
    ///
    /// # Errors
    ///
    /// [`BboxError::InvalidArgument`] if `tlwh` does not hold exactly four
    /// values, [`BboxError::InvalidGeometry`] if width or height is negative.
    pub fn from_tlwh(tlwh: &[f64]) -> Result<Self, BboxError> {
        let [left, top, width, height] = check_len(tlwh)?;
        Self::new(left, top, left + width, top + height)
    }

    /// Same as [`Bbox::from_tlwh`].
    pub fn from_coco(coco: &[f64]) -> Result<Self, BboxError> {
        Self::from_tlwh(coco)
    }

    /// Builds a box from `[center_x, center_y, width, height]`.
    ///
    /// The edges are `center -/+ size / 2` in `f64`. A round trip through
    /// [`Bbox::to_cwh`] is exact only when the centers and half sizes are
    /// exactly representable; `Bbox(0.1, 0.2, 0.7, 0.9)` comes back with
    /// `left = 0.09999999999999998`.
    ///
    /// # Errors
    ///
    /// [`BboxError::InvalidArgument`] if `cwh` does not hold exactly four
    /// values, [`BboxError::InvalidGeometry`] if width or height is negative.
    pub fn from_cwh(cwh: &[f64]) -> Result<Self, BboxError> {
        let [cx, cy, width, height] = check_len(cwh)?;
        let half_width = width / 2.0;
        let half_height = height / 2.0;
        Self::new(
            cx - half_width,
            cy - half_height,
            cx + half_width,
            cy + half_height,
        )
    }
}

/// Serializers.
impl Bbox {
    /// Returns `[left, top, right, bottom]`.
    pub fn to_tlbr(&self) -> [f64; 4] {
        [self.left, self.top, self.right, self.bottom]
    }

    /// Same as [`Bbox::to_tlbr`].
    pub fn to_xyxy(&self) -> [f64; 4] {
        self.to_tlbr()
    }

    /// Same as [`Bbox::to_tlbr`].
    pub fn to_pascal_voc(&self) -> [f64; 4] {
        self.to_tlbr()
    }

    /// Same as [`Bbox::to_tlbr`].
    pub fn to_list(&self) -> [f64; 4] {
        self.to_tlbr()
    }

    /// Returns `[left, top, right, bottom]` normalized by the image size.
    ///
    /// `img_w` and `img_h` are expected to be at least 2; smaller values
    /// divide by zero and produce non-finite output.
    pub fn to_norm_tlbr(&self, img_w: u32, img_h: u32) -> [f64; 4] {
        let (dw, dh) = norm_divisors(img_w, img_h);
        [
            self.left / dw,
            self.top / dh,
            self.right / dw,
            self.bottom / dh,
        ]
    }

    /// Same as [`Bbox::to_norm_tlbr`] (the Albumentations layout).
    pub fn to_albu(&self, img_w: u32, img_h: u32) -> [f64; 4] {
        self.to_norm_tlbr(img_w, img_h)
    }

    /// Returns `[left, top, width, height]`.
    pub fn to_tlwh(&self) -> [f64; 4] {
        [self.left, self.top, self.width(), self.height()]
    }

    /// Same as [`Bbox::to_tlwh`].
    pub fn to_coco(&self) -> [f64; 4] {
        self.to_tlwh()
    }

    /// Returns `[left, top, width, height]` normalized by the image size.
    ///
    /// Width and height use the same divisors as the corners, so
    /// `left + width` equals the normalized right edge.
    pub fn to_norm_tlwh(&self, img_w: u32, img_h: u32) -> [f64; 4] {
        let (dw, dh) = norm_divisors(img_w, img_h);
        [
            self.left / dw,
            self.top / dh,
            self.width() / dw,
            self.height() / dh,
        ]
    }

    /// Returns `[center_x, center_y, width, height]`.
    pub fn to_cwh(&self) -> [f64; 4] {
        let (cx, cy) = self.center();
        [cx, cy, self.width(), self.height()]
    }

    /// Returns `[center_x, center_y, width, height]` normalized by the image size.
    pub fn to_norm_cwh(&self, img_w: u32, img_h: u32) -> [f64; 4] {
        let (dw, dh) = norm_divisors(img_w, img_h);
        let (cx, cy) = self.center();
        [cx / dw, cy / dh, self.width() / dw, self.height() / dh]
    }

    /// Same as [`Bbox::to_norm_cwh`] (the YOLO layout).
    pub fn to_yolo(&self, img_w: u32, img_h: u32) -> [f64; 4] {
        self.to_norm_cwh(img_w, img_h)
    }

    /// Returns the four corners as `(x, y)` points, ordered
    /// top-left, top-right, bottom-right, bottom-left.
    pub fn to_polygon(&self) -> [(f64, f64); 4] {
        [
            (self.left, self.top),
            (self.right, self.top),
            (self.right, self.bottom),
            (self.left, self.bottom),
        ]
    }
}
