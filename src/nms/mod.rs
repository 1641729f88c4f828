//! Greedy non-maximum suppression over scored boxes.
//!
//! Candidates are visited in decreasing score order. Each visited candidate
//! that has not been suppressed is kept, and every lower-ranked candidate
//! whose IoU with it is strictly greater than the threshold is suppressed.
//!
//! # Example
//!
//! ```
//! use easybox::{nms, Bbox, NmsOptions};
//!
//! let boxes = vec![
//!     Bbox::new(0.0, 0.0, 10.0, 10.0).unwrap(),
//!     Bbox::new(5.0, 5.0, 15.0, 15.0).unwrap(),
//! ];
//! let scores = vec![0.7, 0.8];
//!
//! let kept = nms(&boxes, &scores, &NmsOptions::with_iou_threshold(0.1)).unwrap();
//! assert_eq!(kept, vec![(boxes[1], 0.8)]);
//! ```

use crate::bbox::Bbox;
use crate::error::BboxError;

/// IoU threshold used by [`NmsOptions::default`].
pub const DEFAULT_IOU_THRESHOLD: f64 = 0.5;

/// A box paired with its detection score.
pub type Detection = (Bbox, f64);

/// Options for suppression behavior.
#[derive(Clone, Debug, PartialEq)]
pub struct NmsOptions {
    /// Candidates whose IoU with a kept box is strictly greater than this
    /// are suppressed. At `1.0` nothing is suppressed.
    pub iou_threshold: f64,
}

impl NmsOptions {
    /// Options with a custom IoU threshold.
    pub fn with_iou_threshold(iou_threshold: f64) -> Self {
        Self { iou_threshold }
    }
}

impl Default for NmsOptions {
    fn default() -> Self {
        Self {
            iou_threshold: DEFAULT_IOU_THRESHOLD,
        }
    }
}

/// Runs non-maximum suppression and returns the surviving detections,
/// ordered by decreasing score.
///
/// Equal scores keep their input order; `-0.0` and `0.0` count as equal.
/// Scores are otherwise compared with [`f64::total_cmp`], so the ordering
/// is total even with NaN present.
///
/// # Errors
///
/// [`BboxError::InvalidArgument`] if `boxes` and `scores` differ in length.
pub fn nms(
    boxes: &[Bbox],
    scores: &[f64],
    opts: &NmsOptions,
) -> Result<Vec<Detection>, BboxError> {
    if boxes.len() != scores.len() {
        return Err(BboxError::invalid_argument(format!(
            "The length of bboxes ({}) and scores ({}) must be the same.",
            boxes.len(),
            scores.len()
        )));
    }

    // Stable sort: ties stay in input order. Adding `0.0` folds `-0.0`
    // into `0.0`, which `total_cmp` would otherwise rank lower.
    let mut order: Vec<usize> = (0..boxes.len()).collect();
    order.sort_by(|&a, &b| (scores[b] + 0.0).total_cmp(&(scores[a] + 0.0)));

    let mut suppressed = vec![false; order.len()];
    let mut kept = Vec::new();

    for (rank, &current) in order.iter().enumerate() {
        if suppressed[rank] {
            continue;
        }
        kept.push((boxes[current], scores[current]));

        let current_box = &boxes[current];
        for (later, &candidate) in order.iter().enumerate().skip(rank + 1) {
            if !suppressed[later] && current_box.iou(&boxes[candidate]) > opts.iou_threshold {
                suppressed[later] = true;
            }
        }
    }

    Ok(kept)
}
