//! Fuzz target for non-maximum suppression.
//!
//! Each 40-byte chunk becomes one candidate (four coordinates in tlwh
//! layout plus a score). Survivors must come out in non-increasing score
//! order and never outnumber the input.

#![no_main]

use easybox::{nms, Bbox, NmsOptions};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 64 * 1024 {
        return;
    }

    let mut boxes = Vec::new();
    let mut scores = Vec::new();
    for chunk in data.chunks_exact(40) {
        let values: Vec<f64> = chunk
            .chunks_exact(8)
            .map(|bytes| {
                let mut buf = [0u8; 8];
                buf.copy_from_slice(bytes);
                f64::from_le_bytes(buf)
            })
            .collect();

        if let Ok(bbox) = Bbox::from_tlwh(&values[..4]) {
            boxes.push(bbox);
            scores.push(values[4]);
        }
    }

    let threshold = data.first().map_or(0.5, |&byte| f64::from(byte) / 255.0);
    let kept = nms(&boxes, &scores, &NmsOptions::with_iou_threshold(threshold))
        .expect("parallel inputs always have equal length");

    assert!(kept.len() <= boxes.len());
    assert!(kept
        .windows(2)
        .all(|w| (w[0].1 + 0.0).total_cmp(&(w[1].1 + 0.0)).is_ge()));
});
