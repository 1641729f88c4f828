#![allow(dead_code)]

use easybox::Bbox;
use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

/// Coordinates are integers in this range so sums, halves and differences
/// stay exact in `f64`.
pub const COORD_RANGE: std::ops::RangeInclusive<i32> = -1_000..=1_000;
pub const SIDE_RANGE: std::ops::RangeInclusive<i32> = 0..=500;

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(256);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// Any valid box, including zero-width and zero-height ones.
pub fn arb_bbox() -> impl Strategy<Value = Bbox> {
    (COORD_RANGE, COORD_RANGE, SIDE_RANGE, SIDE_RANGE).prop_map(|(left, top, w, h)| {
        Bbox::from_tlwh(&[left as f64, top as f64, w as f64, h as f64])
            .expect("non-negative sides always build a valid bbox")
    })
}

/// A box with strictly positive area.
pub fn arb_solid_bbox() -> impl Strategy<Value = Bbox> {
    arb_bbox().prop_filter("zero-area bbox", |b| b.area() > 0.0)
}

/// Boxes packed into a small region so that overlaps are common.
pub fn arb_clustered_bbox() -> impl Strategy<Value = Bbox> {
    (0..=40i32, 0..=40i32, 1..=30i32, 1..=30i32).prop_map(|(left, top, w, h)| {
        Bbox::from_tlwh(&[left as f64, top as f64, w as f64, h as f64])
            .expect("positive sides always build a valid bbox")
    })
}

/// Parallel `boxes`/`scores` with scores drawn from a handful of values
/// so ties are frequent. Both `0.0` and `-0.0` occur.
pub fn arb_detections(max_len: usize) -> impl Strategy<Value = (Vec<Bbox>, Vec<f64>)> {
    proptest::collection::vec((arb_clustered_bbox(), 0u8..=9u8), 0..=max_len).prop_map(
        |pairs: Vec<(Bbox, u8)>| -> (Vec<Bbox>, Vec<f64>) {
            pairs
                .into_iter()
                .map(|(bbox, score)| {
                    let score = if score == 9 { -0.0 } else { f64::from(score) / 8.0 };
                    (bbox, score)
                })
                .unzip()
        },
    )
}

pub fn is_ordered(bbox: &Bbox) -> bool {
    bbox.left() <= bbox.right() && bbox.top() <= bbox.bottom()
}

pub fn encloses(outer: &Bbox, inner: &Bbox) -> bool {
    inner
        .to_polygon()
        .iter()
        .all(|&(x, y)| outer.contains_point(x, y))
}
