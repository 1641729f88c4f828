//! Fuzz target for bbox construction, conversion and geometry.
//!
//! Arbitrary bytes are read as little-endian `f64` values (NaN and
//! infinities included) and pushed through every operation, checking for
//! panics and for results that break the `left <= right`, `top <= bottom`
//! ordering.

#![no_main]

use easybox::Bbox;
use libfuzzer_sys::fuzz_target;

fn read_f64s(data: &[u8]) -> Vec<f64> {
    data.chunks_exact(8)
        .map(|chunk| {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(chunk);
            f64::from_le_bytes(bytes)
        })
        .collect()
}

fn assert_ordered(bbox: &Bbox) {
    assert!(bbox.left() <= bbox.right() && bbox.top() <= bbox.bottom());
}

fuzz_target!(|data: &[u8]| {
    let values = read_f64s(data);
    if values.len() < 10 {
        return;
    }

    // Length validation must never panic, whatever the slice length.
    let _ = Bbox::from_tlbr(&values[..values.len() % 6]);

    let Ok(a) = Bbox::from_tlbr(&values[0..4]) else {
        return;
    };
    let Ok(b) = Bbox::from_cwh(&values[4..8]) else {
        return;
    };
    let (x, y) = (values[8], values[9]);

    for result in [
        a.shift(x, y),
        a.scale(x),
        a.expand_uniform(y),
        a.pad_to_square(),
        a.pad_to_aspect_ratio(x),
        a.clip_to_img(x.abs() as u32, y.abs() as u32),
        Bbox::from_tlwh(&a.to_tlwh()),
    ] {
        if let Ok(bbox) = result {
            assert_ordered(&bbox);
        }
    }

    assert_ordered(&a.union(&b));
    if let Some(inter) = a.intersection(&b) {
        assert_ordered(&inter);
    }

    let _ = a.overlaps(&b);
    let _ = a.iou(&b);
    let _ = a.distance_to_point(x, y);
    let _ = a.to_norm_cwh(x.abs() as u32, y.abs() as u32);
    let _ = a.to_string();
});
