//! End-to-end scenarios through the public API.

use easybox::{nms, Bbox, BboxError, NmsOptions};

fn bbox(left: f64, top: f64, right: f64, bottom: f64) -> Bbox {
    Bbox::new(left, top, right, bottom).expect("valid bbox")
}

#[test]
fn coco_box_converts_to_every_layout() {
    let b = Bbox::from_coco(&[10.0, 20.0, 20.0, 20.0]).expect("coco bbox");

    assert_eq!(b.to_tlwh(), [10.0, 20.0, 20.0, 20.0]);
    assert_eq!(b.to_pascal_voc(), [10.0, 20.0, 30.0, 40.0]);
    assert_eq!(b.to_cwh(), [20.0, 30.0, 20.0, 20.0]);
    assert_eq!(b.to_norm_tlbr(101, 101), [0.1, 0.2, 0.3, 0.4]);
    assert_eq!(b.to_albu(101, 101), [0.1, 0.2, 0.3, 0.4]);
    assert_eq!(b.to_yolo(101, 101), [0.2, 0.3, 0.2, 0.2]);
}

#[test]
fn overlapping_boxes_intersect() {
    let inter = bbox(10.0, 10.0, 30.0, 30.0).intersection(&bbox(20.0, 20.0, 40.0, 40.0));
    assert_eq!(inter, Some(bbox(20.0, 20.0, 30.0, 30.0)));
}

#[test]
fn disjoint_boxes_have_zero_iou() {
    assert_eq!(bbox(0.0, 0.0, 10.0, 10.0).iou(&bbox(20.0, 20.0, 30.0, 30.0)), 0.0);
}

#[test]
fn edge_sharing_boxes_do_not_overlap() {
    assert!(!bbox(0.0, 10.0, 10.0, 20.0).overlaps(&bbox(10.0, 0.0, 30.0, 40.0)));
}

#[test]
fn nms_keeps_highest_scoring_of_overlapping_pair() {
    let boxes = vec![bbox(0.0, 0.0, 10.0, 10.0), bbox(5.0, 5.0, 15.0, 15.0)];
    let kept = nms(&boxes, &[0.7, 0.8], &NmsOptions::with_iou_threshold(0.1)).expect("nms");
    assert_eq!(kept, vec![(bbox(5.0, 5.0, 15.0, 15.0), 0.8)]);
}

#[test]
fn detector_output_pipeline() {
    // Raw YOLO-ish candidates in pixel cwh, some spilling past a 640x480 frame.
    let raw = [
        [100.0, 100.0, 80.0, 60.0],
        [104.0, 98.0, 84.0, 64.0],
        [630.0, 470.0, 40.0, 40.0],
        [320.0, 240.0, 50.0, 50.0],
    ];
    let scores = [0.91, 0.85, 0.6, 0.3];

    let boxes: Vec<Bbox> = raw
        .iter()
        .map(|cwh| Bbox::from_cwh(cwh).and_then(|b| b.clip_to_img(640, 480)))
        .collect::<Result<_, BboxError>>()
        .expect("candidates inside the frame");

    let kept = nms(&boxes, &scores, &NmsOptions::default()).expect("nms");
    let kept_scores: Vec<f64> = kept.iter().map(|(_, score)| *score).collect();
    assert_eq!(kept_scores, vec![0.91, 0.6, 0.3]);

    let corner = kept[1].0;
    assert_eq!(corner, bbox(610.0, 450.0, 639.0, 479.0));
    assert_eq!(corner.to_norm_tlbr(640, 480)[2], 1.0);
}

#[test]
fn clipping_a_box_outside_the_frame_is_an_error() {
    let outside = bbox(700.0, 10.0, 760.0, 50.0);
    let frame = bbox(0.0, 0.0, 639.0, 479.0);

    assert!(!outside.overlaps(&frame));
    assert!(matches!(
        outside.clip_to_img(640, 480),
        Err(BboxError::InvalidGeometry { .. })
    ));
}

#[test]
fn factories_reject_wrong_length() {
    let err = Bbox::from_xyxy(&[1.0, 2.0, 3.0]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid argument: A sequence of len 3 has been passed. Need a sequence of len 4."
    );
}
