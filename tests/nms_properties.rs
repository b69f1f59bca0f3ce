use detparse::{iou, suppress, Detection};
use rand::Rng;

fn det(bbox: [f32; 4], confidence: f32, class_id: usize) -> Detection {
    Detection {
        bbox,
        confidence,
        class_id,
    }
}

fn random_detections(count: usize) -> Vec<Detection> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| {
            let x1 = rng.random_range(0.0f32..0.8);
            let y1 = rng.random_range(0.0f32..0.8);
            let w = rng.random_range(0.05f32..0.2);
            let h = rng.random_range(0.05f32..0.2);
            det(
                [x1, y1, x1 + w, y1 + h],
                rng.random_range(0.25f32..1.0),
                rng.random_range(0..80),
            )
        })
        .collect()
}

#[test]
fn iou_matches_known_overlap() {
    let a = det([0.0, 0.0, 10.0, 10.0], 1.0, 0);
    let b = det([5.0, 5.0, 15.0, 15.0], 1.0, 0);

    // Intersection 25, union 100 + 100 - 25.
    let expected = 25.0 / 175.0;
    assert!((iou(&a, &b) - expected).abs() < 1e-6);
    assert!((iou(&b, &a) - expected).abs() < 1e-6);
}

#[test]
fn iou_of_disjoint_boxes_is_zero() {
    let a = det([0.0, 0.0, 1.0, 1.0], 1.0, 0);
    let b = det([2.0, 2.0, 3.0, 3.0], 1.0, 0);

    assert_eq!(iou(&a, &b), 0.0);
}

#[test]
fn suppress_keeps_highest_confidence_representative() {
    let input = vec![
        det([0.0, 0.0, 1.0, 1.0], 0.6, 0),
        det([0.05, 0.05, 1.05, 1.05], 0.9, 0),
        det([5.0, 5.0, 6.0, 6.0], 0.7, 1),
    ];
    let kept = suppress(input, 0.45);

    assert_eq!(kept.len(), 2);
    assert!((kept[0].confidence - 0.9).abs() < 1e-6);
    assert!((kept[1].confidence - 0.7).abs() < 1e-6);
}

#[test]
fn suppress_is_idempotent() {
    let input = random_detections(200);
    let once = suppress(input, 0.45);
    let twice = suppress(once.clone(), 0.45);

    assert_eq!(once, twice);
}

#[test]
fn suppress_result_is_sorted_subsequence_of_input() {
    let input = random_detections(300);

    let mut sorted = input.clone();
    sorted.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

    let kept = suppress(input, 0.45);

    for pair in kept.windows(2) {
        assert!(pair[0].confidence >= pair[1].confidence);
    }

    // Every kept detection appears in the sorted input, in order.
    let mut cursor = 0;
    for det in &kept {
        let pos = sorted[cursor..]
            .iter()
            .position(|cand| cand == det)
            .expect("kept detection missing from sorted input");
        cursor += pos + 1;
    }
}

#[test]
fn iou_exactly_at_threshold_is_not_suppressed() {
    // Intersection 1, union 2: IoU is exactly 0.5.
    let input = vec![
        det([0.0, 0.0, 1.0, 1.0], 0.9, 0),
        det([0.0, 0.0, 1.0, 2.0], 0.8, 0),
    ];
    let kept = suppress(input, 0.5);

    assert_eq!(kept.len(), 2);
}

#[test]
fn zero_area_boxes_never_suppress_each_other() {
    // Identical degenerate boxes: 0/0 IoU is NaN, which compares false.
    let input = vec![
        det([0.5, 0.5, 0.5, 0.5], 0.9, 0),
        det([0.5, 0.5, 0.5, 0.5], 0.8, 0),
    ];
    let kept = suppress(input, 0.45);

    assert_eq!(kept.len(), 2);
}
