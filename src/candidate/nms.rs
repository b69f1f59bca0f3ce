//! Greedy non-maximum suppression over candidate boxes.

use crate::candidate::{sort_detections_desc, Detection};

/// Computes the Intersection-over-Union of two corner-form boxes.
///
/// Box areas are taken as-is: a degenerate box with `x2 < x1` contributes
/// a negative area. Only the intersection extents are floored at zero.
/// A zero union divides to NaN, which compares false against any
/// threshold, so such pairs never suppress each other.
pub fn iou(a: &Detection, b: &Detection) -> f32 {
    let ix1 = a.bbox[0].max(b.bbox[0]);
    let iy1 = a.bbox[1].max(b.bbox[1]);
    let ix2 = a.bbox[2].min(b.bbox[2]);
    let iy2 = a.bbox[3].min(b.bbox[3]);

    let intersection = (ix2 - ix1).max(0.0) * (iy2 - iy1).max(0.0);
    let area_a = (a.bbox[2] - a.bbox[0]) * (a.bbox[3] - a.bbox[1]);
    let area_b = (b.bbox[2] - b.bbox[0]) * (b.bbox[3] - b.bbox[1]);
    let union = area_a + area_b - intersection;

    intersection / union
}

/// Applies greedy IoU non-maximum suppression.
///
/// Candidates are sorted by descending confidence; each surviving
/// candidate suppresses every later candidate whose IoU with it is
/// strictly greater than `iou_thresh`. The result is the kept
/// subsequence, still in descending confidence order.
///
/// Complexity is O(n²) after the sort, which is the accepted cost at the
/// candidate counts left over after confidence filtering.
pub fn suppress(mut detections: Vec<Detection>, iou_thresh: f32) -> Vec<Detection> {
    sort_detections_desc(&mut detections);

    let mut kept: Vec<Detection> = Vec::new();
    let mut suppressed = vec![false; detections.len()];

    for i in 0..detections.len() {
        if suppressed[i] {
            continue;
        }
        kept.push(detections[i]);

        for j in (i + 1)..detections.len() {
            if suppressed[j] {
                continue;
            }
            if iou(&detections[i], &detections[j]) > iou_thresh {
                suppressed[j] = true;
            }
        }
    }

    kept
}
