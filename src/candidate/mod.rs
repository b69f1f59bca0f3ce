//! Candidate detections and duplicate suppression.
//!
//! Holds the raw [`Detection`] value type produced by the decoder and the
//! greedy IoU non-maximum suppression that prunes it.

pub(crate) mod nms;

use std::cmp::Ordering;

/// Number of box coordinates in a detection record.
pub(crate) const LOCATIONS: usize = 4;

/// Raw candidate detection in normalized coordinate space.
///
/// The box is corner-form `[x1, y1, x2, y2]` regardless of which tensor
/// layout produced it; anchor-based records are converted at decode time.
/// A detection is a pure value with no tie to its source tensor offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Detection {
    /// Corner-form box `[x1, y1, x2, y2]` in normalized coordinates.
    pub bbox: [f32; 4],
    /// Confidence score; always `>=` the decode threshold by construction.
    pub confidence: f32,
    /// Index into the host's class name table.
    pub class_id: usize,
}

fn detection_cmp_desc(a: &Detection, b: &Detection) -> Ordering {
    b.confidence
        .total_cmp(&a.confidence)
        .then_with(|| a.class_id.cmp(&b.class_id))
}

/// Sorts detections by descending confidence with a deterministic total
/// order (ties broken by class id).
pub(crate) fn sort_detections_desc(detections: &mut [Detection]) {
    detections.sort_by(detection_cmp_desc);
}
