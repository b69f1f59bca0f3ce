//! Anchor-based record decoding.
//!
//! Each record carries a center-form box, an objectness scalar, and one
//! score per class. A candidate must pass two gates: objectness against
//! the threshold, then the objectness-weighted class maximum against the
//! same threshold. The box is converted to corner form on emit.

use crate::candidate::{Detection, LOCATIONS};

pub(crate) fn decode(output: &[f32], num_classes: usize, conf_thresh: f32) -> Vec<Detection> {
    let stride = num_classes + LOCATIONS + 1;
    let mut detections = Vec::new();

    for record in output.chunks_exact(stride) {
        // Positive-form gate so a NaN objectness excludes the record.
        let objectness = record[LOCATIONS];
        if objectness >= conf_thresh {
            let mut max_score = 0.0f32;
            let mut max_idx = 0usize;
            for (class_idx, &score) in record[LOCATIONS + 1..].iter().enumerate() {
                let combined = objectness * score;
                if combined > max_score {
                    max_score = combined;
                    max_idx = class_idx;
                }
            }

            if max_score >= conf_thresh {
                let (cx, cy, w, h) = (record[0], record[1], record[2], record[3]);
                detections.push(Detection {
                    bbox: [cx - w / 2.0, cy - h / 2.0, cx + w / 2.0, cy + h / 2.0],
                    confidence: max_score,
                    class_id: max_idx,
                });
            }
        }
    }

    detections
}
