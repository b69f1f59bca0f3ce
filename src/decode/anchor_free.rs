//! Anchor-free record decoding.
//!
//! Each record carries a ready corner-form box followed by one score per
//! class; there is no separate objectness scalar.

use crate::candidate::{Detection, LOCATIONS};

pub(crate) fn decode(output: &[f32], num_classes: usize, conf_thresh: f32) -> Vec<Detection> {
    let stride = num_classes + LOCATIONS;
    let mut detections = Vec::new();

    for record in output.chunks_exact(stride) {
        // Argmax with strict `>`: the first index wins ties, and scores
        // below the 0.0 accumulator start never win at all.
        let mut max_score = 0.0f32;
        let mut max_idx = 0usize;
        for (class_idx, &score) in record[LOCATIONS..].iter().enumerate() {
            if score > max_score {
                max_score = score;
                max_idx = class_idx;
            }
        }

        if max_score >= conf_thresh {
            detections.push(Detection {
                bbox: [record[0], record[1], record[2], record[3]],
                confidence: max_score,
                class_id: max_idx,
            });
        }
    }

    detections
}
