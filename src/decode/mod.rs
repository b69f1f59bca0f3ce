//! Tensor decoding for the two supported detector output layouts.
//!
//! A flat float buffer is read as a sequence of fixed-stride records; the
//! record shape depends on the layout. Layout selection is an explicit
//! caller decision via [`TensorLayout`], never an implicit default.

pub(crate) mod anchor_based;
pub(crate) mod anchor_free;

use crate::candidate::Detection;

/// Record layout of a detector output tensor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TensorLayout {
    /// `[x1, y1, x2, y2, score_0 .. score_{C-1}]`, corner-form box,
    /// stride `C + 4` (YOLOv8-style heads).
    AnchorFree,
    /// `[cx, cy, w, h, objectness, score_0 .. score_{C-1}]`, center-form
    /// box, stride `C + 5` (YOLOv5-style heads).
    AnchorBased,
}

/// Decodes a flat output buffer into confidence-filtered candidates.
///
/// Records are scanned in buffer order; a trailing chunk shorter than the
/// layout stride is silently skipped. Every returned detection satisfies
/// `confidence >= conf_thresh`.
pub fn decode_tensor(
    output: &[f32],
    layout: TensorLayout,
    num_classes: usize,
    conf_thresh: f32,
) -> Vec<Detection> {
    match layout {
        TensorLayout::AnchorFree => anchor_free::decode(output, num_classes, conf_thresh),
        TensorLayout::AnchorBased => anchor_based::decode(output, num_classes, conf_thresh),
    }
}
