//! The one-call decode → suppress → map pipeline.

use crate::candidate::nms::suppress;
use crate::decode::{decode_tensor, TensorLayout};
use crate::pixel::{map_to_pixels, PixelDetection};
use crate::tensor::{NetworkDims, TensorView};
use crate::trace::{trace_event, trace_span};
use crate::util::{DetParseError, DetParseResult};

/// Default class count (COCO).
pub const DEFAULT_NUM_CLASSES: usize = 80;
/// Default IoU threshold for non-maximum suppression.
pub const DEFAULT_IOU_THRESHOLD: f32 = 0.45;
/// Default confidence threshold applied at decode time.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 0.25;

/// Pipeline configuration.
///
/// There is intentionally no `Default` impl: the tensor layout must be
/// named by the caller. The remaining fields start at the documented
/// defaults and can be overridden with struct-update syntax:
///
/// ```
/// use detparse::{ParseConfig, TensorLayout};
///
/// let cfg = ParseConfig {
///     iou_threshold: 0.5,
///     ..ParseConfig::new(TensorLayout::AnchorFree)
/// };
/// assert_eq!(cfg.num_classes, 80);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ParseConfig {
    /// Record layout of the output tensor.
    pub layout: TensorLayout,
    /// Number of classes per record.
    pub num_classes: usize,
    /// Confidence gate applied while decoding. The host ABI this models
    /// carries a per-class threshold table of which only the first entry
    /// is ever read; a single global value captures that behavior.
    pub confidence_threshold: f32,
    /// IoU above which a lower-confidence overlapping box is suppressed.
    pub iou_threshold: f32,
}

impl ParseConfig {
    /// Creates a configuration for the given layout with default
    /// thresholds and class count.
    pub fn new(layout: TensorLayout) -> Self {
        Self {
            layout,
            num_classes: DEFAULT_NUM_CLASSES,
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            iou_threshold: DEFAULT_IOU_THRESHOLD,
        }
    }
}

/// Runs the full pipeline on the first output layer and appends the
/// surviving detections to `out`.
///
/// Fails only when `layers` is empty, in which case `out` is left
/// untouched. An empty result with `Ok(())` is valid: no candidate
/// cleared the confidence threshold. The call reads the layer buffer
/// without mutating it and retains no reference to it, so concurrent
/// invocations on independent buffers need no synchronization.
pub fn parse_detections(
    layers: &[TensorView<'_>],
    network: NetworkDims,
    cfg: &ParseConfig,
    out: &mut Vec<PixelDetection>,
) -> DetParseResult<()> {
    let layer = layers.first().ok_or(DetParseError::NoOutputLayers)?;

    let _span = trace_span!("parse_detections", elements = layer.len()).entered();

    let candidates = decode_tensor(
        layer.as_slice(),
        cfg.layout,
        cfg.num_classes,
        cfg.confidence_threshold,
    );
    trace_event!("decoded_candidates", count = candidates.len());

    let kept = suppress(candidates, cfg.iou_threshold);
    trace_event!("kept_after_nms", count = kept.len());

    out.reserve(kept.len());
    for det in &kept {
        out.push(map_to_pixels(det, network));
    }

    Ok(())
}
