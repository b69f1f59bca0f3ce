//! Mapping surviving candidates into clipped pixel coordinates.

use crate::candidate::Detection;
use crate::tensor::NetworkDims;
use crate::util::math::clip;

/// Detection mapped into integer pixel space.
///
/// Invariants, guaranteed by construction for positive network
/// dimensions: `left <= width_limit - 1`, `top <= height_limit - 1`,
/// `left + width <= width_limit`, `top + height <= height_limit`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelDetection {
    /// Index into the host's class name table.
    pub class_id: usize,
    /// Confidence carried over from the suppressed candidate list.
    pub confidence: f32,
    /// Left edge in pixels.
    pub left: u32,
    /// Top edge in pixels.
    pub top: u32,
    /// Box width in pixels.
    pub width: u32,
    /// Box height in pixels.
    pub height: u32,
}

/// Converts a normalized corner-form detection into clipped pixel space.
///
/// The width/height upper bounds are computed from the already-clipped
/// and truncated `left`/`top`, so a box can never extend past the network
/// input bounds. Rounding policy is truncation toward zero, applied
/// uniformly to all four fields.
pub fn map_to_pixels(det: &Detection, network: NetworkDims) -> PixelDetection {
    let net_w = network.width as f32;
    let net_h = network.height as f32;

    let left = clip(det.bbox[0] * net_w, 0.0, net_w - 1.0) as u32;
    let top = clip(det.bbox[1] * net_h, 0.0, net_h - 1.0) as u32;
    let width = clip((det.bbox[2] - det.bbox[0]) * net_w, 0.0, net_w - left as f32) as u32;
    let height = clip((det.bbox[3] - det.bbox[1]) * net_h, 0.0, net_h - top as f32) as u32;

    PixelDetection {
        class_id: det.class_id,
        confidence: det.confidence,
        left,
        top,
        width,
        height,
    }
}
