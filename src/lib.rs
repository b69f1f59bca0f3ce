//! DetParse decodes raw object-detector output tensors into filtered,
//! pixel-space bounding boxes.
//!
//! The crate implements the classic post-inference pipeline: interpret a
//! flat float buffer under an anchor-free or anchor-based record layout,
//! gate candidates by confidence, remove near-duplicates with greedy IoU
//! non-maximum suppression, and map the survivors into integer pixel
//! coordinates clipped to the network input bounds. Structured tracing is
//! available via the optional `tracing` feature.

mod candidate;
mod decode;
mod parser;
mod pixel;
mod tensor;
pub(crate) mod trace;
pub mod util;

pub use candidate::nms::{iou, suppress};
pub use candidate::Detection;
pub use decode::{decode_tensor, TensorLayout};
pub use parser::{
    parse_detections, ParseConfig, DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_IOU_THRESHOLD,
    DEFAULT_NUM_CLASSES,
};
pub use pixel::{map_to_pixels, PixelDetection};
pub use tensor::{NetworkDims, TensorView};
pub use util::{DetParseError, DetParseResult};
