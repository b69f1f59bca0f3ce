//! Borrowed views over host-owned inference output.
//!
//! The inference host owns the raw output buffers; the pipeline only ever
//! reads them through [`TensorView`] and retains no reference after a call
//! returns.

/// Read-only view of one flat float output layer.
///
/// Wraps the host's buffer pointer and element count as a slice. Only the
/// first layer of a multi-layer output list is consulted by the pipeline.
#[derive(Clone, Copy, Debug)]
pub struct TensorView<'a> {
    buffer: &'a [f32],
}

impl<'a> TensorView<'a> {
    /// Creates a view over a flat float buffer.
    pub fn from_slice(buffer: &'a [f32]) -> Self {
        Self { buffer }
    }

    /// Returns the underlying buffer.
    pub fn as_slice(&self) -> &'a [f32] {
        self.buffer
    }

    /// Number of float elements in the layer.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether the layer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

/// Network input dimensions in pixels.
///
/// Used only by the coordinate mapper to scale and clip normalized boxes.
/// Both dimensions are expected to be positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NetworkDims {
    /// Network input width in pixels.
    pub width: u32,
    /// Network input height in pixels.
    pub height: u32,
}

impl NetworkDims {
    /// Creates network dimensions from width and height.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}
