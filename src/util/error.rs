//! Error types for detparse.

use thiserror::Error;

/// Result alias for detparse operations.
pub type DetParseResult<T> = std::result::Result<T, DetParseError>;

/// Errors that can occur when parsing detector output.
///
/// The pipeline deliberately trusts its numeric inputs (buffer contents,
/// thresholds); the only checked precondition is the presence of at least
/// one output layer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DetParseError {
    /// The host supplied an empty output-layer list.
    #[error("no output layers provided")]
    NoOutputLayers,
}
