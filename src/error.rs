//! Error types for the image algebra operations.

use thiserror::Error;

use crate::image_arithmetic::Shape;

/// Reasons an operation refuses its input.
///
/// Every check happens before any output is allocated, so an `Err` never comes
/// with a partially computed buffer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Two buffers that must agree in rows, cols and channels do not.
    #[error("buffer shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: Shape, actual: Shape },

    /// The operation needs a different number of channels.
    #[error("invalid channel count: expected {expected}, got {actual}")]
    InvalidChannelCount { expected: &'static str, actual: usize },

    /// Channel index outside blue/green/red.
    #[error("invalid channel index {0}: must be 0 (blue), 1 (green) or 2 (red)")]
    InvalidChannelIndex(usize),

    /// Zero rows or zero cols.
    #[error("empty input buffer")]
    EmptyInput,

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// Sample vector does not hold `rows * cols * channels` values.
    #[error("sample buffer length mismatch: expected {expected}, got {actual}")]
    BufferLength { expected: usize, actual: usize },
}

/// Result type alias for image algebra operations.
pub type Result<T> = std::result::Result<T, Error>;
