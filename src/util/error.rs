//! Error types for knnscan.

use thiserror::Error;

/// Result alias for knnscan operations.
pub type KnnScanResult<T> = std::result::Result<T, KnnScanError>;

/// Errors that can occur when configuring or running a scan.
///
/// Only the scan-driver surface reports errors; the collector and heap core
/// treat contract violations as caller bugs and assert them in debug builds
/// instead of returning them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KnnScanError {
    /// The vector dimensionality is zero.
    #[error("invalid dimension: {dim}")]
    InvalidDimension {
        /// Requested dimensionality.
        dim: usize,
    },
    /// The requested result count is zero.
    #[error("invalid k: {k}")]
    InvalidK {
        /// Requested result count.
        k: usize,
    },
    /// A vector's length does not match the configured dimension.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Configured dimensionality.
        expected: usize,
        /// Actual slice length.
        got: usize,
    },
    /// A packed vector buffer is not a whole number of vectors.
    #[error("buffer length {len} is not a multiple of dimension {dim}")]
    RaggedBuffer {
        /// Buffer length in floats.
        len: usize,
        /// Configured dimensionality.
        dim: usize,
    },
    /// A result buffer is shorter than the requested result count.
    #[error("result buffer too small: needed {needed}, got {got}")]
    BufferTooSmall {
        /// Required length.
        needed: usize,
        /// Actual length.
        got: usize,
    },
}
