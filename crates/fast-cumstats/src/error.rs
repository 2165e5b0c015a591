//! Error types for fast-cumstats.
//!
//! This module defines the error types returned by the cumulative statistics
//! functions when an input cannot be processed.

use thiserror::Error;

/// The main error type for fast-cumstats operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input data series is empty.
    ///
    /// Returned by the statistics that seed their running value from the
    /// first element (cumulative minimum, maximum and the batch pass).
    #[error("empty input: no data provided")]
    EmptyInput,

    /// The caller-provided output buffer is too small.
    ///
    /// Returned by the `_into` variants when `output` cannot hold one value
    /// per input element (or five per element for the batch pass).
    #[error("buffer too small for {operation}: required {required} elements, got {actual}")]
    BufferTooSmall {
        /// The number of output slots required.
        required: usize,
        /// The number of output slots provided.
        actual: usize,
        /// Name of the operation that rejected the buffer.
        operation: &'static str,
    },

    /// Failed to convert a numeric value to the target type.
    ///
    /// This error occurs when the running element count used by the
    /// cumulative mean cannot be represented in the series element type.
    #[error("numeric conversion failed: {context}")]
    NumericConversion {
        /// Description of the conversion that failed.
        context: &'static str,
    },
}

/// Convenience type alias for Results using the fast-cumstats Error type.
pub type Result<T> = std::result::Result<T, Error>;
