//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// A device descriptor could not be turned into a pixel buffer
    #[error("failed to open device '{name}': {source}")]
    DeviceOpen {
        name: String,
        #[source]
        source: rasterfb_core::Error,
    },

    /// Value comparison failed
    #[error(
        "value comparison failed at index {index}: expected {expected}, got {actual}, delta {delta}"
    )]
    ValueMismatch {
        index: usize,
        expected: f64,
        actual: f64,
        delta: f64,
    },

    /// Color comparison failed
    #[error("color comparison failed at index {index}: expected {expected:?}, got {actual:?}")]
    ColorMismatch {
        index: usize,
        expected: [u16; 4],
        actual: [u16; 4],
    },

    /// Byte comparison failed
    #[error("byte comparison failed at index {index}: first difference at offset {offset}")]
    BytesMismatch { index: usize, offset: usize },
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
