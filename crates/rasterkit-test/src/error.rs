//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while preparing regression test inputs
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to build a synthetic test image
    #[error("failed to build test image '{name}': {source}")]
    ImageBuild {
        name: &'static str,
        #[source]
        source: rasterkit_core::Error,
    },

    /// Invalid generator parameters
    #[error("invalid test image parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
