//! Error types for struct generation.

use thiserror::Error;

/// Error type for struct generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Shape validation error.
    #[error("shape error: {0}")]
    Shape(#[from] cstructgen_shape::ShapeError),

    /// IO error writing the generated header.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
