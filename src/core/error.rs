//! Error types for kernel configuration and checked kernel evaluation
//!
//! The scalar kernels never fail; numerical domain violations surface as
//! `NaN`/`Inf` in their results. These errors belong to the boundary layers:
//! checked pairwise wrappers, configuration files and the CLI.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KernelError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Unknown kernel family: {0}")]
    UnknownFamily(String),

    #[error("Unknown precision: {0}")]
    UnknownPrecision(String),

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Coordinate index {index} out of range for dimension {dim}")]
    IndexOutOfRange { index: usize, dim: usize },

    #[error("Varifold kernel requires non-zero vectors")]
    ZeroNorm,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

pub type Result<T> = std::result::Result<T, KernelError>;
