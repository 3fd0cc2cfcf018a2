//! Error types for the beam solver

use thiserror::Error;

/// Main error type for beam analysis
#[derive(Error, Debug)]
pub enum BeamError {
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Invalid support: {0}")]
    InvalidSupport(String),

    #[error("Invalid load: {0}")]
    InvalidLoad(String),

    #[error("Beam is statically unstable: {0}")]
    StaticallyUnstable(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for beam operations
pub type BeamResult<T> = Result<T, BeamError>;
