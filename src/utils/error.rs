//! Error Handling
//!
//! Unified error types for the application.
//! Uses thiserror for ergonomic error definitions.
//!
//! Only transport failures and empty-artifact failures are meant to reach
//! the user; everything behind the embedded-context boundary fails soft
//! and never becomes a `StudioError`.

use thiserror::Error;

use maquette_core::error::CoreError;
use maquette_llm::GenError;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum StudioError {
    /// Remote generation errors (auto-converted from GenError)
    #[error("Generation error: {0}")]
    Generation(#[from] GenError),

    /// The pipeline completed but produced nothing usable
    #[error("No usable artifact produced: {0}")]
    EmptyArtifact(String),

    /// Core errors (auto-converted from CoreError)
    #[error(transparent)]
    Core(#[from] CoreError),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for application errors
pub type StudioResult<T> = Result<T, StudioError>;

impl StudioError {
    /// Create an empty-artifact error
    pub fn empty_artifact(msg: impl Into<String>) -> Self {
        Self::EmptyArtifact(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
