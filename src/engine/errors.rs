//! Error types for the sorting core
//!
//! This module defines [`EngineError`], the single error type shared by the
//! dataset manager, the step engine and the playback controller.
//!
//! None of these errors are fatal. A step either completes its one primitive
//! operation or is never attempted, so callers can report the error and carry on.

use thiserror::Error;

/// Errors returned by dataset, engine and playback operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Requested dataset size cannot be used (zero elements)
    #[error("Invalid dataset size: {requested} (must be at least 1)")]
    InvalidSize { requested: usize },

    /// Configured value range is empty
    #[error("Invalid value range: {min}..={max}")]
    InvalidRange { min: i32, max: i32 },

    /// Operation is not allowed in the current state
    #[error("Invalid operation: {message}")]
    InvalidOperation { message: String },
}

impl EngineError {
    pub(crate) fn invalid_operation(message: impl Into<String>) -> Self {
        EngineError::InvalidOperation {
            message: message.into(),
        }
    }
}
