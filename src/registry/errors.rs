//! # Registry Errors
//!
//! Error types for the book registry.

use thiserror::Error;

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Book registry errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A required field was missing or empty
    #[error("{0}")]
    Validation(String),

    /// No record holds the requested id
    #[error("Book not found")]
    NotFound,

    /// The registry could not be accessed (e.g. poisoned lock)
    #[error("Internal registry error: {0}")]
    Internal(String),
}

impl RegistryError {
    /// Validation error for an incomplete create payload
    pub fn missing_fields() -> Self {
        Self::Validation("Title and author are required".to_string())
    }

    pub(crate) fn poisoned() -> Self {
        Self::Internal("Lock poisoned".to_string())
    }
}
