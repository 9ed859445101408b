//! Service Layer Error Types
//!
//! Errors returned by `NoteStore` operations. Every variant is a recoverable
//! business-rule violation: the store is left exactly as it was before the
//! failing call.

use crate::config::ConfigError;
use crate::models::{NoteId, ValidationError};
use thiserror::Error;

/// Note store operation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NoteStoreError {
    /// Note not found by ID
    #[error("Note not found: {id}")]
    NoteNotFound { id: NoteId },

    /// The draft failed validation
    #[error("Note validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    /// The store was built with unusable configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

impl NoteStoreError {
    /// Create a note not found error
    pub fn note_not_found(id: NoteId) -> Self {
        Self::NoteNotFound { id }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NoteNotFound { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationFailed(_))
    }
}
