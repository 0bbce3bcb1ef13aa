//! Cross-cutting error types for Paddy.
//!
//! Knowledge sources report failures through [`CoreError`]. Crate-specific
//! errors (`ConditionError`, `EngineError`, `ConfigError`) live in their
//! respective crates and wrap this one where needed.

use thiserror::Error;

/// Errors that can be raised by any Paddy crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (ranges, uniqueness, format).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for backend failures (I/O, storage drivers).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    /// Shorthand for a [`CoreError::NotFound`].
    pub fn not_found(entity_type: &str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }
}
