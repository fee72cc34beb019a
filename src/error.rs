//! Custom error types for FinanceMaster
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. The store itself never returns these for
//! ordinary mutations; they surface from configuration, storage, export and
//! the command-line layer.

use thiserror::Error;

use crate::models::EntityId;

/// The main error type for FinanceMaster operations
#[derive(Error, Debug)]
pub enum FinanceError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors raised by input forms
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// An id prefix matched more than one entity
    #[error("{entity_type} id '{identifier}' is ambiguous")]
    Ambiguous {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// The store was used before it was provided or after it was disposed
    #[error("finance store accessed outside of an initialized context")]
    MissingContext,
}

impl FinanceError {
    /// No entity of kind `I` matched `identifier`
    pub fn not_found<I: EntityId>(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: I::ENTITY,
            identifier: identifier.into(),
        }
    }

    /// Several entities of kind `I` matched `identifier`
    pub fn ambiguous<I: EntityId>(identifier: impl Into<String>) -> Self {
        Self::Ambiguous {
            entity_type: I::ENTITY,
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for FinanceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinanceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for FinanceMaster operations
pub type FinanceResult<T> = Result<T, FinanceError>;
