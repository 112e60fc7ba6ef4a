//! Custom error types for Tandem
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. The summary engine itself degrades
//! gracefully on malformed individual records; errors here are raised at the
//! boundary (input parsing, configuration, methodology validation) before the
//! engine runs.

use thiserror::Error;

/// The main error type for Tandem operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models and customizations
    #[error("Validation error: {0}")]
    Validation(String),

    /// Unrecognized methodology name
    #[error("Unknown methodology: {name}")]
    UnknownMethodology { name: String },

    /// Unrecognized period type
    #[error("Unknown period type: {name}")]
    UnknownPeriodType { name: String },

    /// Snapshot input errors (missing or unreadable snapshot file)
    #[error("Snapshot error: {0}")]
    Snapshot(String),
}

impl BudgetError {
    /// Create an unknown-methodology error
    pub fn unknown_methodology(name: impl Into<String>) -> Self {
        Self::UnknownMethodology { name: name.into() }
    }

    /// Create an unknown-period-type error
    pub fn unknown_period_type(name: impl Into<String>) -> Self {
        Self::UnknownPeriodType { name: name.into() }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Tandem operations
pub type BudgetResult<T> = Result<T, BudgetError>;
