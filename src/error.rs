//! Custom error types for the expense ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Bad user-supplied expense or budget value
    #[error("Validation error: {0}")]
    Validation(String),

    /// Corrupt row or sidecar encountered while loading persisted data
    #[error("Parse error at line {line}: {message}")]
    Parse { line: u64, message: String },

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Budget query made before any budget was configured
    #[error("No budget set. Please set a budget first.")]
    BudgetNotSet,

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl LedgerError {
    /// Create a parse error for the given 1-based file line
    pub fn parse_at(line: u64, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Check if this is an I/O error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line());
        match (err.kind(), line) {
            (csv::ErrorKind::Io(_), _) => Self::Io(err.to_string()),
            (_, Some(line)) => Self::parse_at(line, err.to_string()),
            (_, None) => Self::parse_at(0, err.to_string()),
        }
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
