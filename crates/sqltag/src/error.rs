//! Error types for sqltag

use thiserror::Error;

/// Result type alias for sqltag operations
pub type SqlResult<T> = Result<T, SqlError>;

/// Errors raised while building or executing a statement
#[derive(Debug, Error)]
pub enum SqlError {
    /// A template hole has no value (or a value has no hole)
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// API contract violation, e.g. appending something that is not a statement
    #[error("Misuse: {0}")]
    Misuse(String),

    /// Malformed runtime template string
    #[error("Template error: {0}")]
    Template(String),

    /// Query execution error
    #[cfg(feature = "postgres")]
    #[error("Query error: {0}")]
    Query(#[from] tokio_postgres::Error),

    /// Row not found
    #[cfg(feature = "postgres")]
    #[error("Not found: {0}")]
    NotFound(String),
}

impl SqlError {
    /// Create an invalid value error
    pub fn invalid_value(message: impl Into<String>) -> Self {
        Self::InvalidValue(message.into())
    }

    /// Create a misuse error
    pub fn misuse(message: impl Into<String>) -> Self {
        Self::Misuse(message.into())
    }

    /// Create a template error
    pub fn template(message: impl Into<String>) -> Self {
        Self::Template(message.into())
    }

    /// Check if this is an invalid value error
    pub fn is_invalid_value(&self) -> bool {
        matches!(self, Self::InvalidValue(_))
    }

    /// Check if this is a misuse error
    pub fn is_misuse(&self) -> bool {
        matches!(self, Self::Misuse(_))
    }

    /// Check if this is a not found error
    #[cfg(feature = "postgres")]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
