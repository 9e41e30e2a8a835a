//! Core error types for the asset catalogue.
//!
//! This module defines database-agnostic error types. Storage-specific errors
//! (from Diesel, SQLite, etc.) are converted to these types by the storage layer.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the asset catalogue.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    /// The on-disk catalogue was written under a different schema revision.
    #[error("Asset db version mismatch: catalogue is at version {found}, expected version {expected}")]
    SchemaVersionMismatch { expected: i32, found: i32 },

    /// The catalogue is on the expected version but lacks some of its tables.
    #[error("Asset db is missing tables: {}", .0.join(", "))]
    MissingTables(Vec<String>),

    /// An operation needing a storage backend was called on an unbound schema.
    #[error("Schema metadata is not bound to a storage backend")]
    Unbound,

    #[error("Asset operation failed: {0}")]
    Asset(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// True when this error reports a stale catalogue that needs migration.
    pub fn is_version_mismatch(&self) -> bool {
        matches!(self, Error::SchemaVersionMismatch { .. })
    }
}

/// Database-agnostic error type for storage operations.
///
/// Constraint violations are kept apart so callers can tell which declared
/// invariant the storage rejected.
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    #[error("Database query failed: {0}")]
    QueryFailed(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    /// Duplicate `sid`, `exchange`, `root_symbol` or futures `symbol`.
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// Reference to a missing `root_symbol` or `exchange`.
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// A mandatory date column was omitted.
    #[error("Not null constraint violation: {0}")]
    NotNullViolation(String),

    /// A table check constraint failed, e.g. a second `version_info` row.
    #[error("Check constraint violation: {0}")]
    CheckViolation(String),

    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Validation errors for caller-supplied rows.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse date: {0}")]
    DateParse(#[from] ChronoParseError),
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Unexpected(err.to_string())
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_mismatch_message() {
        let err = Error::SchemaVersionMismatch {
            expected: 3,
            found: 0,
        };
        assert!(err.is_version_mismatch());
        assert_eq!(
            err.to_string(),
            "Asset db version mismatch: catalogue is at version 0, expected version 3"
        );
    }

    #[test]
    fn test_database_error_is_not_version_mismatch() {
        let err: Error = DatabaseError::CheckViolation("id <= 1".to_string()).into();
        assert!(!err.is_version_mismatch());
        assert!(matches!(
            err,
            Error::Database(DatabaseError::CheckViolation(_))
        ));
    }

    #[test]
    fn test_missing_tables_message_lists_tables() {
        let err = Error::MissingTables(vec!["asset_router".to_string(), "equities".to_string()]);
        assert!(!err.is_version_mismatch());
        assert_eq!(err.to_string(), "Asset db is missing tables: asset_router, equities");
    }
}
