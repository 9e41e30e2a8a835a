//! Storage-specific error types for SQLite operations.
//!
//! This module wraps Diesel and r2d2 errors and converts them to the
//! database-agnostic error types defined in `assetdb_core`. Constraint
//! violations keep their kind so callers can tell which invariant failed.

use assetdb_core::errors::{DatabaseError, Error};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

/// Storage-specific errors that wrap Diesel and r2d2 types.
///
/// These errors are internal to the storage layer and are converted to
/// `assetdb_core::Error` before being returned to callers.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection failed: {0}")]
    ConnectionFailed(#[from] diesel::ConnectionError),

    #[error("Connection pool error: {0}")]
    PoolError(#[from] r2d2::Error),

    #[error("Query execution failed: {0}")]
    QueryFailed(#[from] DieselError),

    #[error("Writer unavailable: {0}")]
    WriterUnavailable(String),

    /// A core error raised inside a write job; handed back unchanged.
    #[error("{0}")]
    Core(Error),
}

/// Convert core Error to StorageError (for write_actor transaction wrapper)
impl From<Error> for StorageError {
    fn from(err: Error) -> Self {
        StorageError::Core(err)
    }
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::ConnectionFailed(e) => {
                Error::Database(DatabaseError::ConnectionFailed(e.to_string()))
            }
            StorageError::PoolError(e) => {
                Error::Database(DatabaseError::PoolCreationFailed(e.to_string()))
            }
            StorageError::QueryFailed(DieselError::NotFound) => {
                Error::Database(DatabaseError::NotFound("Record not found".to_string()))
            }
            StorageError::QueryFailed(DieselError::DatabaseError(kind, info)) => {
                let message = info.message().to_string();
                Error::Database(match kind {
                    DatabaseErrorKind::UniqueViolation => DatabaseError::UniqueViolation(message),
                    DatabaseErrorKind::ForeignKeyViolation => {
                        DatabaseError::ForeignKeyViolation(message)
                    }
                    DatabaseErrorKind::NotNullViolation => DatabaseError::NotNullViolation(message),
                    DatabaseErrorKind::CheckViolation => DatabaseError::CheckViolation(message),
                    _ => classify_constraint_message(message),
                })
            }
            StorageError::QueryFailed(DieselError::RollbackTransaction) => Error::Database(
                DatabaseError::TransactionFailed("Transaction rolled back".to_string()),
            ),
            StorageError::QueryFailed(e) => {
                Error::Database(DatabaseError::QueryFailed(e.to_string()))
            }
            StorageError::WriterUnavailable(e) => Error::Database(DatabaseError::Internal(e)),
            StorageError::Core(e) => e,
        }
    }
}

/// Falls back to SQLite's message text when the driver reports an unknown kind.
///
/// SQLite phrases constraint failures as `<KIND> constraint failed: <detail>`.
fn classify_constraint_message(message: String) -> DatabaseError {
    if message.starts_with("UNIQUE constraint failed") {
        DatabaseError::UniqueViolation(message)
    } else if message.starts_with("FOREIGN KEY constraint failed") {
        DatabaseError::ForeignKeyViolation(message)
    } else if message.starts_with("NOT NULL constraint failed") {
        DatabaseError::NotNullViolation(message)
    } else if message.starts_with("CHECK constraint failed") {
        DatabaseError::CheckViolation(message)
    } else {
        DatabaseError::QueryFailed(message)
    }
}

/// Extension trait for easily converting Diesel Results to core Results.
pub trait IntoCore<T> {
    fn into_core(self) -> assetdb_core::Result<T>;
}

impl<T> IntoCore<T> for std::result::Result<T, DieselError> {
    fn into_core(self) -> assetdb_core::Result<T> {
        self.map_err(|e| StorageError::from(e).into())
    }
}

impl<T> IntoCore<T> for std::result::Result<T, r2d2::Error> {
    fn into_core(self) -> assetdb_core::Result<T> {
        self.map_err(|e| StorageError::from(e).into())
    }
}
