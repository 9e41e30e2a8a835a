//! SQLite storage implementation for the asset catalogue.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the backend binding and repository traits defined in `assetdb-core`
//! and contains:
//! - Database connection pooling and the single writer actor
//! - DDL rendering of the core table descriptors
//! - Catalogue bootstrap and the version check on open
//! - Repository implementations for the asset tables and the version marker
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place where Diesel dependencies exist. `core` is
//! database-agnostic and works with traits.
//!
//! ```text
//!      core (descriptor, models, traits)
//!                  │
//!                  ▼
//!       storage-sqlite (this crate)
//!                  │
//!                  ▼
//!              SQLite DB
//! ```

pub mod backend;
pub mod catalogue;
pub mod db;
pub mod ddl;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod assets;
pub mod version;

#[cfg(test)]
mod test_utils;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

pub use backend::SqliteBackend;
pub use catalogue::{create_catalogue, open_catalogue, Catalogue};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from assetdb-core for convenience
pub use assetdb_core::errors::{DatabaseError, Error, Result};
