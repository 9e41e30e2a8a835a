//! Asset DB Core - schema descriptor, domain entities and traits.
//!
//! This crate describes the asset catalogue: six tables plus a version
//! marker, the models stored in them and the repository contracts over them.
//! It is database-agnostic; the `storage-sqlite` crate implements the
//! backend binding and the repository traits.

pub mod assets;
pub mod catalogue;
pub mod constants;
pub mod errors;
pub mod schema;
pub mod utils;

// Re-export common types from the asset and schema modules
pub use assets::*;
pub use schema::{generate_asset_db_metadata, MetaData, SchemaBackend, ASSET_DB_TABLE_NAMES};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
