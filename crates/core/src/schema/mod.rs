//! Schema module - backend-agnostic descriptor of the asset catalogue.
//!
//! The descriptor lists tables, columns, keys, defaults, indexes, checks and
//! foreign-key edges. Storage crates translate it into their own DDL.

mod backend;
mod metadata;
mod tables;
mod types;

pub use backend::SchemaBackend;
pub use metadata::{generate_asset_db_metadata, MetaData};
pub use tables::{
    ASSET_DB_TABLE_NAMES, ASSET_ROUTER, EQUITIES, FUTURES_CONTRACTS, FUTURES_EXCHANGES,
    FUTURES_ROOT_SYMBOLS, VERSION_INFO,
};
pub use types::{CheckConstraint, Column, ColumnType, ForeignKey, TableSchema};
