use std::fmt;
use std::sync::Arc;

use log::debug;
use serde::{Serialize, Serializer};

use super::backend::SchemaBackend;
use super::tables::ALL_TABLES;
use super::types::TableSchema;
use crate::errors::{Error, Result};

/// The assembled asset catalogue schema.
///
/// Holds the six table definitions and, optionally, the backend they were
/// registered against. Two descriptors are equal when their tables are; the
/// binding never takes part in comparisons or serialization.
#[derive(Clone)]
pub struct MetaData {
    tables: Vec<&'static TableSchema>,
    bind: Option<Arc<dyn SchemaBackend>>,
}

/// Builds the asset db schema.
///
/// With `bind = None` this is a pure value and safe to call from any thread.
/// With a backend, every table is registered with it but nothing is created;
/// call [`MetaData::create_all`] to run the DDL.
pub fn generate_asset_db_metadata(bind: Option<Arc<dyn SchemaBackend>>) -> MetaData {
    let tables: Vec<&'static TableSchema> = ALL_TABLES.to_vec();

    if let Some(backend) = &bind {
        for table in &tables {
            debug!("Registering table {} with {} backend", table.name, backend.dialect());
            backend.register_table(table);
        }
    }

    MetaData { tables, bind }
}

impl MetaData {
    pub fn tables(&self) -> &[&'static TableSchema] {
        &self.tables
    }

    pub fn table(&self, name: &str) -> Option<&'static TableSchema> {
        self.tables.iter().copied().find(|t| t.name == name)
    }

    pub fn table_names(&self) -> Vec<&'static str> {
        self.tables.iter().map(|t| t.name).collect()
    }

    pub fn bind(&self) -> Option<&Arc<dyn SchemaBackend>> {
        self.bind.as_ref()
    }

    pub fn is_bound(&self) -> bool {
        self.bind.is_some()
    }

    /// Creates every table on the bound backend.
    pub fn create_all(&self) -> Result<()> {
        let backend = self.bind.as_ref().ok_or(Error::Unbound)?;
        backend.create_all(&self.tables)
    }

    /// Drops every table on the bound backend.
    pub fn drop_all(&self) -> Result<()> {
        let backend = self.bind.as_ref().ok_or(Error::Unbound)?;
        backend.drop_all(&self.tables)
    }

    /// Tables of this schema that are absent from `existing`.
    pub fn missing_tables<S: AsRef<str>>(&self, existing: &[S]) -> Vec<&'static str> {
        self.tables
            .iter()
            .map(|t| t.name)
            .filter(|name| !existing.iter().any(|e| e.as_ref() == *name))
            .collect()
    }

    /// Names in `existing` that this schema does not define.
    pub fn unexpected_tables<S: AsRef<str>>(&self, existing: &[S]) -> Vec<String> {
        existing
            .iter()
            .map(|e| e.as_ref())
            .filter(|name| self.table(name).is_none())
            .map(str::to_string)
            .collect()
    }
}

impl PartialEq for MetaData {
    fn eq(&self, other: &Self) -> bool {
        self.tables == other.tables
    }
}

impl Eq for MetaData {}

impl fmt::Debug for MetaData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetaData")
            .field("tables", &self.table_names())
            .field("bind", &self.bind.as_ref().map(|b| b.dialect()))
            .finish()
    }
}

impl Serialize for MetaData {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.tables.serialize(serializer)
    }
}
