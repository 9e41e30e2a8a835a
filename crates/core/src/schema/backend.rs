use super::types::TableSchema;
use crate::errors::Result;

/// A storage backend a [`MetaData`](super::MetaData) can be bound to.
///
/// Registration only records a table in the backend's own registry. DDL runs
/// when `create_all` is called explicitly, never as a side effect of binding.
pub trait SchemaBackend: Send + Sync {
    /// Short backend name, e.g. `"sqlite"`.
    fn dialect(&self) -> &'static str;

    /// Records a table definition in the backend's metadata registry.
    fn register_table(&self, table: &'static TableSchema);

    /// Tables registered so far, in registration order.
    fn registered_tables(&self) -> Vec<&'static TableSchema>;

    /// Creates the given tables (and their indexes) if they do not exist.
    fn create_all(&self, tables: &[&'static TableSchema]) -> Result<()>;

    /// Drops the given tables, referencing tables first.
    fn drop_all(&self, tables: &[&'static TableSchema]) -> Result<()>;

    /// Names of the tables that currently exist in the live store.
    fn reflect_table_names(&self) -> Result<Vec<String>>;
}
