//! SQLite binding for the schema descriptor.

use std::sync::{Arc, RwLock};

use diesel::connection::SimpleConnection;
use diesel::sql_types::Text;
use diesel::{QueryableByName, RunQueryDsl};
use log::{debug, info};

use crate::db::{get_connection, DbPool};
use crate::ddl;
use crate::errors::StorageError;
use assetdb_core::errors::{Error, Result};
use assetdb_core::schema::{SchemaBackend, TableSchema};

#[derive(QueryableByName)]
struct TableName {
    #[diesel(sql_type = Text)]
    name: String,
}

/// A [`SchemaBackend`] over a pooled SQLite database.
///
/// Keeps its own registry of table definitions. Registration is purely
/// in-memory; DDL only runs from [`SchemaBackend::create_all`] and
/// [`SchemaBackend::drop_all`].
pub struct SqliteBackend {
    pool: Arc<DbPool>,
    registry: RwLock<Vec<&'static TableSchema>>,
}

impl SqliteBackend {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self {
            pool,
            registry: RwLock::new(Vec::new()),
        }
    }

    pub fn pool(&self) -> &Arc<DbPool> {
        &self.pool
    }

    fn execute_script(&self, statements: Vec<String>) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        conn.immediate_transaction::<_, StorageError, _>(|c| {
            for statement in &statements {
                debug!("Executing DDL: {}", statement);
                c.batch_execute(statement)?;
            }
            Ok(())
        })
        .map_err(Error::from)
    }
}

impl SchemaBackend for SqliteBackend {
    fn dialect(&self) -> &'static str {
        "sqlite"
    }

    fn register_table(&self, table: &'static TableSchema) {
        let mut registry = self
            .registry
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if !registry.iter().any(|t| t.name == table.name) {
            registry.push(table);
        }
    }

    fn registered_tables(&self) -> Vec<&'static TableSchema> {
        self.registry
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn create_all(&self, tables: &[&'static TableSchema]) -> Result<()> {
        info!("Creating {} catalogue tables", tables.len());
        self.execute_script(ddl::create_all_sql(tables))
    }

    fn drop_all(&self, tables: &[&'static TableSchema]) -> Result<()> {
        info!("Dropping {} catalogue tables", tables.len());
        let statements = tables
            .iter()
            .rev()
            .map(|t| ddl::drop_table_sql(t))
            .collect();
        self.execute_script(statements)
    }

    fn reflect_table_names(&self) -> Result<Vec<String>> {
        let mut conn = get_connection(&self.pool)?;
        let rows: Vec<TableName> = diesel::sql_query(
            "SELECT name FROM sqlite_master \
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%' \
             ORDER BY name",
        )
        .load(&mut conn)
        .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(|r| r.name).collect())
    }
}
