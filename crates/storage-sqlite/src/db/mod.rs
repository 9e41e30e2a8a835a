//! Connection management for catalogue files.

use log::{debug, info};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use diesel::connection::{Connection, SimpleConnection};
use diesel::r2d2::{self, ConnectionManager, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;

use crate::errors::{IntoCore, StorageError};
use assetdb_core::errors::{DatabaseError, Result};

pub mod write_actor;
pub use write_actor::{spawn_writer, WriteHandle};

pub type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Environment variable overriding the catalogue location.
pub const DB_URL_ENV: &str = "ASSET_DB_URL";

/// File name used inside a data directory when no override is set.
pub const DB_FILE_NAME: &str = "assets.db";

const POOL_MAX_SIZE: u32 = 8;
const POOL_CONNECTION_TIMEOUT: Duration = Duration::from_secs(30);

// Applied to every pooled connection. Foreign keys are off by default in SQLite.
const CONNECTION_PRAGMAS: &str = "
    PRAGMA foreign_keys = ON;
    PRAGMA busy_timeout = 30000;
    PRAGMA synchronous = NORMAL;
";

/// Prepares a catalogue file: creates its directory and switches it to WAL.
///
/// Returns the path that was initialised.
pub fn init(db_path: &str) -> Result<String> {
    if let Some(db_dir) = Path::new(db_path).parent() {
        if !db_dir.as_os_str().is_empty() && !db_dir.exists() {
            fs::create_dir_all(db_dir)?;
        }
    }

    let mut conn = SqliteConnection::establish(db_path)
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;
    conn.batch_execute("PRAGMA journal_mode = WAL;")
        .into_core()?;

    debug!("Initialised catalogue file {}", db_path);
    Ok(db_path.to_string())
}

pub fn create_pool(db_path: &str) -> Result<Arc<DbPool>> {
    let manager = ConnectionManager::<SqliteConnection>::new(db_path);
    let pool = r2d2::Pool::builder()
        .max_size(POOL_MAX_SIZE)
        .min_idle(Some(1)) // Keep at least one connection ready
        .connection_timeout(POOL_CONNECTION_TIMEOUT)
        .connection_customizer(Box::new(ConnectionCustomizer))
        .build(manager)
        .map_err(|e| DatabaseError::PoolCreationFailed(e.to_string()))?;
    info!("Opened connection pool for {}", db_path);
    Ok(Arc::new(pool))
}

/// Resolves the catalogue path, honouring [`DB_URL_ENV`] when set.
pub fn get_db_path(data_dir: &str) -> String {
    std::env::var(DB_URL_ENV).unwrap_or_else(|_| {
        Path::new(data_dir)
            .join(DB_FILE_NAME)
            .to_string_lossy()
            .into_owned()
    })
}

/// Gets a connection from the pool
pub fn get_connection(pool: &Pool<ConnectionManager<SqliteConnection>>) -> Result<DbConnection> {
    pool.get().map_err(|e| StorageError::from(e).into())
}

#[derive(Debug)]
struct ConnectionCustomizer;

impl r2d2::CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionCustomizer {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> std::result::Result<(), r2d2::Error> {
        conn.batch_execute(CONNECTION_PRAGMAS)
            .map_err(r2d2::Error::QueryError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::sql_types::BigInt;
    use diesel::{QueryableByName, RunQueryDsl};
    use tempfile::tempdir;

    #[derive(QueryableByName)]
    struct PragmaValue {
        #[diesel(sql_type = BigInt)]
        foreign_keys: i64,
    }

    #[test]
    fn test_init_creates_parent_directory() {
        let temp_dir = tempdir().unwrap();
        let db_path = temp_dir.path().join("nested").join("assets.db");
        let db_path_str = db_path.to_string_lossy().to_string();

        let initialised = init(&db_path_str).unwrap();
        assert_eq!(initialised, db_path_str);
        assert!(db_path.exists());
    }

    #[test]
    fn test_pooled_connections_enforce_foreign_keys() {
        let temp_dir = tempdir().unwrap();
        let db_path = temp_dir.path().join("assets.db");
        let pool = create_pool(&db_path.to_string_lossy()).unwrap();
        let mut conn = get_connection(&pool).unwrap();

        let value: PragmaValue = diesel::sql_query("PRAGMA foreign_keys")
            .get_result(&mut conn)
            .unwrap();
        assert_eq!(value.foreign_keys, 1);
    }

    #[test]
    fn test_db_path_defaults_to_data_dir() {
        if std::env::var(DB_URL_ENV).is_ok() {
            return;
        }
        let path = get_db_path("/tmp/catalogue");
        assert_eq!(path, "/tmp/catalogue/assets.db");
    }
}
