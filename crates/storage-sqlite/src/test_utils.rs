//! Shared fixtures for storage tests.

use std::sync::Arc;

use assetdb_core::schema::generate_asset_db_metadata;
use tempfile::{tempdir, TempDir};

use crate::backend::SqliteBackend;
use crate::db::{create_pool, spawn_writer, DbPool, WriteHandle};

/// Creates a temp catalogue with every table but no version row.
/// Returns the pool, a writer and the temp dir (to keep it alive).
pub(crate) async fn create_test_catalogue_db() -> (Arc<DbPool>, WriteHandle, TempDir) {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let db_path = temp_dir.path().join("test.db");
    let pool = create_pool(&db_path.to_string_lossy()).expect("Failed to create pool");

    let backend = Arc::new(SqliteBackend::new(Arc::clone(&pool)));
    generate_asset_db_metadata(Some(backend))
        .create_all()
        .expect("Failed to create catalogue tables");

    let writer = spawn_writer((*pool).clone());
    (pool, writer, temp_dir)
}
