//! Bootstrapping and opening catalogue files.

use std::path::Path;
use std::sync::Arc;

use log::{debug, info, warn};

use assetdb_core::catalogue::{check_version_info, VersionInfoRepositoryTrait};
use assetdb_core::constants::ASSET_DB_VERSION;
use assetdb_core::errors::{DatabaseError, Error, Result};
use assetdb_core::schema::{generate_asset_db_metadata, MetaData, SchemaBackend, VERSION_INFO};

use crate::assets::AssetCatalogueRepository;
use crate::backend::SqliteBackend;
use crate::db::{self, get_connection, spawn_writer, DbPool, WriteHandle};
use crate::version::{read_version_on, VersionInfoRepository};

/// An open, version-checked catalogue.
pub struct Catalogue {
    pool: Arc<DbPool>,
    writer: WriteHandle,
    metadata: MetaData,
    version: i32,
    assets: Arc<AssetCatalogueRepository>,
    versions: Arc<VersionInfoRepository>,
}

impl Catalogue {
    fn assemble(pool: Arc<DbPool>, writer: WriteHandle, metadata: MetaData, version: i32) -> Self {
        let assets = Arc::new(AssetCatalogueRepository::new(
            Arc::clone(&pool),
            writer.clone(),
        ));
        let versions = Arc::new(VersionInfoRepository::new(Arc::clone(&pool), writer.clone()));
        Self {
            pool,
            writer,
            metadata,
            version,
            assets,
            versions,
        }
    }

    pub fn pool(&self) -> &Arc<DbPool> {
        &self.pool
    }

    pub fn writer(&self) -> &WriteHandle {
        &self.writer
    }

    /// Schema version the catalogue was opened at.
    pub fn version(&self) -> i32 {
        self.version
    }

    pub fn metadata(&self) -> &MetaData {
        &self.metadata
    }

    /// Reader and writer over the asset tables.
    pub fn assets(&self) -> Arc<AssetCatalogueRepository> {
        Arc::clone(&self.assets)
    }

    pub fn versions(&self) -> Arc<VersionInfoRepository> {
        Arc::clone(&self.versions)
    }
}

/// Creates every catalogue table in `db_path` and stamps it with
/// [`ASSET_DB_VERSION`].
///
/// A file that already carries a version row is rejected by the
/// `version_info` check constraint. Must be called within a Tokio runtime.
pub async fn create_catalogue(db_path: &str) -> Result<Catalogue> {
    let db_path = db::init(db_path)?;
    let pool = db::create_pool(&db_path)?;

    let backend = Arc::new(SqliteBackend::new(Arc::clone(&pool)));
    let metadata = generate_asset_db_metadata(Some(backend));
    metadata.create_all()?;

    let writer = spawn_writer((*pool).clone());
    let catalogue = Catalogue::assemble(pool, writer, metadata, ASSET_DB_VERSION);
    catalogue.versions.write_version(ASSET_DB_VERSION).await?;

    info!(
        "Created asset catalogue at {} (version {})",
        db_path, ASSET_DB_VERSION
    );
    Ok(catalogue)
}

/// Opens an existing catalogue, failing fast when its version differs from
/// `expected`.
///
/// A file without a `version_info` table, or with an empty one, is treated
/// as version 0. A path with no file behind it is reported as not found and
/// nothing is created there. Must be called within a Tokio runtime.
pub fn open_catalogue(db_path: &str, expected: i32) -> Result<Catalogue> {
    if !Path::new(db_path).is_file() {
        return Err(DatabaseError::NotFound(format!("No asset catalogue at {}", db_path)).into());
    }
    let pool = db::create_pool(db_path)?;

    let backend = Arc::new(SqliteBackend::new(Arc::clone(&pool)));
    let existing = backend.reflect_table_names()?;

    let found = if existing.iter().any(|name| name == VERSION_INFO.name) {
        let mut conn = get_connection(&pool)?;
        read_version_on(&mut conn)?
    } else {
        debug!("{} has no {} table", db_path, VERSION_INFO.name);
        None
    };
    check_version_info(found, expected)?;

    let metadata = generate_asset_db_metadata(Some(backend));
    let missing = metadata.missing_tables(&existing);
    if !missing.is_empty() {
        warn!("{} is missing tables: {}", db_path, missing.join(", "));
        return Err(Error::MissingTables(
            missing.into_iter().map(String::from).collect(),
        ));
    }

    let writer = spawn_writer((*pool).clone());
    info!("Opened asset catalogue at {} (version {})", db_path, expected);
    Ok(Catalogue::assemble(pool, writer, metadata, expected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assetdb_core::assets::{AssetCatalogueReaderTrait, AssetCatalogueWriterTrait, NewEquity};
    use diesel::RunQueryDsl;
    use tempfile::tempdir;

    fn path_in(dir: &tempfile::TempDir) -> String {
        dir.path().join("assets.db").to_string_lossy().into_owned()
    }

    #[tokio::test]
    async fn test_create_then_open() {
        let temp_dir = tempdir().unwrap();
        let db_path = path_in(&temp_dir);

        let created = create_catalogue(&db_path).await.unwrap();
        assert_eq!(created.version(), ASSET_DB_VERSION);
        assert_eq!(created.versions().read_version().unwrap(), Some(ASSET_DB_VERSION));
        created
            .assets()
            .write_equities(vec![NewEquity {
                sid: 1,
                symbol: Some("AAPL".to_string()),
                end_date: 10,
                first_traded: 0,
                ..Default::default()
            }])
            .await
            .unwrap();
        drop(created);

        let opened = open_catalogue(&db_path, ASSET_DB_VERSION).unwrap();
        assert_eq!(opened.version(), ASSET_DB_VERSION);
        assert!(opened.metadata().is_bound());
        assert_eq!(opened.assets().retrieve_equity(1).unwrap().sid, 1);
    }

    #[tokio::test]
    async fn test_open_with_other_expected_version_fails() {
        let temp_dir = tempdir().unwrap();
        let db_path = path_in(&temp_dir);
        drop(create_catalogue(&db_path).await.unwrap());

        match open_catalogue(&db_path, ASSET_DB_VERSION + 1) {
            Err(Error::SchemaVersionMismatch { expected, found }) => {
                assert_eq!(expected, ASSET_DB_VERSION + 1);
                assert_eq!(found, ASSET_DB_VERSION);
            }
            Err(other) => panic!("expected version mismatch, got {:?}", other),
            Ok(_) => panic!("expected version mismatch, got an open catalogue"),
        }
    }

    #[tokio::test]
    async fn test_open_empty_file_is_version_zero() {
        let temp_dir = tempdir().unwrap();
        let db_path = path_in(&temp_dir);
        std::fs::write(&db_path, b"").unwrap();

        match open_catalogue(&db_path, ASSET_DB_VERSION) {
            Err(Error::SchemaVersionMismatch { found, .. }) => assert_eq!(found, 0),
            Err(other) => panic!("expected version mismatch, got {:?}", other),
            Ok(_) => panic!("expected version mismatch, got an open catalogue"),
        }
    }

    #[tokio::test]
    async fn test_open_without_version_row_is_version_zero() {
        let temp_dir = tempdir().unwrap();
        let db_path = path_in(&temp_dir);
        let pool = db::create_pool(&db_path).unwrap();
        generate_asset_db_metadata(Some(Arc::new(SqliteBackend::new(pool))))
            .create_all()
            .unwrap();

        let err = open_catalogue(&db_path, ASSET_DB_VERSION).err().unwrap();
        assert!(matches!(err, Error::SchemaVersionMismatch { found: 0, .. }));
    }

    #[tokio::test]
    async fn test_open_reports_missing_tables() {
        let temp_dir = tempdir().unwrap();
        let db_path = path_in(&temp_dir);
        let created = create_catalogue(&db_path).await.unwrap();
        {
            let mut conn = get_connection(created.pool()).unwrap();
            diesel::sql_query("DROP TABLE asset_router")
                .execute(&mut conn)
                .unwrap();
        }
        drop(created);

        let err = open_catalogue(&db_path, ASSET_DB_VERSION).err().unwrap();
        match err {
            Error::MissingTables(tables) => assert_eq!(tables, vec!["asset_router".to_string()]),
            other => panic!("expected missing table error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_open_missing_path_creates_nothing() {
        let temp_dir = tempdir().unwrap();
        let parent = temp_dir.path().join("typo");
        let db_path = parent.join("nope.db");

        let err = open_catalogue(&db_path.to_string_lossy(), ASSET_DB_VERSION)
            .err()
            .unwrap();
        assert!(matches!(err, Error::Database(DatabaseError::NotFound(_))));
        assert!(!db_path.exists());
        assert!(!parent.exists());
    }

    #[tokio::test]
    async fn test_create_twice_is_rejected() {
        let temp_dir = tempdir().unwrap();
        let db_path = path_in(&temp_dir);
        drop(create_catalogue(&db_path).await.unwrap());

        // The second row breaks both the id check and the unique version.
        let err = create_catalogue(&db_path).await.err().unwrap();
        assert!(matches!(
            err,
            Error::Database(DatabaseError::CheckViolation(_) | DatabaseError::UniqueViolation(_))
        ));
    }
}
