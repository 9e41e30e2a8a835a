use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use assetdb_core::catalogue::{VersionInfo, VersionInfoRepositoryTrait};
use assetdb_core::constants::VERSION_INFO_ID;
use assetdb_core::errors::Result;

use super::model::VersionInfoDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::version_info;

/// Repository for the `version_info` singleton
pub struct VersionInfoRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl VersionInfoRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }

    /// Reads the full row, if any.
    pub fn get_version_info(&self) -> Result<Option<VersionInfo>> {
        let mut conn = get_connection(&self.pool)?;
        let row = version_info::table
            .select(VersionInfoDB::as_select())
            .filter(version_info::id.eq(VERSION_INFO_ID))
            .first::<VersionInfoDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(VersionInfo::from))
    }
}

/// Reads the stored version on an existing connection.
pub(crate) fn read_version_on(conn: &mut SqliteConnection) -> Result<Option<i32>> {
    let version = version_info::table
        .select(version_info::version)
        .filter(version_info::id.eq(VERSION_INFO_ID))
        .first::<i32>(conn)
        .optional()
        .map_err(StorageError::from)?;
    Ok(version)
}

/// Inserts the singleton row; `id` is assigned by SQLite.
pub(crate) fn write_version_on(conn: &mut SqliteConnection, version: i32) -> Result<VersionInfo> {
    let row = diesel::insert_into(version_info::table)
        .values(version_info::version.eq(version))
        .get_result::<VersionInfoDB>(conn)
        .map_err(StorageError::from)?;
    Ok(row.into())
}

#[async_trait]
impl VersionInfoRepositoryTrait for VersionInfoRepository {
    fn read_version(&self) -> Result<Option<i32>> {
        let mut conn = get_connection(&self.pool)?;
        read_version_on(&mut conn)
    }

    async fn write_version(&self, version: i32) -> Result<VersionInfo> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| write_version_on(conn, version))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_catalogue_db;
    use assetdb_core::errors::{DatabaseError, Error};
    use diesel::RunQueryDsl;

    #[tokio::test]
    async fn test_empty_table_reads_none() {
        let (pool, writer, _temp_dir) = create_test_catalogue_db().await;
        let repo = VersionInfoRepository::new(pool, writer);

        assert_eq!(repo.read_version().unwrap(), None);
        assert_eq!(repo.get_version_info().unwrap(), None);
    }

    #[tokio::test]
    async fn test_first_write_gets_id_one() {
        let (pool, writer, _temp_dir) = create_test_catalogue_db().await;
        let repo = VersionInfoRepository::new(pool, writer);

        let info = repo.write_version(3).await.unwrap();
        assert_eq!(
            info,
            VersionInfo {
                id: VERSION_INFO_ID,
                version: 3
            }
        );
        assert_eq!(repo.read_version().unwrap(), Some(3));
    }

    #[tokio::test]
    async fn test_second_write_is_rejected_by_check() {
        let (pool, writer, _temp_dir) = create_test_catalogue_db().await;
        let repo = VersionInfoRepository::new(pool, writer);

        repo.write_version(3).await.unwrap();
        let err = repo.write_version(4).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Database(DatabaseError::CheckViolation(_))
        ));
        assert_eq!(repo.read_version().unwrap(), Some(3));
    }

    #[tokio::test]
    async fn test_explicit_id_two_is_rejected_on_empty_table() {
        let (pool, writer, _temp_dir) = create_test_catalogue_db().await;
        let mut conn = get_connection(&pool).unwrap();

        let result = diesel::sql_query("INSERT INTO version_info (id, version) VALUES (2, 3)")
            .execute(&mut conn);
        assert!(result.is_err());

        let repo = VersionInfoRepository::new(pool, writer);
        assert_eq!(repo.read_version().unwrap(), None);
    }

    #[tokio::test]
    async fn test_second_row_with_any_id_is_rejected() {
        let (pool, _writer, _temp_dir) = create_test_catalogue_db().await;
        let mut conn = get_connection(&pool).unwrap();

        diesel::sql_query("INSERT INTO version_info (id, version) VALUES (1, 3)")
            .execute(&mut conn)
            .unwrap();
        for (id, version) in [(0, 4), (1, 4), (2, 4), (-1, 5)] {
            let sql = format!(
                "INSERT INTO version_info (id, version) VALUES ({}, {})",
                id, version
            );
            assert!(
                diesel::sql_query(sql).execute(&mut conn).is_err(),
                "id {} must be rejected",
                id
            );
        }
    }
}
