//! Database model for the schema version marker.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use assetdb_core::catalogue::VersionInfo;

/// Database model for the `version_info` singleton
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[diesel(table_name = crate::schema::version_info)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct VersionInfoDB {
    pub id: i32,
    pub version: i32,
}

impl From<VersionInfoDB> for VersionInfo {
    fn from(db: VersionInfoDB) -> Self {
        Self {
            id: db.id,
            version: db.version,
        }
    }
}
