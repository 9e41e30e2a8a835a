//! Catalogue module - schema versioning protocol.
//!
//! A catalogue is opened by reading the `version_info` singleton and checking
//! it against [`ASSET_DB_VERSION`](crate::constants::ASSET_DB_VERSION) before
//! any other table is read.

mod version;

pub use version::{check_version_info, VersionInfo};

use crate::errors::Result;

/// Trait defining the contract for reading and writing the schema version.
#[async_trait::async_trait]
pub trait VersionInfoRepositoryTrait: Send + Sync {
    /// Version stored in the catalogue, or `None` when the table is empty.
    fn read_version(&self) -> Result<Option<i32>>;

    /// Writes the singleton row. The storage rejects a second row.
    async fn write_version(&self, version: i32) -> Result<VersionInfo>;
}
