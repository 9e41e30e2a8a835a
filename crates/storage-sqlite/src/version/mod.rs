//! SQLite storage implementation for the schema version marker.

mod model;
mod repository;

pub use model::VersionInfoDB;
pub use repository::VersionInfoRepository;
pub(crate) use repository::read_version_on;

// Re-export trait from core for convenience
pub use assetdb_core::catalogue::VersionInfoRepositoryTrait;
