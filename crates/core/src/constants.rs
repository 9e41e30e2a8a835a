/// Schema revision the code expects to find in `version_info.version`
pub const ASSET_DB_VERSION: i32 = 3;

/// `start_date` stored when a row does not supply one (beginning of time)
pub const DEFAULT_START_DATE: i64 = 0;

/// Only legal primary key of the `version_info` singleton
pub const VERSION_INFO_ID: i32 = 1;
