use log::warn;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// The lone row of `version_info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    pub id: i32,
    pub version: i32,
}

/// Compares the version read from a catalogue with the one the code expects.
///
/// A catalogue without a version row is considered to be at version 0.
pub fn check_version_info(found: Option<i32>, expected: i32) -> Result<()> {
    let found = found.unwrap_or(0);
    if found != expected {
        warn!(
            "Asset db is at version {} but version {} is required",
            found, expected
        );
        return Err(Error::SchemaVersionMismatch { expected, found });
    }
    Ok(())
}
