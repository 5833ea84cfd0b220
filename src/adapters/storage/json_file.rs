//! JSON file helpers shared by the file-backed stores.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use tokio::fs;

use crate::ports::StorageError;

/// Reads and decodes `path`, or `None` if the file does not exist.
pub(super) async fn read_json<T: DeserializeOwned>(
    path: &Path,
    what: &'static str,
) -> Result<Option<T>, StorageError> {
    let raw = match fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| StorageError::deserialization(what, e))
}

/// Encodes `value` and replaces `path` with it.
///
/// Writes to a sibling temp file first and renames it over the target so a
/// crash mid-write never leaves a truncated record.
pub(super) async fn write_json<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
    what: &'static str,
) -> Result<(), StorageError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).await?;
    }

    let json = serde_json::to_string_pretty(value)
        .map_err(|e| StorageError::serialization(what, e))?;

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).await?;
    fs::rename(&tmp, path).await?;

    Ok(())
}

/// Removes `path`; a missing file is fine.
pub(super) async fn remove_file(path: &Path) -> Result<(), StorageError> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
