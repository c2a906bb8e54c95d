// Flat JSON object files: read whole at startup, rewritten whole on every change.

use serde::{de::DeserializeOwned, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

use super::StoreError;

/// Load a JSON object from `path`. A missing file yields an empty map; an
/// unreadable or malformed one is logged and also yields an empty map.
pub fn load_map<V: DeserializeOwned>(path: &Path) -> BTreeMap<String, V> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No store file at {}, starting empty", path.display());
            return BTreeMap::new();
        }
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            return BTreeMap::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(map) => map,
        Err(e) => {
            warn!("Ignoring malformed store file {}: {}", path.display(), e);
            BTreeMap::new()
        }
    }
}

pub async fn save_map<V: Serialize>(
    path: &Path,
    map: &BTreeMap<String, V>,
) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(map)?;
    tokio::fs::write(path, json).await.map_err(|source| StoreError::Io {
        path: path.display().to_string(),
        source,
    })?;
    debug!("Wrote {} entries to {}", map.len(), path.display());
    Ok(())
}
