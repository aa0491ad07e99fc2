//! File-backed persistence adapter: one `<key>.json` file per key

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use shared::{InventoryError, InventoryResult, KeyValueStore};

/// Stores each key as a file under a data directory
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open (and create if needed) the data directory
    pub fn open(root: impl Into<PathBuf>) -> InventoryResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| {
            InventoryError::Storage(format!("cannot create {}: {}", root.display(), e))
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> InventoryResult<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(InventoryError::Storage(format!(
                "cannot read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    /// Written to `<key>.json.tmp`, then renamed over the old file
    fn set(&mut self, key: &str, value: &str) -> InventoryResult<()> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)
            .and_then(|_| fs::rename(&tmp, &path))
            .map_err(|e| {
                InventoryError::Storage(format!("cannot write {}: {}", path.display(), e))
            })?;
        tracing::debug!(key, path = %path.display(), bytes = value.len(), "Stored value");
        Ok(())
    }
}
