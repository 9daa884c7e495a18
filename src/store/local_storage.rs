//! File-backed key/value slots, one JSON object per file

use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;

/// Error type for local storage access
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Local storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Local storage is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// String slots keyed by name, stored as `{ "<name>": "<value>" }`
#[derive(Debug, Clone)]
pub struct LocalStorage {
    path: PathBuf,
}

impl LocalStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read a slot. A missing file reads as an empty storage.
    pub fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let mut file = File::open(&self.path)?;
        file.lock_shared()?;
        let slots = read_slots(&mut file);
        file.unlock()?;

        Ok(slots?.remove(key))
    }

    /// Overwrite a slot, keeping the other slots in the file
    pub fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.update(|slots| {
            slots.insert(key.to_string(), value.to_string());
        })
    }

    pub fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.update(|slots| {
            slots.remove(key);
        })
    }

    fn update(&self, apply: impl FnOnce(&mut BTreeMap<String, String>)) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)?;
        file.lock_exclusive()?;

        let result = (|| -> Result<(), StorageError> {
            // An unreadable file is replaced rather than blocking every write
            let mut slots = read_slots(&mut file).unwrap_or_else(|e| {
                tracing::warn!(
                    "[nikki] Discarding unreadable local storage {}: {}",
                    self.path.display(),
                    e
                );
                BTreeMap::new()
            });
            apply(&mut slots);

            let content = serde_json::to_string_pretty(&slots)?;
            file.set_len(0)?;
            file.seek(SeekFrom::Start(0))?;
            file.write_all(content.as_bytes())?;
            file.sync_all()?;
            Ok(())
        })();

        file.unlock()?;
        result
    }
}

fn read_slots(file: &mut File) -> Result<BTreeMap<String, String>, StorageError> {
    let mut content = String::new();
    file.seek(SeekFrom::Start(0))?;
    file.read_to_string(&mut content)?;

    if content.trim().is_empty() {
        return Ok(BTreeMap::new());
    }
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path().join("storage.json"));
        assert_eq!(storage.get_item("checkedItems").unwrap(), None);
    }

    #[test]
    fn test_set_get_remove() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path().join("a").join("storage.json"));

        storage.set_item("checkedItems", "{}").unwrap();
        storage.set_item("other", "x").unwrap();
        assert_eq!(storage.get_item("checkedItems").unwrap().as_deref(), Some("{}"));

        storage.set_item("checkedItems", r#"{"1":true}"#).unwrap();
        assert_eq!(
            storage.get_item("checkedItems").unwrap().as_deref(),
            Some(r#"{"1":true}"#)
        );
        assert_eq!(storage.get_item("other").unwrap().as_deref(), Some("x"));

        storage.remove_item("other").unwrap();
        assert_eq!(storage.get_item("other").unwrap(), None);
    }

    #[test]
    fn test_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "not json").unwrap();
        let storage = LocalStorage::new(&path);

        assert!(matches!(
            storage.get_item("checkedItems"),
            Err(StorageError::Json(_))
        ));

        // Writes recover by replacing the file
        storage.set_item("checkedItems", "{}").unwrap();
        assert_eq!(storage.get_item("checkedItems").unwrap().as_deref(), Some("{}"));
    }
}
