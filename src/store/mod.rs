//! Completion state and its persistence
//!
//! The checked state of every level is a [`CompletionState`]. A
//! [`CompletionStore`] loads it once at start and receives the whole mapping
//! after every change; [`LocalStorageStore`] writes it to the `checkedItems`
//! slot of a [`LocalStorage`] file, [`MemoryStore`] keeps it for the session.

mod completion;
mod local_storage;

pub use completion::CompletionState;
pub use local_storage::{LocalStorage, StorageError};

use std::path::PathBuf;

use tracing::warn;

/// Local storage slot holding the serialized completion mapping
pub const CHECKED_ITEMS_KEY: &str = "checkedItems";

/// Backing store for completion state
pub trait CompletionStore: Send {
    /// Load the saved state, falling back to an empty mapping
    fn load(&self) -> CompletionState;

    /// Overwrite the saved state with `state`
    fn save(&mut self, state: &CompletionState) -> Result<(), StorageError>;
}

/// Session-only store
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: Option<CompletionState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last state handed to [`CompletionStore::save`]
    pub fn saved(&self) -> Option<&CompletionState> {
        self.saved.as_ref()
    }
}

impl CompletionStore for MemoryStore {
    fn load(&self) -> CompletionState {
        self.saved.clone().unwrap_or_default()
    }

    fn save(&mut self, state: &CompletionState) -> Result<(), StorageError> {
        self.saved = Some(state.clone());
        Ok(())
    }
}

/// Store that persists to the `checkedItems` local storage slot
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    storage: LocalStorage,
}

impl LocalStorageStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            storage: LocalStorage::new(path),
        }
    }

    pub fn storage(&self) -> &LocalStorage {
        &self.storage
    }
}

impl CompletionStore for LocalStorageStore {
    fn load(&self) -> CompletionState {
        let raw = match self.storage.get_item(CHECKED_ITEMS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return CompletionState::new(),
            Err(e) => {
                warn!(
                    "[nikki] Failed to read {}: {}",
                    self.storage.path().display(),
                    e
                );
                return CompletionState::new();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!("[nikki] Ignoring malformed {} slot: {}", CHECKED_ITEMS_KEY, e);
            CompletionState::new()
        })
    }

    fn save(&mut self, state: &CompletionState) -> Result<(), StorageError> {
        let raw = serde_json::to_string(state)?;
        self.storage.set_item(CHECKED_ITEMS_KEY, &raw)
    }
}

/// Store selected by the `storage.persist` setting
pub fn store_for(persist: bool, path: PathBuf) -> Box<dyn CompletionStore> {
    if persist {
        Box::new(LocalStorageStore::new(path))
    } else {
        Box::new(MemoryStore::new())
    }
}
