use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::errors::CoreError;

/// A named durable key-value slot holding a JSON payload.
///
/// Each collection owns exactly one slot. Writes replace the whole
/// payload; there are no partial writes and no transactions.
pub trait SlotStore: Send + Sync {
    /// Read the payload stored under `key`. `Ok(None)` means the slot
    /// has never been written.
    fn read(&self, key: &str) -> Result<Option<String>, CoreError>;

    /// Replace the payload stored under `key`.
    fn write(&self, key: &str, payload: &str) -> Result<(), CoreError>;
}

/// File-backed slot store: one `<key>.json` file per slot under a data
/// directory.
pub struct FileSlotStore {
    dir: PathBuf,
}

impl FileSlotStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, CoreError> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SlotStore for FileSlotStore {
    fn read(&self, key: &str) -> Result<Option<String>, CoreError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, payload: &str) -> Result<(), CoreError> {
        std::fs::write(self.path_for(key), payload)?;
        Ok(())
    }
}

/// In-memory slot store. Used by tests and as a scratch store when no
/// durable directory is wanted.
#[derive(Default)]
pub struct MemorySlotStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStore for MemorySlotStore {
    fn read(&self, key: &str) -> Result<Option<String>, CoreError> {
        let slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        Ok(slots.get(key).cloned())
    }

    fn write(&self, key: &str, payload: &str) -> Result<(), CoreError> {
        let mut slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        slots.insert(key.to_string(), payload.to_string());
        Ok(())
    }
}
