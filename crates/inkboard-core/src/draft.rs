//! Local draft persistence: a key-value snapshot of the current scene.
//!
//! Non-authoritative and distinct from the remote store. Write serializes
//! the current stroke list under a fixed key; read replaces the in-memory
//! document wholesale.

use crate::stroke::Stroke;
use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;
use thiserror::Error;

/// Fixed key the scene draft is saved under.
pub const SCENE_DRAFT_KEY: &str = "whiteboard.scene";

/// Draft store errors.
#[derive(Debug, Error)]
pub enum DraftError {
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("draft store error: {0}")]
    Other(String),
}

/// Result type for draft operations.
pub type DraftResult<T> = Result<T, DraftError>;

/// A string key-value backend, shaped like browser local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> DraftResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> DraftResult<()>;
    fn remove(&self, key: &str) -> DraftResult<()>;
}

/// In-memory backend for testing and ephemeral use.
#[derive(Default)]
pub struct MemoryKv {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKv {
    fn get(&self, key: &str) -> DraftResult<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| DraftError::Other(format!("Lock error: {}", e)))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> DraftResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| DraftError::Other(format!("Lock error: {}", e)))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> DraftResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| DraftError::Other(format!("Lock error: {}", e)))?;
        entries.remove(key);
        Ok(())
    }
}

/// File-backed backend, one file per key.
pub struct FileKv {
    base_path: PathBuf,
}

impl FileKv {
    /// Create a file backend rooted at `base_path`, creating it if needed.
    pub fn new(base_path: PathBuf) -> DraftResult<Self> {
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(|e| {
                DraftError::Io(format!("Failed to create draft directory: {}", e))
            })?;
        }
        Ok(Self { base_path })
    }

    /// Create the backend in the platform data directory
    /// (`~/.local/share/inkboard/drafts` on Linux).
    pub fn default_location() -> DraftResult<Self> {
        let base = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| DraftError::Io("Could not determine home directory".to_string()))?;
        Self::new(base.join("inkboard").join("drafts"))
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        // Sanitize the key to be safe for filenames
        let safe_key: String = key
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '-' || c == '_' || c == '.' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.base_path.join(format!("{}.json", safe_key))
    }

    pub fn base_path(&self) -> &PathBuf {
        &self.base_path
    }
}

impl KeyValueStore for FileKv {
    fn get(&self, key: &str) -> DraftResult<Option<String>> {
        let path = self.entry_path(key);
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| DraftError::Io(format!("Failed to read {}: {}", path.display(), e)))
    }

    fn set(&self, key: &str, value: &str) -> DraftResult<()> {
        let path = self.entry_path(key);
        fs::write(&path, value)
            .map_err(|e| DraftError::Io(format!("Failed to write {}: {}", path.display(), e)))
    }

    fn remove(&self, key: &str) -> DraftResult<()> {
        let path = self.entry_path(key);
        if path.exists() {
            fs::remove_file(&path).map_err(|e| {
                DraftError::Io(format!("Failed to delete {}: {}", path.display(), e))
            })?;
        }
        Ok(())
    }
}

/// Snapshot store over a key-value backend.
///
/// Everything lives under [`SCENE_DRAFT_KEY`]; loading when nothing was
/// ever saved is a no-op (`Ok(None)`), not an error.
pub struct DraftStore<K: KeyValueStore> {
    kv: K,
}

impl<K: KeyValueStore> DraftStore<K> {
    pub fn new(kv: K) -> Self {
        Self { kv }
    }

    /// Serialize `value` under the fixed draft key, replacing any prior
    /// snapshot.
    pub fn save<T: Serialize>(&self, value: &T) -> DraftResult<()> {
        let json = serde_json::to_string(value)
            .map_err(|e| DraftError::Serialization(e.to_string()))?;
        self.kv.set(SCENE_DRAFT_KEY, &json)?;
        debug!("draft saved under {}", SCENE_DRAFT_KEY);
        Ok(())
    }

    /// Load and deserialize the snapshot, if one exists.
    pub fn load<T: DeserializeOwned>(&self) -> DraftResult<Option<T>> {
        match self.kv.get(SCENE_DRAFT_KEY)? {
            Some(json) => serde_json::from_str(&json)
                .map(Some)
                .map_err(|e| DraftError::Serialization(e.to_string())),
            None => Ok(None),
        }
    }

    /// Discard the snapshot, if any.
    pub fn clear(&self) -> DraftResult<()> {
        self.kv.remove(SCENE_DRAFT_KEY)
    }

    /// Save the current stroke list as the scene draft.
    pub fn save_strokes(&self, strokes: &[Stroke]) -> DraftResult<()> {
        self.save(&strokes)
    }

    /// Load the saved stroke list, if a snapshot exists.
    pub fn load_strokes(&self) -> DraftResult<Option<Vec<Stroke>>> {
        self.load()
    }

    pub fn backend(&self) -> &K {
        &self.kv
    }
}
