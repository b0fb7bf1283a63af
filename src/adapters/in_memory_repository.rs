//! In-memory value table repository for testing.
//!
//! Keeps saved tables in a shared map keyed by path, so tests can exercise
//! save/load flows without touching the file system.

use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use crate::{Result, agents::ValueTable, error::Error, ports::ValueTableRepository};

/// In-memory repository for testing.
///
/// # Examples
///
/// ```
/// use std::path::Path;
///
/// use noughts::{adapters::InMemoryRepository, agents::ValueTable, ports::ValueTableRepository};
///
/// let repo = InMemoryRepository::new();
/// repo.save(&ValueTable::new(), Path::new("policy"))?;
/// let loaded = repo.load(Path::new("policy"))?;
/// assert!(loaded.is_empty());
/// # Ok::<(), noughts::Error>(())
/// ```
///
/// All clones share the same underlying storage.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    storage: Arc<Mutex<HashMap<String, ValueTable>>>,
}

impl InMemoryRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn storage(&self) -> MutexGuard<'_, HashMap<String, ValueTable>> {
        self.storage.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Get the number of tables currently stored.
    pub fn count(&self) -> usize {
        self.storage().len()
    }

    /// Check if a table exists at the given path.
    pub fn contains(&self, path: &Path) -> bool {
        self.storage().contains_key(path.to_string_lossy().as_ref())
    }
}

impl ValueTableRepository for InMemoryRepository {
    fn save(&self, table: &ValueTable, path: &Path) -> Result<()> {
        let key = path.to_string_lossy().to_string();
        self.storage().insert(key, table.clone());
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<ValueTable> {
        let key = path.to_string_lossy().to_string();
        self.storage().get(&key).cloned().ok_or_else(|| Error::Io {
            operation: format!("load value table from in-memory storage at {path:?}"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "key not found in memory"),
        })
    }
}
