// Storage abstraction — one named slot in a local key-value store

use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Synchronous key-value contract the transcript store runs on.
///
/// Keys and values are opaque bytes. Errors are stringly typed at this
/// layer; the persistence layer wraps them in [`crate::StoreError`].
#[cfg_attr(test, mockall::automock)]
pub trait StorageBackend: Send + Sync {
    fn put(&self, key: &[u8], value: &[u8]) -> Result<(), String>;
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, String>;
    fn remove(&self, key: &[u8]) -> Result<(), String>;
    fn flush(&self) -> Result<(), String>;
}

/// In-memory storage for tests and ephemeral sessions
#[derive(Clone, Default)]
pub struct MemoryStorage {
    data: Arc<RwLock<HashMap<Vec<u8>, Vec<u8>>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn put(&self, key: &[u8], value: &[u8]) -> Result<(), String> {
        self.data.write().insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, String> {
        Ok(self.data.read().get(key).cloned())
    }

    fn remove(&self, key: &[u8]) -> Result<(), String> {
        self.data.write().remove(key);
        Ok(())
    }

    fn flush(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Durable storage backed by sled
pub struct SledStorage {
    db: sled::Db,
}

impl SledStorage {
    pub fn open(path: &Path) -> Result<Self, String> {
        let db = sled::open(path).map_err(|e| e.to_string())?;
        Ok(Self { db })
    }
}

impl StorageBackend for SledStorage {
    fn put(&self, key: &[u8], value: &[u8]) -> Result<(), String> {
        self.db.insert(key, value).map_err(|e| e.to_string())?;
        Ok(())
    }

    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, String> {
        let value = self.db.get(key).map_err(|e| e.to_string())?;
        Ok(value.map(|ivec| ivec.to_vec()))
    }

    fn remove(&self, key: &[u8]) -> Result<(), String> {
        self.db.remove(key).map_err(|e| e.to_string())?;
        Ok(())
    }

    fn flush(&self) -> Result<(), String> {
        self.db.flush().map_err(|e| e.to_string())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_put_get_remove() {
        let storage = MemoryStorage::new();
        storage.put(b"slot", b"value").unwrap();
        assert_eq!(storage.get(b"slot").unwrap(), Some(b"value".to_vec()));

        storage.remove(b"slot").unwrap();
        assert_eq!(storage.get(b"slot").unwrap(), None);
    }

    #[test]
    fn test_memory_overwrite_replaces() {
        let storage = MemoryStorage::new();
        storage.put(b"slot", b"first").unwrap();
        storage.put(b"slot", b"second").unwrap();
        assert_eq!(storage.get(b"slot").unwrap(), Some(b"second".to_vec()));
    }

    #[test]
    fn test_memory_remove_absent_is_ok() {
        let storage = MemoryStorage::new();
        assert!(storage.remove(b"never-written").is_ok());
    }

    #[test]
    fn test_sled_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = SledStorage::open(dir.path()).unwrap();

        storage.put(b"slot", b"value").unwrap();
        assert_eq!(storage.get(b"slot").unwrap(), Some(b"value".to_vec()));

        storage.remove(b"slot").unwrap();
        assert_eq!(storage.get(b"slot").unwrap(), None);
        storage.flush().unwrap();
    }
}
