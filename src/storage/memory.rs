//! In-memory storage slot, mainly for tests.

use crate::error::{Result, StoreError};
use crate::storage::Storage;
use parking_lot::Mutex;
use std::sync::Arc;

/// A storage slot held in memory.
///
/// Cloning yields a handle to the same slot, so a test can keep one handle
/// while the store owns another and inspect what was persisted.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    slot: Option<Vec<u8>>,
    unavailable: bool,
}

impl MemoryStorage {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot pre-filled with the given bytes.
    pub fn with_contents(bytes: impl Into<Vec<u8>>) -> Self {
        let storage = Self::new();
        storage.inner.lock().slot = Some(bytes.into());
        storage
    }

    /// Make subsequent loads and saves fail, simulating a dead backend.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.inner.lock().unavailable = unavailable;
    }

    /// Current slot contents, if any.
    pub fn contents(&self) -> Option<Vec<u8>> {
        self.inner.lock().slot.clone()
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<Option<Vec<u8>>> {
        let inner = self.inner.lock();
        if inner.unavailable {
            return Err(StoreError::Unavailable("memory slot offline".into()));
        }
        Ok(inner.slot.clone())
    }

    fn save(&self, bytes: &[u8]) -> Result<()> {
        let mut inner = self.inner.lock();
        if inner.unavailable {
            return Err(StoreError::Unavailable("memory slot offline".into()));
        }
        inner.slot = Some(bytes.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_handle_sees_saves() {
        let storage = MemoryStorage::new();
        let handle = storage.clone();

        storage.save(b"[]").unwrap();
        assert_eq!(handle.contents().unwrap(), b"[]");
    }

    #[test]
    fn test_unavailable_surfaces_error() {
        let storage = MemoryStorage::new();
        storage.set_unavailable(true);

        assert!(matches!(storage.load(), Err(StoreError::Unavailable(_))));
        assert!(matches!(storage.save(b"[]"), Err(StoreError::Unavailable(_))));

        storage.set_unavailable(false);
        storage.save(b"[]").unwrap();
    }
}
