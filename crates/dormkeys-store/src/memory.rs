//! In-memory `Store` for tests and dry runs.

use std::sync::RwLock;

use crate::{Store, StoreError};

/// Keeps the snapshot in a process-local buffer.
///
/// Nothing survives the process; useful for tests and for running the
/// front desk without touching disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<Option<Vec<u8>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `bytes`.
    pub fn with_bytes(bytes: Vec<u8>) -> Self {
        Self {
            data: RwLock::new(Some(bytes)),
        }
    }

    /// Returns a copy of the stored bytes, if any.
    pub fn contents(&self) -> Result<Option<Vec<u8>>, StoreError> {
        self.read()
    }
}

impl Store for MemoryStore {
    fn read(&self) -> Result<Option<Vec<u8>>, StoreError> {
        let data = self.data.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(data.clone())
    }

    fn write(&self, bytes: &[u8]) -> Result<(), StoreError> {
        let mut data = self.data.write().map_err(|_| StoreError::LockPoisoned)?;
        *data = Some(bytes.to_vec());
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
