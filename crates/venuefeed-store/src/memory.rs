//! In-process [`KeyValueStore`] for tests and ephemeral sessions.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::error::StoreError;
use crate::kv::KeyValueStore;

#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: Mutex<HashMap<String, String>>,
    fail_writes: Mutex<bool>,
    writes: Mutex<usize>,
}

impl MemoryKeyValueStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing the write counter.
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .insert(key.to_owned(), value.to_owned());
    }

    /// Make every subsequent `set` fail with [`StoreError::Unavailable`].
    pub fn set_fail_writes(&self, fail: bool) {
        *self.fail_writes.lock() = fail;
    }

    /// Number of successful `set` calls.
    #[must_use]
    pub fn write_count(&self) -> usize {
        *self.writes.lock()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if *self.fail_writes.lock() {
            return Err(StoreError::Unavailable(format!(
                "writes disabled for key {key}"
            )));
        }
        self.entries
            .lock()
            .insert(key.to_owned(), value.to_owned());
        *self.writes.lock() += 1;
        Ok(())
    }
}
