use crate::error::StoreError;

/// Application-private key-value storage.
///
/// Values are whole JSON documents. `set` replaces the previous value in one
/// step: readers observe either the old value or the new one, never a mix.
pub trait KeyValueStore: Send + Sync {
    /// Returns `Ok(None)` when nothing has been stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// # Errors
    ///
    /// Returns [`StoreError`] if the value cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}
