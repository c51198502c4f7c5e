//! Single-slot snapshot of the last successful feed fetch.

use std::sync::Arc;

use venuefeed_core::RawVenue;

use crate::error::StoreError;
use crate::kv::KeyValueStore;

/// Storage key of the one cache slot.
pub const CACHE_KEY: &str = "venues";

/// Durable copy of the most recent successfully fetched venue list.
///
/// Stores [`RawVenue`] values only; distance and status are never cached.
#[derive(Clone)]
pub struct CacheStore {
    kv: Arc<dyn KeyValueStore>,
}

impl CacheStore {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Overwrite the cache slot with `venues`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if serialization or the write fails. Callers
    /// treat this as best-effort.
    pub fn save(&self, venues: &[RawVenue]) -> Result<(), StoreError> {
        let json = serde_json::to_string(venues)?;
        self.kv.set(CACHE_KEY, &json)?;
        tracing::debug!(count = venues.len(), "saved venue cache");
        Ok(())
    }

    /// Read the cache slot.
    ///
    /// Returns `None` when nothing has been cached yet. Unreadable or
    /// malformed contents are logged and also reported as `None`.
    #[must_use]
    pub fn load(&self) -> Option<Vec<RawVenue>> {
        let raw = match self.kv.get(CACHE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!("venue cache is empty");
                return None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to read venue cache");
                return None;
            }
        };

        match serde_json::from_str::<Vec<RawVenue>>(&raw) {
            Ok(venues) => Some(venues),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring malformed venue cache");
                None
            }
        }
    }
}
