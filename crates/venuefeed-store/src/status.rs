//! Persisted venue status markers.

use std::collections::BTreeMap;
use std::sync::Arc;

use venuefeed_core::{StatusMap, VenueStatus};

use crate::error::StoreError;
use crate::kv::KeyValueStore;

/// Storage key of the status mapping.
pub const STATUS_KEY: &str = "venue_status";

/// Durable mapping of venue name → status. The single source of truth for
/// status; enriched records never feed back into it.
#[derive(Clone)]
pub struct StatusStore {
    kv: Arc<dyn KeyValueStore>,
}

impl StatusStore {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Returns the persisted mapping, or an empty one if nothing is stored.
    ///
    /// Unreadable contents, or contents that are not a JSON object, are logged
    /// and treated as empty. Individual entries with an unknown status are
    /// skipped so the rest of the mapping survives the next save.
    #[must_use]
    pub fn load_all(&self) -> StatusMap {
        match self.kv.get(STATUS_KEY) {
            Ok(Some(raw)) => parse_statuses(&raw),
            Ok(None) => StatusMap::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read venue status mapping");
                StatusMap::new()
            }
        }
    }

    /// Replace the persisted mapping with `statuses`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if serialization or the write fails.
    pub fn save_all(&self, statuses: &StatusMap) -> Result<(), StoreError> {
        let json = serde_json::to_string(statuses)?;
        self.kv.set(STATUS_KEY, &json)
    }
}

fn parse_statuses(raw: &str) -> StatusMap {
    let entries: BTreeMap<String, serde_json::Value> = match serde_json::from_str(raw) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(error = %e, "ignoring malformed venue status mapping");
            return StatusMap::new();
        }
    };

    entries
        .into_iter()
        .filter_map(
            |(name, value)| match serde_json::from_value::<VenueStatus>(value) {
                Ok(status) => Some((name, status)),
                Err(e) => {
                    tracing::warn!(venue = %name, error = %e, "skipping unknown venue status");
                    None
                }
            },
        )
        .collect()
}
