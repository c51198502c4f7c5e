//! Light cleanup of feed records before they reach the cache or the
//! pipeline.
//!
//! Records stay in [`RawVenue`] form: coordinates are not parsed here, since
//! a venue with unusable coordinates must still be listed.

use std::collections::HashSet;

use reqwest::Url;
use venuefeed_core::RawVenue;

/// Cleans a fetched venue list, preserving feed order.
///
/// - Names are trimmed; records whose name is empty are dropped.
/// - `URL` values that are not absolute http(s) URLs are cleared.
///
/// Venue names are the join key for statuses, so duplicates are logged but
/// kept.
#[must_use]
pub fn normalize_venues(venues: Vec<RawVenue>) -> Vec<RawVenue> {
    let mut seen = HashSet::new();

    venues
        .into_iter()
        .filter_map(|venue| {
            let normalized = normalize_venue(venue)?;
            if !seen.insert(normalized.name.clone()) {
                tracing::warn!(
                    venue = %normalized.name,
                    "duplicate venue name in feed; statuses will be shared"
                );
            }
            Some(normalized)
        })
        .collect()
}

fn normalize_venue(mut venue: RawVenue) -> Option<RawVenue> {
    let name = venue.name.trim();
    if name.is_empty() {
        tracing::warn!(building = %venue.building, "skipping venue with empty name");
        return None;
    }
    if name.len() != venue.name.len() {
        venue.name = name.to_owned();
    }

    let website = venue.website.take().filter(|raw| {
        let valid = Url::parse(raw).is_ok_and(|u| matches!(u.scheme(), "http" | "https"));
        if !valid {
            tracing::debug!(venue = %venue.name, url = %raw, "dropping invalid venue URL");
        }
        valid
    });
    venue.website = website;

    Some(venue)
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
