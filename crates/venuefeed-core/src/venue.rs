//! Venue records as delivered by the remote feed and as presented after
//! enrichment.
//!
//! [`RawVenue`] is the canonical form: it is what the feed returns and what
//! the local cache stores. It never carries distance or status. [`Venue`] is
//! the enriched record handed to presentation; it is rebuilt from a
//! `RawVenue` every time enrichment runs.

use serde::{Deserialize, Deserializer, Serialize};

use crate::position::Coordinates;
use crate::status::VenueStatus;

/// A venue exactly as the feed describes it.
///
/// Coordinates stay textual here. Some feed revisions publish them as JSON
/// numbers, so both forms are accepted and stored as text. Any other value
/// (`null`, booleans, objects) is stored as empty text, which leaves the venue
/// listed but without usable coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawVenue {
    pub name: String,

    #[serde(default)]
    pub building: String,

    #[serde(rename = "lat", default, deserialize_with = "text_or_number")]
    pub latitude: String,

    #[serde(rename = "lon", default, deserialize_with = "text_or_number")]
    pub longitude: String,

    #[serde(default)]
    pub description: String,

    /// Display order is significant.
    #[serde(default)]
    pub opening_times: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<String>>,

    #[serde(rename = "URL", default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
}

impl RawVenue {
    /// Parsed coordinates, or `None` when the textual pair is unusable.
    #[must_use]
    pub fn coordinates(&self) -> Option<Coordinates> {
        Coordinates::parse(&self.latitude, &self.longitude)
    }
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Number(f64),
        Other(serde::de::IgnoredAny),
    }

    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(s) => s,
        TextOrNumber::Number(n) => n.to_string(),
        TextOrNumber::Other(_) => String::new(),
    })
}

/// A venue ready for presentation: feed fields plus derived distance and the
/// user's status marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Venue {
    pub name: String,
    pub building: String,
    /// `None` when the feed coordinates are invalid; such venues are listed
    /// but never placed on the map.
    pub coordinates: Option<Coordinates>,
    pub description: String,
    pub opening_times: Vec<String>,
    pub amenities: Option<Vec<String>>,
    pub photos: Option<Vec<String>>,
    pub website: Option<String>,
    /// Great-circle distance from the user. `None` without a user position or
    /// without valid coordinates.
    pub distance_meters: Option<f64>,
    pub status: VenueStatus,
}

impl Venue {
    /// Build the presentation record from a raw venue. Distance is left unset.
    #[must_use]
    pub fn from_raw(raw: &RawVenue, status: VenueStatus) -> Self {
        Self {
            name: raw.name.clone(),
            building: raw.building.clone(),
            coordinates: raw.coordinates(),
            description: raw.description.clone(),
            opening_times: raw.opening_times.clone(),
            amenities: raw.amenities.clone(),
            photos: raw.photos.clone(),
            website: raw.website.clone(),
            distance_meters: None,
            status,
        }
    }
}

#[cfg(test)]
#[path = "venue_test.rs"]
mod tests;
