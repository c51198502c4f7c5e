use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// User-assigned marker for a venue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VenueStatus {
    #[default]
    Normal,
    Favorite,
    Disliked,
}

impl VenueStatus {
    /// One step of the toggle cycle: normal → favorite → disliked → normal.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            VenueStatus::Normal => VenueStatus::Favorite,
            VenueStatus::Favorite => VenueStatus::Disliked,
            VenueStatus::Disliked => VenueStatus::Normal,
        }
    }
}

impl std::fmt::Display for VenueStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VenueStatus::Normal => write!(f, "normal"),
            VenueStatus::Favorite => write!(f, "favorite"),
            VenueStatus::Disliked => write!(f, "disliked"),
        }
    }
}

/// Venue name → status. Entries for venues no longer in the feed are kept.
pub type StatusMap = BTreeMap<String, VenueStatus>;
