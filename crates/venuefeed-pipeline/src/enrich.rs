//! Enrichment and ranking.
//!
//! [`rank_venues`] is a pure function of its inputs; the orchestrator calls it
//! again on every fetch, status toggle, and position update.

use std::cmp::Ordering;

use venuefeed_core::{Coordinates, Position, RawVenue, StatusMap, Venue, VenueStatus};

use crate::geo::haversine_meters;

/// Produce the ordered view-model list.
///
/// 1. Each venue takes its status from `statuses` (default `normal`).
/// 2. With a `position`, venues with valid coordinates get a distance.
/// 3. With a `position`, venues are stably sorted by ascending distance;
///    those without a distance follow, in input order.
///
/// Without a `position` the input order is kept and no distances are set.
#[must_use]
pub fn rank_venues(
    raw: &[RawVenue],
    statuses: &StatusMap,
    position: Option<Position>,
) -> Vec<Venue> {
    let mut venues: Vec<Venue> = raw
        .iter()
        .map(|r| {
            let status = statuses.get(&r.name).copied().unwrap_or_default();
            Venue::from_raw(r, status)
        })
        .collect();

    let Some(position) = position else {
        return venues;
    };

    for venue in &mut venues {
        venue.distance_meters = venue.coordinates.map(|c| haversine_meters(position, c));
    }

    // `sort_by` is stable, which keeps equal and unknown distances in input order.
    venues.sort_by(|a, b| compare_distance(a.distance_meters, b.distance_meters));
    venues
}

fn compare_distance(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// A venue that can be placed on the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapMarker<'a> {
    pub name: &'a str,
    pub coordinates: Coordinates,
    pub status: VenueStatus,
}

/// Markers for every venue with valid coordinates, in list order.
#[must_use]
pub fn map_markers(venues: &[Venue]) -> Vec<MapMarker<'_>> {
    venues
        .iter()
        .filter_map(|v| {
            v.coordinates.map(|coordinates| MapMarker {
                name: &v.name,
                coordinates,
                status: v.status,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "enrich_test.rs"]
mod tests;
