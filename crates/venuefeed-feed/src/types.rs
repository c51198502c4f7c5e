//! Response types for the campus dining feed.
//!
//! ## Observed shape
//!
//! The feed is a single JSON object whose only field, `food_venues`, holds
//! the venue array. Venue objects use the feed's own names: `lat`/`lon` are
//! decimal strings, `opening_times` is an ordered list of display strings, and
//! the website is published under `URL`. `amenities` and `photos` are omitted
//! for some venues rather than sent as empty arrays.

use serde::Deserialize;
use venuefeed_core::RawVenue;

/// Top-level response from the venue feed.
#[derive(Debug, Deserialize)]
pub struct FeedResponse {
    pub food_venues: Vec<RawVenue>,
}
