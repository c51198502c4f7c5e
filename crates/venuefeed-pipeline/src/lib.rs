//! Venue data pipeline: fetch, fall back to cache, enrich, rank, publish.

pub mod enrich;
pub mod geo;
pub mod location;
pub mod orchestrator;
pub mod source;

pub use enrich::{map_markers, rank_venues, MapMarker};
pub use geo::haversine_meters;
pub use location::LocationSource;
pub use orchestrator::{Condition, Pipeline, PipelineState, ViewModel};
pub use source::VenueSource;
