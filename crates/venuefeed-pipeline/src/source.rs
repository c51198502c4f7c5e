use std::future::Future;

use venuefeed_core::RawVenue;
use venuefeed_feed::{FeedClient, FeedError};

/// Where the pipeline gets fresh venue data from.
pub trait VenueSource: Send + Sync {
    fn fetch_venues(&self) -> impl Future<Output = Result<Vec<RawVenue>, FeedError>> + Send;
}

impl VenueSource for FeedClient {
    fn fetch_venues(&self) -> impl Future<Output = Result<Vec<RawVenue>, FeedError>> + Send {
        FeedClient::fetch_venues(self)
    }
}
