pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use client::FeedClient;
pub use error::{FailureKind, FeedError};
pub use normalize::normalize_venues;
pub use types::FeedResponse;
