//! HTTP client for the campus dining venue feed.

use reqwest::{Client, Url};
use venuefeed_core::RawVenue;

use crate::error::FeedError;
use crate::normalize::normalize_venues;
use crate::types::FeedResponse;

/// HTTP client bound to one venue feed URL.
///
/// Performs a single GET per call. There are no retries and no timeout beyond
/// the transport defaults: a failure is reported immediately and the caller
/// decides how to fall back.
pub struct FeedClient {
    client: Client,
    feed_url: Url,
}

impl FeedClient {
    /// Creates a `FeedClient` for `feed_url` with the given `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::InvalidFeedUrl`] if `feed_url` is not an absolute
    /// http(s) URL, or [`FeedError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(feed_url: &str, user_agent: &str) -> Result<Self, FeedError> {
        let feed_url = Self::parse_feed_url(feed_url)?;
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client, feed_url })
    }

    #[must_use]
    pub fn feed_url(&self) -> &str {
        self.feed_url.as_str()
    }

    /// Fetches and parses the venue list.
    ///
    /// # Errors
    ///
    /// - [`FeedError::Http`]: network or TLS failure.
    /// - [`FeedError::UnexpectedStatus`]: any non-2xx status.
    /// - [`FeedError::EmptyResponse`]: the body is empty or whitespace.
    /// - [`FeedError::Deserialize`]: the body is not the expected JSON shape.
    pub async fn fetch_venues(&self) -> Result<Vec<RawVenue>, FeedError> {
        let url = self.feed_url.to_string();

        let response = self
            .client
            .get(self.feed_url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            return Err(FeedError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(FeedError::EmptyResponse { url });
        }

        let parsed =
            serde_json::from_str::<FeedResponse>(&body).map_err(|e| FeedError::Deserialize {
                context: format!("venue feed from {url}"),
                source: e,
            })?;

        tracing::debug!(
            url = %url,
            count = parsed.food_venues.len(),
            "fetched venue feed"
        );

        Ok(normalize_venues(parsed.food_venues))
    }

    /// Parses and validates the configured feed URL.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::InvalidFeedUrl`] if the URL does not parse or its
    /// scheme is not `http`/`https`.
    fn parse_feed_url(feed_url: &str) -> Result<Url, FeedError> {
        let url = Url::parse(feed_url).map_err(|e| FeedError::InvalidFeedUrl {
            url: feed_url.to_owned(),
            reason: e.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(FeedError::InvalidFeedUrl {
                url: feed_url.to_owned(),
                reason: format!("unsupported scheme \"{other}\""),
            }),
        }
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
