use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("empty response body from {url}")]
    EmptyResponse { url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid feed URL \"{url}\": {reason}")]
    InvalidFeedUrl { url: String, reason: String },
}

/// Coarse failure category reported to the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Transport failure or a non-2xx response.
    Network,
    /// The server answered without a body.
    EmptyResponse,
    /// The body is not the expected JSON shape.
    Decode,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::Network => write!(f, "network"),
            FailureKind::EmptyResponse => write!(f, "no-data"),
            FailureKind::Decode => write!(f, "malformed"),
        }
    }
}

impl FeedError {
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            FeedError::Http(_)
            | FeedError::UnexpectedStatus { .. }
            | FeedError::InvalidFeedUrl { .. } => FailureKind::Network,
            FeedError::EmptyResponse { .. } => FailureKind::EmptyResponse,
            FeedError::Deserialize { .. } => FailureKind::Decode,
        }
    }
}
