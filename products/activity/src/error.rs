use std::sync::Arc;

use thiserror::Error;

/// Why the feed could not be loaded.
#[derive(Debug, Error, Clone)]
pub enum FeedError {
    #[error("activity payload could not be decoded: {0}")]
    Decode(String),
    #[error("activity fetch failed: {0}")]
    Fetch(Arc<anyhow::Error>),
}

impl FeedError {
    pub fn code(&self) -> &'static str {
        match self {
            FeedError::Decode(_) => "DECODE_FAILED",
            FeedError::Fetch(_) => "FETCH_FAILED",
        }
    }

    /// Classifies a fetcher error, recognizing malformed payloads anywhere in
    /// the cause chain.
    pub fn from_fetch(err: anyhow::Error) -> Self {
        let decode = err
            .chain()
            .find_map(|cause| cause.downcast_ref::<serde_json::Error>())
            .map(ToString::to_string);
        match decode {
            Some(message) => FeedError::Decode(message),
            None => FeedError::Fetch(Arc::new(err)),
        }
    }
}

impl From<anyhow::Error> for FeedError {
    fn from(value: anyhow::Error) -> Self {
        Self::from_fetch(value)
    }
}
