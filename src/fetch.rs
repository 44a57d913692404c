//! HTTP fetcher for remote blocklist feeds.

use crate::catalog::FeedDescriptor;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Why a single feed fetch failed.
#[derive(Debug, Error)]
pub enum FetchCause {
    /// Connection-level failure: DNS, refused, reset.
    #[error("network error: {0}")]
    Network(reqwest::Error),

    /// The per-feed deadline elapsed before the body arrived.
    #[error("request timed out")]
    Timeout,

    /// The source answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(StatusCode),

    /// The body exceeded the configured size cap.
    #[error("body exceeded {limit} bytes")]
    TooLarge { limit: usize },
}

impl From<reqwest::Error> for FetchCause {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchCause::Timeout
        } else {
            FetchCause::Network(e)
        }
    }
}

/// Fetch failure for one feed. Always contained by the caller; one feed's
/// failure never aborts the surrounding run.
#[derive(Debug, Error)]
#[error("feed {feed}: {cause}")]
pub struct FetchError {
    /// Name of the feed that failed.
    pub feed: String,

    /// What went wrong.
    pub cause: FetchCause,
}

/// Fetches one feed's raw body as text, with a per-feed timeout and a
/// streamed body-size cap so a slow or hostile source cannot stall the run
/// or exhaust memory.
pub struct Fetcher {
    client: Client,
    max_body_bytes: usize,
}

impl Fetcher {
    /// Create a fetcher with the given per-feed timeout and body cap.
    pub fn new(timeout: Duration, max_body_bytes: usize) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            max_body_bytes,
        }
    }

    /// Retrieve one feed's raw body.
    pub async fn fetch(&self, feed: &FeedDescriptor) -> Result<String, FetchError> {
        self.fetch_inner(feed).await.map_err(|cause| FetchError {
            feed: feed.name.clone(),
            cause,
        })
    }

    async fn fetch_inner(&self, feed: &FeedDescriptor) -> Result<String, FetchCause> {
        debug!(feed = %feed.name, url = %feed.url, "Fetching feed");

        let mut response = self.client.get(&feed.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchCause::Status(status));
        }

        // Reject early on a declared length; the cap still holds for
        // chunked responses that never declare one.
        if let Some(len) = response.content_length() {
            if len > self.max_body_bytes as u64 {
                return Err(FetchCause::TooLarge {
                    limit: self.max_body_bytes,
                });
            }
        }

        let mut body: Vec<u8> = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            if body.len() + chunk.len() > self.max_body_bytes {
                return Err(FetchCause::TooLarge {
                    limit: self.max_body_bytes,
                });
            }
            body.extend_from_slice(&chunk);
        }

        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}
