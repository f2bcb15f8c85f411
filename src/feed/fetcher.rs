use crate::feed::parser::{parse_entries, FeedEntry, ParseError};
use futures::StreamExt;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Google News search feed. The query lands in the `q` parameter.
pub const DEFAULT_ENDPOINT: &str = "https://news.google.com/rss/search";

/// Hard per-fetch timeout. Non-retrying.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const MAX_FEED_SIZE: usize = 5 * 1024 * 1024; // 5MB

/// Errors from a single feed fetch.
///
/// Every failure mode is distinct so the UI can say "the network is down"
/// rather than "zero news today" — an empty entry list is only ever a
/// successful fetch of an empty feed.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Endpoint from config could not be combined with the query.
    #[error("Invalid feed endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
    /// Network-level error (DNS, connection, TLS, etc.)
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// Request and body read did not complete within the hard timeout.
    #[error("Request timed out after {}s", .0.as_secs())]
    Timeout(Duration),
    /// HTTP response with non-2xx status code.
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    /// Response body exceeded the size cap.
    #[error("Response too large")]
    ResponseTooLarge,
    /// Body was not a recognizable RSS/Atom feed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Build the search URL with the query URL-encoded into the `q` parameter.
pub fn search_url(endpoint: &str, query: &str) -> Result<Url, url::ParseError> {
    Url::parse_with_params(endpoint, &[("q", query)])
}

/// Fetch the news feed for `query` and return its entries in feed order.
///
/// One GET, one hard timeout covering both the request and the body read,
/// no retry, no backoff. Entries come back exactly as the feed ordered
/// them — no re-sorting, no filtering beyond linkless items, no dedup.
///
/// `Ok(vec![])` means the feed was fetched and parsed but had zero items;
/// all failures surface as a [`FetchError`] variant.
pub async fn fetch(
    client: &reqwest::Client,
    endpoint: &str,
    query: &str,
    timeout: Duration,
) -> Result<Vec<FeedEntry>, FetchError> {
    let url = search_url(endpoint, query)?;

    let request = async {
        let response = client.get(url.clone()).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::HttpStatus(response.status().as_u16()));
        }
        read_capped(response, MAX_FEED_SIZE).await
    };

    let bytes = tokio::time::timeout(timeout, request)
        .await
        .map_err(|_| FetchError::Timeout(timeout))??;

    let outcome = parse_entries(&bytes)?;
    if outcome.skipped > 0 {
        tracing::warn!(
            url = %url,
            skipped = outcome.skipped,
            "Feed items without a link skipped"
        );
    }
    tracing::debug!(url = %url, entries = outcome.entries.len(), "Fetched feed");

    Ok(outcome.entries)
}

async fn read_capped(response: reqwest::Response, limit: usize) -> Result<Vec<u8>, FetchError> {
    // Fast path: trust Content-Length when the server sends one
    if let Some(len) = response.content_length() {
        if len as usize > limit {
            return Err(FetchError::ResponseTooLarge);
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        if bytes.len().saturating_add(chunk.len()) > limit {
            return Err(FetchError::ResponseTooLarge);
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(bytes)
}
