use crate::config::Config;
use std::time::Duration;
use thiserror::Error;

/// Errors from a single feed retrieval attempt.
///
/// One attempt per pipeline run — there is no retry here. The caller maps
/// any of these to the rendered fallback card.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level error (DNS, connection, TLS, etc.)
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// HTTP response with non-2xx status code
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    /// Request exceeded the configured timeout
    #[error("Request timed out")]
    Timeout,
}

/// Builds the relay request URL: the percent-encoded feed URL appended to
/// the relay prefix. The feed URL travels as a query parameter, so it is
/// encoded with form-urlencoding rules.
pub fn request_url(relay_prefix: &str, feed_url: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(feed_url.as_bytes()).collect();
    format!("{relay_prefix}{encoded}")
}

/// Fetches the raw feed text through the CORS relay.
///
/// Issues exactly one GET and returns the body only for a 2xx response.
/// The whole request is bounded by `config.fetch_timeout_secs`.
pub async fn fetch_feed(client: &reqwest::Client, config: &Config) -> Result<String, FetchError> {
    let url = request_url(&config.relay_prefix, &config.feed_url);

    let response = tokio::time::timeout(
        Duration::from_secs(config.fetch_timeout_secs),
        client.get(&url).send(),
    )
    .await
    .map_err(|_| FetchError::Timeout)?
    .map_err(FetchError::Network)?;

    if !response.status().is_success() {
        return Err(FetchError::HttpStatus(response.status().as_u16()));
    }

    response.text().await.map_err(FetchError::Network)
}
