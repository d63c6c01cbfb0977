//! HTTP fetcher for category result pages
//!
//! This module handles all HTTP requests for the harvester:
//! - Building the shared HTTP client
//! - GET requests for category pages
//! - Error classification at the fetch boundary
//!
//! There are no retries anywhere; a failed category is the caller's problem.

use reqwest::{Client, StatusCode};
use scraper::Html;
use std::time::Duration;
use thiserror::Error;

/// Errors produced at the fetch boundary
///
/// Both variants are terminal for their category: the orchestrator logs
/// them and moves on to the next URL.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with something other than HTTP 200
    #[error("Access failed for {url} with status {status}")]
    Status { url: String, status: u16 },

    /// Transport-level fault (DNS, timeout, connection reset, body read)
    #[error("Failed to retrieve {url}: {source}")]
    Transport { url: String, source: reqwest::Error },
}

/// Builds the HTTP client shared across all category requests
///
/// # Arguments
///
/// * `timeout` - Per-request timeout, applied to connect and total time
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    let user_agent = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .connect_timeout(timeout)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches one category page and parses it into a queryable document
///
/// Any non-200 status and any transport fault is a [`FetchError`]; the
/// document is only returned for a fully read 200 response.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `url` - The absolute category URL to fetch
pub async fn fetch_page(client: &Client, url: &str) -> Result<Html, FetchError> {
    tracing::info!("Attempting to access {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;

    Ok(Html::parse_document(&body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let client = build_http_client(Duration::from_secs(10));
        assert!(client.is_ok());
    }

    #[test]
    fn test_status_error_message_names_url_and_code() {
        let error = FetchError::Status {
            url: "https://www.olx.uz/transport/gruzoviki/".to_string(),
            status: 503,
        };
        let message = error.to_string();
        assert!(message.contains("gruzoviki"));
        assert!(message.contains("503"));
    }
}
