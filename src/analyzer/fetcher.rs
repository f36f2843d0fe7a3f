//! HTTP fetcher implementation
//!
//! This module handles the single HTTP request made per analysis:
//! - Building the HTTP client from the optional client configuration
//! - Issuing the GET request and reading the full body
//! - Measuring the response time
//! - Error classification

use crate::config::ClientConfig;
use crate::SeoError;
use reqwest::Client;
use std::time::{Duration, Instant};

/// A successfully fetched page
#[derive(Debug)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub final_url: String,
    /// HTTP status code
    pub status_code: u16,
    /// Page body content
    pub body: String,
    /// When the request was dispatched
    pub started_at: Instant,
    /// Dispatch until the full body was received
    pub response_time: Duration,
}

/// Builds an HTTP client from the client configuration
///
/// Unset options keep reqwest's defaults: no `User-Agent` header, no request
/// timeout, and the default redirect policy.
///
/// # Arguments
///
/// * `config` - The client configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use seo_audit::analyzer::build_http_client;
/// use seo_audit::config::ClientConfig;
///
/// let config = ClientConfig {
///     user_agent: Some("SeoAudit/1.0".to_string()),
///     timeout_secs: Some(30),
///     connect_timeout_secs: None,
/// };
///
/// let client = build_http_client(&config).unwrap();
/// ```
pub fn build_http_client(config: &ClientConfig) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder().gzip(true).brotli(true);

    if let Some(user_agent) = &config.user_agent {
        builder = builder.user_agent(user_agent.as_str());
    }

    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    if let Some(secs) = config.connect_timeout_secs {
        builder = builder.connect_timeout(Duration::from_secs(secs));
    }

    builder.build()
}

/// Fetches a URL with a single GET request
///
/// The address is passed to the client unvalidated; a malformed or empty
/// address surfaces as a transport error. There is no retry.
///
/// # Errors
///
/// * `SeoError::Timeout` - The request timed out
/// * `SeoError::Status` - The server answered with a non-2xx status
/// * `SeoError::Http` - Any other transport failure (DNS, connect, body read)
///
/// Every failure is logged before it is returned.
pub async fn fetch_page(client: &Client, url: &str) -> Result<FetchedPage, SeoError> {
    let started_at = Instant::now();

    tracing::debug!("GET {}", url);

    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("Failed to fetch {}: {}", url, e);
            return Err(classify_error(url, e));
        }
    };

    let status = response.status();
    let final_url = response.url().to_string();

    if !status.is_success() {
        tracing::error!("Failed to fetch {}: HTTP status {}", url, status);
        return Err(SeoError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            tracing::error!("Failed to read body of {}: {}", url, e);
            return Err(classify_error(url, e));
        }
    };

    let response_time = started_at.elapsed();

    tracing::debug!(
        "Fetched {} ({} bytes, status {}) in {:?}",
        final_url,
        body.len(),
        status.as_u16(),
        response_time
    );

    Ok(FetchedPage {
        final_url,
        status_code: status.as_u16(),
        body,
        started_at,
        response_time,
    })
}

/// Maps a reqwest error onto the crate error type
fn classify_error(url: &str, error: reqwest::Error) -> SeoError {
    if error.is_timeout() {
        SeoError::Timeout {
            url: url.to_string(),
        }
    } else if let Some(status) = error.status() {
        SeoError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        }
    } else {
        SeoError::Http {
            url: url.to_string(),
            source: error,
        }
    }
}
