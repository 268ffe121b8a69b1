//! HTTP client creation and configuration utilities

use crate::constants::request_headers;
use reqwest::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderName, HeaderValue, ORIGIN, REFERER};
use std::time::Duration;

/// Creates the HTTP client used for every provider request.
///
/// stats.nba.com stalls on requests that do not look like they come from a
/// browser on nba.com, so the client carries a fixed set of default headers.
///
/// # Arguments
/// * `timeout_seconds` - Total request timeout
///
/// # Returns
/// * `Result<Client, reqwest::Error>` - A configured reqwest HTTP client or error
pub fn create_http_client_with_timeout(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .user_agent(request_headers::USER_AGENT)
        .default_headers(default_headers())
        .build()
}

fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(request_headers::ACCEPT));
    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_static(request_headers::ACCEPT_LANGUAGE),
    );
    headers.insert(ORIGIN, HeaderValue::from_static(request_headers::ORIGIN));
    headers.insert(REFERER, HeaderValue::from_static(request_headers::REFERER));
    headers.insert(
        HeaderName::from_static(request_headers::STATS_ORIGIN_NAME),
        HeaderValue::from_static(request_headers::STATS_ORIGIN),
    );
    headers.insert(
        HeaderName::from_static(request_headers::STATS_TOKEN_NAME),
        HeaderValue::from_static(request_headers::STATS_TOKEN),
    );
    headers
}

/// Creates an HTTP client for testing with default timeout
#[cfg(test)]
pub fn create_test_http_client() -> Client {
    create_http_client_with_timeout(crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS)
        .expect("Failed to create test HTTP client")
}
