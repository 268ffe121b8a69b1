//! Single-shot HTTP fetching with error classification.
//!
//! Requests are made exactly once. Any failure is mapped to a specific
//! `AppError` and returned; nothing is retried.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::data_fetcher::models::{RecordSet, StatsResponse};
use crate::error::AppError;

/// Fetches `url` once and decodes the body as `T`.
#[instrument(skip(client))]
pub(super) async fn fetch<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    let response = match client.get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return if e.is_timeout() {
                Err(AppError::network_timeout(url))
            } else if e.is_connect() {
                Err(AppError::network_connection(url, e.to_string()))
            } else {
                Err(AppError::ApiFetch(e))
            };
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            404 => AppError::api_not_found(url),
            429 => AppError::api_rate_limit(reason, url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
            _ => AppError::api_server_error(status_code, reason, url),
        });
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());

    decode_body(&response_text, url)
}

/// Decodes a response body, telling empty bodies, non-JSON and JSON of the
/// wrong shape apart.
pub(super) fn decode_body<T: DeserializeOwned>(body: &str, url: &str) -> Result<T, AppError> {
    match serde_json::from_str::<T>(body) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);
            error!(
                "Response text (first 200 chars): {}",
                &body.chars().take(200).collect::<String>()
            );

            if body.trim().is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if !body.trim_start().starts_with('{') && !body.trim_start().starts_with('[') {
                Err(AppError::api_malformed_json("Response is not valid JSON", url))
            } else {
                Err(AppError::api_unexpected_structure(e.to_string(), url))
            }
        }
    }
}

/// Fetches a stats endpoint and returns its primary record set.
pub(super) async fn fetch_record_set(client: &Client, url: &str) -> Result<RecordSet, AppError> {
    let response: StatsResponse = fetch(client, url).await?;
    let set = response
        .into_primary()
        .ok_or_else(|| AppError::api_no_data("Response contains no result sets", url))?;
    debug!("Record set '{}' has {} rows", set.name, set.len());
    Ok(set)
}
