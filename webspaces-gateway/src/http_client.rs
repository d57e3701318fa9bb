//! Generic HTTP client tools
//!
//! Reusable request processing shared by the reqwest transport and the
//! endpoint stubs.
//!
//! # design principles
//! - **One request, one outcome** - a call either yields a response body or exactly one error
//! - **Unified HTTP processing flow** - sending requests, logging, and reading responses
//! - **At-most-once for writes** - only idempotent `GET` requests are ever retried

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::GatewayError;
use crate::transport::Transport;
use crate::types::{RawResponse, RemoteRequest};
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns status code and response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor (URL, headers, body)
    /// * `method_name` - request method name (such as "GET", "POST", used for logs)
    /// * `endpoint` - endpoint path (for logging and error context)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` for any status below 400
    /// * `Err(GatewayError::Http)` for status >= 400, with the body's `message` if present
    /// * `Err(GatewayError::NetworkError | Timeout)` when no response was received
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        endpoint: &str,
    ) -> Result<(u16, String), GatewayError> {
        log::debug!("[gateway] {method_name} {endpoint}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                GatewayError::Timeout {
                    endpoint: endpoint.to_string(),
                    detail: e.to_string(),
                }
            } else {
                GatewayError::NetworkError {
                    endpoint: endpoint.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[gateway] {endpoint} Response Status: {status_code}");

        let response_text = response.text().await.map_err(|e| {
            if e.is_timeout() {
                GatewayError::Timeout {
                    endpoint: endpoint.to_string(),
                    detail: e.to_string(),
                }
            } else {
                GatewayError::NetworkError {
                    endpoint: endpoint.to_string(),
                    detail: format!("Failed to read response body: {e}"),
                }
            }
        })?;

        log::debug!(
            "[gateway] {endpoint} Response Body: {}",
            truncate_for_log(&response_text)
        );

        if status_code >= 400 {
            let message = extract_error_message(&response_text);
            log::warn!("[gateway] {endpoint} HTTP {status_code}: {message:?}");
            return Err(GatewayError::Http {
                endpoint: endpoint.to_string(),
                status: status_code,
                message,
            });
        }

        Ok((status_code, response_text))
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(GatewayError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str, endpoint: &str) -> Result<T, GatewayError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[gateway] {endpoint} JSON parse failed: {e}");
            log::error!(
                "[gateway] {endpoint} Raw response: {}",
                truncate_for_log(response_text)
            );
            GatewayError::ParseError {
                endpoint: endpoint.to_string(),
                detail: e.to_string(),
            }
        })
    }
}

/// Send a request, retrying transient failures for idempotent methods only
///
/// `POST` requests are always sent exactly once regardless of `max_retries`,
/// so actions that mutate server state never produce duplicate entries.
///
/// # Retry strategy
/// - Only errors with [`GatewayError::is_retryable`] are retried
/// - Exponential backoff: 100ms, 200ms, 400ms, 800ms, ... (maximum 10 seconds)
pub async fn send_with_retry(
    transport: &dyn Transport,
    request: &RemoteRequest,
    max_retries: u32,
) -> Result<RawResponse, GatewayError> {
    let max_retries = if request.method.is_idempotent() {
        max_retries
    } else {
        0
    };

    let mut attempt = 0;
    loop {
        match transport.send(request).await {
            Ok(resp) => return Ok(resp),
            Err(e) if attempt < max_retries && e.is_retryable() => {
                let delay = backoff_delay(attempt);
                log::warn!(
                    "[gateway] {} {} failed (attempt {}/{}), retrying in {:.1}s: {}",
                    request.method.as_str(),
                    request.path,
                    attempt + 1,
                    max_retries,
                    delay.as_secs_f32(),
                    e
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Pull the `message` field out of an error body, if the body is JSON and has one.
fn extract_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
}

/// Calculate exponential backoff delay
///
/// Backoff strategy: 100ms, 200ms, 400ms, 800ms, 1.6s, ...
/// Maximum delay limit is 10 seconds
fn backoff_delay(attempt: u32) -> Duration {
    let capped_attempt = attempt.min(20); // Prevent 2^attempt from overflowing
    let delay_ms = 100_u64.saturating_mul(1_u64 << capped_attempt);
    let delay_ms = delay_ms.min(10_000);
    Duration::from_millis(delay_ms)
}
