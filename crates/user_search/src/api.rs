//! Raw access to the directory API.
//!
//! Both stages need the response status and headers, not just a decoded
//! body, so requests go through `Octocrab::_get` and are classified here.

use std::time::Duration;

use chrono::Utc;
use http::{header, HeaderMap, StatusCode};
use octocrab::Octocrab;
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

use crate::errors::Error;

#[cfg(test)]
#[path = "api_tests.rs"]
mod tests;

const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";
const RATE_LIMIT_RESET: &str = "x-ratelimit-reset";

/// A response whose body has been read into memory.
#[derive(Debug)]
pub(crate) struct ApiResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl ApiResponse {
    /// Decodes the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        serde_json::from_str(&self.body).map_err(|e| {
            error!(
                status = self.status.as_u16(),
                error = %e,
                "Failed to deserialize directory API response"
            );
            Error::transport(None, format!("failed to decode response body: {e}"))
        })
    }

    /// Returns the `Link` header if present and readable.
    pub fn link_header(&self) -> Option<&str> {
        self.headers
            .get(header::LINK)
            .and_then(|value| value.to_str().ok())
    }
}

/// Issues a GET for `uri` (relative to the client's base URI).
///
/// Any response, whatever its status, is returned as `Ok`; only failures to
/// obtain a response at all are reported as `Error::Transport`.
pub(crate) async fn get(client: &Octocrab, uri: String) -> Result<ApiResponse, Error> {
    debug!(uri = %uri, "Sending request to directory API");

    let response = client._get(uri.as_str()).await.map_err(|e| {
        log_octocrab_error("Failed to send request to directory API", &e);
        Error::transport(None, describe_octocrab_error(&e))
    })?;

    let status = response.status();
    let headers = response.headers().clone();
    let body = client.body_to_string(response).await.map_err(|e| {
        log_octocrab_error("Failed to read directory API response body", &e);
        Error::transport(Some(status.as_u16()), describe_octocrab_error(&e))
    })?;

    debug!(uri = %uri, status = status.as_u16(), "Received response from directory API");

    Ok(ApiResponse {
        status,
        headers,
        body,
    })
}

/// Maps a non-success response onto the error it represents.
///
/// 403, 429, and any response reporting zero remaining requests are rate-limit
/// signals. Everything else becomes `Error::Transport` with the status.
pub(crate) fn classify_failure(response: &ApiResponse) -> Error {
    let status = response.status;
    if is_rate_limited(status, &response.headers) {
        let retry_after = retry_hint(&response.headers);
        warn!(
            status = status.as_u16(),
            retry_after_secs = retry_after.map(|d| d.as_secs()),
            "Directory API rate limit exceeded"
        );
        return Error::RateLimited { retry_after };
    }

    let message = api_message(&response.body)
        .map(|m| format!("HTTP {status}: {m}"))
        .unwrap_or_else(|| format!("HTTP {status}"));
    Error::transport(Some(status.as_u16()), message)
}

fn is_rate_limited(status: StatusCode, headers: &HeaderMap) -> bool {
    if status == StatusCode::FORBIDDEN || status == StatusCode::TOO_MANY_REQUESTS {
        return true;
    }

    headers
        .get(RATE_LIMIT_REMAINING)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok())
        == Some(0)
}

/// Extracts how long to wait before retrying.
///
/// `Retry-After` (in seconds) wins; otherwise `X-RateLimit-Reset` (epoch
/// seconds) is converted to a delay from now, clamped at zero.
pub(crate) fn retry_hint(headers: &HeaderMap) -> Option<Duration> {
    let read = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<i64>().ok())
    };

    if let Some(seconds) = read(header::RETRY_AFTER.as_str()) {
        return Some(Duration::from_secs(seconds.max(0) as u64));
    }

    read(RATE_LIMIT_RESET).map(|reset| {
        let remaining = reset - Utc::now().timestamp();
        Duration::from_secs(remaining.max(0) as u64)
    })
}

/// The `message` field GitHub-style APIs put in error bodies.
fn api_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("message")?
        .as_str()
        .map(str::to_string)
}

/// A single-line description of an octocrab error.
///
/// octocrab's `Display` appends the captured backtrace, so the message is
/// built from the `source()` chain instead.
fn describe_octocrab_error(e: &octocrab::Error) -> String {
    if let octocrab::Error::GitHub { source, .. } = e {
        return source.message.clone();
    }

    let mut causes = Vec::new();
    let mut current = std::error::Error::source(e);
    while let Some(cause) = current {
        causes.push(cause.to_string());
        current = cause.source();
    }

    if causes.is_empty() {
        e.to_string().lines().next().unwrap_or_default().trim().to_string()
    } else {
        causes.join(": ")
    }
}

fn log_octocrab_error(message: &str, e: &octocrab::Error) {
    match e {
        octocrab::Error::GitHub { source, .. } => error!(
            error_message = %source.message,
            "{}. Received an error from the directory API", message
        ),
        octocrab::Error::Uri { source, .. } => error!(
            error_message = source.to_string(),
            "{}. Failed to parse URI.", message
        ),
        octocrab::Error::UriParse { source, .. } => error!(
            error_message = source.to_string(),
            "{}. Failed to parse URI.", message
        ),
        _ => error!(error_message = e.to_string(), message),
    };
}
