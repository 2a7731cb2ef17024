//! Error types for user search operations.
//!
//! The remote directory API can fail in three ways the caller is expected to
//! tell apart: the query was never valid, the API is throttling us, or the
//! request failed for some other reason. A missing resource is not an error
//! and therefore has no variant here.

use std::time::Duration;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur while searching for or enriching users.
///
/// ## Examples
///
/// ```rust,ignore
/// use user_search::Error;
///
/// match client.search(&params).await {
///     Ok(result) => println!("{} users found", result.total_count),
///     Err(Error::InvalidQuery(msg)) => eprintln!("Check your query: {msg}"),
///     Err(Error::RateLimited { .. }) => eprintln!("Rate limited, try again later"),
///     Err(err) => eprintln!("Search failed: {err}"),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The search parameters were rejected before any request was made.
    ///
    /// Raised when the primary search term is blank after trimming, or when a
    /// page number below 1 is requested.
    #[error("Invalid search query: {0}")]
    InvalidQuery(String),

    /// The remote API signalled that the request rate has been exhausted.
    ///
    /// This is never retried automatically. `retry_after` is populated when the
    /// response carried a `Retry-After` or `X-RateLimit-Reset` header.
    #[error("Rate limit exceeded")]
    RateLimited { retry_after: Option<Duration> },

    /// Any other non-success status or network-level failure.
    ///
    /// `status` is `None` when no HTTP response was received, or when a
    /// successful response carried a body that could not be decoded.
    #[error("Request to the directory API failed: {message}")]
    Transport {
        status: Option<u16>,
        message: String,
    },

    /// The client could not be constructed from the supplied configuration.
    #[error("Invalid client configuration: {0}")]
    Configuration(String),
}

impl Error {
    /// Returns `true` if the error is a rate-limit signal.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Error::RateLimited { .. })
    }

    /// Returns the HTTP status associated with the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Transport { status, .. } => *status,
            _ => None,
        }
    }

    pub(crate) fn transport(status: Option<u16>, message: impl Into<String>) -> Self {
        Error::Transport {
            status,
            message: message.into(),
        }
    }
}
