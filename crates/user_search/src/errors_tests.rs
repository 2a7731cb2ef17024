use super::*;
use std::error::Error as StdError;

#[test]
fn test_invalid_query_error() {
    let error = Error::InvalidQuery("search term must not be blank".to_string());

    assert_eq!(
        error.to_string(),
        "Invalid search query: search term must not be blank"
    );
    assert!(error.source().is_none());
    assert!(!error.is_rate_limited());
    assert_eq!(error.status(), None);
}

#[test]
fn test_rate_limited_error() {
    let error = Error::RateLimited {
        retry_after: Some(Duration::from_secs(30)),
    };

    assert_eq!(error.to_string(), "Rate limit exceeded");
    assert!(error.is_rate_limited());
    assert_eq!(error.status(), None);
}

#[test]
fn test_transport_error_carries_status() {
    let error = Error::transport(Some(502), "HTTP 502 Bad Gateway");

    assert_eq!(
        error.to_string(),
        "Request to the directory API failed: HTTP 502 Bad Gateway"
    );
    assert_eq!(error.status(), Some(502));
    assert!(!error.is_rate_limited());
}

#[test]
fn test_transport_error_without_status() {
    let error = Error::transport(None, "connection refused");

    assert_eq!(error.status(), None);
}

#[test]
fn test_configuration_error() {
    let error = Error::Configuration("page size must be between 1 and 100".to_string());

    assert_eq!(
        error.to_string(),
        "Invalid client configuration: page size must be between 1 and 100"
    );
}

#[test]
fn test_error_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
}
