use super::*;
use std::error::Error as StdError;

#[test]
fn test_api_error() {
    let error = Error::ApiError();

    // Test error message
    assert_eq!(error.to_string(), "API request failed");

    // Test error source
    assert!(error.source().is_none());
}

#[test]
fn test_auth_error() {
    let error = Error::AuthError("Invalid credentials".to_string());

    // Test error message
    assert_eq!(
        error.to_string(),
        "Failed to authenticate or initialize GitHub client: Invalid credentials"
    );

    // Test error source
    assert!(error.source().is_none());
}

#[test]
fn test_deserialization_error_carries_source() {
    let json_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    let error = Error::from(json_error);

    assert!(error
        .to_string()
        .starts_with("Failed to deserialize GitHub response"));
    assert!(error.source().is_some());
}

#[test]
fn test_invalid_fork_url_error() {
    let error = Error::InvalidForkUrl("https://github.com/".to_string());

    // Test error message
    assert_eq!(
        error.to_string(),
        "Fork URL does not identify an owner/repository pair: https://github.com/"
    );

    // Test error source
    assert!(error.source().is_none());
}

#[test]
fn test_invalid_response_error() {
    let error = Error::InvalidResponse;

    // Test error message
    assert_eq!(error.to_string(), "Invalid response format");

    // Test error source
    assert!(error.source().is_none());
}

#[test]
fn test_not_found_error() {
    let error = Error::NotFound;

    // Test error message
    assert_eq!(error.to_string(), "Resource not found");

    // Test error source
    assert!(error.source().is_none());
}

#[test]
fn test_rate_limit_exceeded_error() {
    let error = Error::RateLimitExceeded;

    // Test error message
    assert_eq!(error.to_string(), "Rate limit exceeded");

    // Test error source
    assert!(error.source().is_none());
}

#[test]
fn test_error_is_send_sync() {
    // This test verifies that Error implements Send and Sync traits
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
}
