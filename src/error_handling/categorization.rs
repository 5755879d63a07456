//! Error categorization.
//!
//! This module maps failed fetch attempts onto [`ErrorType`] categories.

use reqwest::StatusCode;

use super::stats::ProcessingStats;
use super::types::{ErrorType, FetchError};

/// Categorizes a `reqwest::Error` into an `ErrorType`.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if let Some(status) = error.status() {
        return categorize_status(status);
    }

    if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_request() {
        ErrorType::HttpRequestRequestError
    } else if error.is_body() {
        ErrorType::HttpRequestBodyError
    } else if error.is_decode() {
        ErrorType::ResponseDecodeError
    } else {
        ErrorType::HttpRequestOtherError
    }
}

/// Categorizes a non-success HTTP status.
pub fn categorize_status(status: StatusCode) -> ErrorType {
    match status.as_u16() {
        429 => ErrorType::HttpRequestTooManyRequests,
        _ if status.is_server_error() => ErrorType::HttpRequestServerError,
        _ if status.is_client_error() => ErrorType::HttpRequestClientError,
        _ => ErrorType::HttpRequestStatusError,
    }
}

/// Categorizes one failed fetch attempt.
pub fn categorize_fetch_error(error: &FetchError) -> ErrorType {
    match error {
        FetchError::Request(e) => categorize_reqwest_error(e),
        FetchError::Status(status) => categorize_status(*status),
        // A timeout can also fire while the body is streaming
        FetchError::Body(e) if e.is_timeout() => ErrorType::HttpRequestTimeoutError,
        FetchError::Body(_) => ErrorType::HttpRequestBodyError,
        FetchError::Decode(_) => ErrorType::ResponseDecodeError,
    }
}

/// Records one failed fetch attempt in the processing statistics.
pub fn update_error_stats(stats: &ProcessingStats, error: &FetchError) {
    stats.increment_error(categorize_fetch_error(error));
}
