//! Error type definitions.
//!
//! This module defines all error types and failure categories used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use reqwest::StatusCode;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The configured search endpoint is not a valid absolute URL.
    #[error("Invalid search endpoint '{endpoint}': {source}")]
    InvalidEndpointError {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },
}

/// Errors turning CLI options into a library configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Either --domain or --file is required")]
    MissingInput,

    #[error("--domain and --file cannot be used together")]
    ConflictingInput,

    #[error("Domain must not be empty")]
    EmptyDomain,
}

/// Failure of a single fetch attempt. Every variant is retried.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Network-level failure: connect, timeout, TLS, request construction.
    #[error("Request failed: {0}")]
    Request(#[from] ReqwestError),

    /// The service answered with a non-success status.
    #[error("Unexpected HTTP status: {0}")]
    Status(StatusCode),

    /// The response body could not be read.
    #[error("Failed to read response body: {0}")]
    Body(#[source] ReqwestError),

    /// The body was not a JSON array of certificate records.
    #[error("Malformed JSON response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Error reading the domain list. Fatal for the run.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Error reading file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Error writing one domain's results. Only that domain is affected.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Error saving to file {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error writing results to stdout: {0}")]
    Stdout(#[source] std::io::Error),
}

/// Categories of failed fetch attempts, counted for the end-of-run statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // Network errors
    HttpRequestTimeoutError,
    HttpRequestConnectError,
    HttpRequestRequestError,
    HttpRequestBodyError,
    HttpRequestOtherError,
    // Status errors
    HttpRequestTooManyRequests, // 429, crt.sh throttling
    HttpRequestServerError,     // 5xx, crt.sh is frequently overloaded
    HttpRequestClientError,     // other 4xx
    HttpRequestStatusError,     // anything else that is not 2xx
    // Payload errors
    ResponseDecodeError,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::HttpRequestTooManyRequests => "Too many requests (429)",
            ErrorType::HttpRequestServerError => "Server error (5xx)",
            ErrorType::HttpRequestClientError => "Client error (4xx)",
            ErrorType::HttpRequestStatusError => "Unexpected HTTP status",
            ErrorType::ResponseDecodeError => "Malformed JSON response",
        }
    }
}
