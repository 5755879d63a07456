//! HTTP client initialization.
//!
//! This module provides functions to initialize the HTTP client used against the
//! certificate transparency search service.

use std::time::Duration;

use reqwest::{ClientBuilder, Url};

use crate::config::{Config, TCP_CONNECT_TIMEOUT_SECS};
use crate::error_handling::InitializationError;

/// Initializes the HTTP client with default settings.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from config
/// - Overall request timeout from config (a hung request counts as a failed attempt)
/// - TCP connect timeout capped at `TCP_CONNECT_TIMEOUT_SECS`
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let timeout = Duration::from_secs(config.timeout_seconds);
    let connect_timeout = Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS).min(timeout);
    let client = ClientBuilder::new()
        .timeout(timeout)
        .connect_timeout(connect_timeout)
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}

/// Parses the configured search endpoint.
///
/// # Errors
///
/// Returns `InitializationError::InvalidEndpointError` if the endpoint is not an absolute URL.
pub fn parse_endpoint(endpoint: &str) -> Result<Url, InitializationError> {
    Url::parse(endpoint).map_err(|source| InitializationError::InvalidEndpointError {
        endpoint: endpoint.to_string(),
        source,
    })
}
