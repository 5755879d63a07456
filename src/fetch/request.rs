//! Query URL construction and the HTTP round trip.

use log::debug;
use reqwest::Url;

use crate::config::{QUERY_OUTPUT_JSON, QUERY_PARAM_OUTPUT, QUERY_PARAM_SEARCH};
use crate::domain::Domain;
use crate::error_handling::FetchError;

/// Builds the search URL for every certificate whose identity matches `%.<domain>`.
///
/// The `%` wildcard is percent-encoded, so the query reads
/// `?q=%25.<domain>&output=json`. Query parameters already present on the
/// endpoint are preserved.
pub(crate) fn build_query_url(endpoint: &Url, domain: &Domain) -> Url {
    let mut url = endpoint.clone();
    url.query_pairs_mut()
        .append_pair(QUERY_PARAM_SEARCH, &format!("%.{}", domain))
        .append_pair(QUERY_PARAM_OUTPUT, QUERY_OUTPUT_JSON);
    url
}

/// Sends one GET request and returns the body of a successful response.
///
/// # Errors
///
/// - `FetchError::Request` for network failures, including the client timeout
/// - `FetchError::Status` for any non-2xx status
/// - `FetchError::Body` if the body cannot be read
pub(crate) async fn send_query(client: &reqwest::Client, url: Url) -> Result<String, FetchError> {
    debug!("GET {}", url);
    let response = client.get(url).send().await?;

    let status = response.status();
    debug!("HTTP status: {}", status);
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    response.text().await.map_err(FetchError::Body)
}
