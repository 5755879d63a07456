//! Decoding of the search service's JSON response.

use serde::Deserialize;

use crate::domain::{extract_hostnames, Domain, HostnameFilter, ResultSet};
use crate::error_handling::FetchError;

/// One certificate record returned by crt.sh.
///
/// Only `name_value` is used; it holds the certificate's identities separated by
/// newlines (and occasionally commas). Other fields are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct CrtShEntry {
    #[serde(default)]
    name_value: Option<String>,
}

/// Parses a response body as a JSON array of certificate records.
///
/// An empty array is a valid, successful answer.
///
/// # Errors
///
/// Returns `FetchError::Decode` if the body is not a JSON array of objects.
pub(crate) fn parse_entries(body: &str) -> Result<Vec<CrtShEntry>, FetchError> {
    Ok(serde_json::from_str(body)?)
}

/// Collects the members of `domain` from every record's `name_value`.
pub(crate) fn collect_hostnames(
    entries: &[CrtShEntry],
    domain: &Domain,
    filter: HostnameFilter,
) -> ResultSet {
    let mut results = ResultSet::new();
    for name_value in entries.iter().filter_map(|e| e.name_value.as_deref()) {
        extract_hostnames(name_value, domain, filter, &mut results);
    }
    results
}
