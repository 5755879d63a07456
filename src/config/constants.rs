//! Configuration constants.
//!
//! This module defines all configuration constants used throughout the application,
//! including defaults for the CLI, request timeouts, and output naming.

/// Certificate transparency search service queried by default.
pub const DEFAULT_ENDPOINT: &str = "https://crt.sh/";

/// Default number of attempts per domain (initial attempt included).
pub const DEFAULT_RETRIES: u32 = 3;
/// Default pause between attempts in seconds.
pub const DEFAULT_DELAY_SECS: u64 = 5;

// Network operation timeouts
/// Per-request timeout in seconds
/// crt.sh can be slow for large domains, so this stays well above a typical page fetch
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Default User-Agent string for requests to the search service.
pub const DEFAULT_USER_AGENT: &str = concat!("subcrt/", env!("CARGO_PKG_VERSION"));

// Output naming
/// Prefix of the per-domain result file (`subcrt-<domain>.txt`)
pub const OUTPUT_FILE_PREFIX: &str = "subcrt-";
/// Extension of the per-domain result file
pub const OUTPUT_FILE_EXTENSION: &str = "txt";

// Query parameters understood by crt.sh
/// Search term parameter (`%.<domain>`)
pub const QUERY_PARAM_SEARCH: &str = "q";
/// Output format parameter
pub const QUERY_PARAM_OUTPUT: &str = "output";
/// Output format value selecting a JSON array
pub const QUERY_OUTPUT_JSON: &str = "json";

/// Separators that may split several hostnames inside one `name_value` field.
pub const NAME_VALUE_SEPARATORS: &[char] = &['\n', ','];
/// Prefix of wildcard certificate names
pub const WILDCARD_PREFIX: &str = "*.";
