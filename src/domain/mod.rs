//! Domain and hostname normalization.
//!
//! This module provides the membership rules that decide which names from a
//! certificate transparency record belong to the queried domain.
//!
//! Key functions:
//! - `Domain::parse()` - Trims and lowercases a queried domain
//! - `normalize_hostname()` - Normalizes one candidate name and checks membership
//! - `extract_hostnames()` - Splits a `name_value` field and collects its members
//!
//! Matching is a literal string suffix check, not DNS-aware: a name is kept when
//! it equals the domain or ends with `.<domain>`.

use std::collections::BTreeSet;
use std::fmt;

use crate::config::{NAME_VALUE_SEPARATORS, WILDCARD_PREFIX};

/// Deduplicated hostnames for one domain, iterated in lexicographic order.
pub type ResultSet = BTreeSet<String>;

/// A queried root domain, trimmed and lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Domain(String);

impl Domain {
    /// Parses a domain from user input. Returns `None` for blank input.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if `hostname` is the domain itself or one of its subdomains.
    ///
    /// `hostname` is expected to be normalized already.
    pub fn contains(&self, hostname: &str) -> bool {
        hostname == self.0
            || hostname
                .strip_suffix(self.0.as_str())
                .is_some_and(|prefix| prefix.ends_with('.'))
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Options controlling hostname normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostnameFilter {
    /// Remove a leading `*.` before the membership check.
    pub strip_wildcards: bool,
}

/// Normalizes one candidate name and returns it if it belongs to `domain`.
///
/// The token is trimmed and lowercased. With `strip_wildcards`, a leading `*.`
/// is removed first; otherwise wildcard names are kept literally.
pub fn normalize_hostname(token: &str, domain: &Domain, filter: HostnameFilter) -> Option<String> {
    let mut hostname = token.trim().to_lowercase();
    if filter.strip_wildcards {
        if let Some(rest) = hostname.strip_prefix(WILDCARD_PREFIX) {
            hostname = rest.to_string();
        }
    }

    if hostname.is_empty() || !domain.contains(&hostname) {
        return None;
    }
    Some(hostname)
}

/// Splits a `name_value` field on newlines and commas and inserts every member
/// of `domain` into `results`.
///
/// Returns the number of names newly added to the set.
pub fn extract_hostnames(
    name_value: &str,
    domain: &Domain,
    filter: HostnameFilter,
    results: &mut ResultSet,
) -> usize {
    let mut added = 0;
    for hostname in name_value
        .split(NAME_VALUE_SEPARATORS)
        .filter_map(|token| normalize_hostname(token, domain, filter))
    {
        if results.insert(hostname) {
            added += 1;
        }
    }
    added
}
