//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions for each stage of a run (configuration, initialization,
//!   input, fetch, output)
//! - Categorization of failed fetch attempts
//! - Processing statistics tracking per error category
//!
//! Only input and initialization errors abort a run. Fetch errors are retried and
//! then degrade to an empty result; output errors lose one domain's result.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::update_error_stats;
pub use stats::ProcessingStats;
pub use types::{ConfigError, ErrorType, FetchError, InitializationError, InputError, OutputError};
