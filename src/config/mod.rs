//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (defaults, timeouts, output naming)
//! - CLI option types and parsing
//! - The library `Config` and the immutable `RetryPolicy`

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, Input, LogFormat, LogLevel, Opt, RetryPolicy};
