//! Utility functions.
//!
//! This module provides:
//! - The fixed-interval retry strategy derived from a `RetryPolicy`

mod retry;

pub use retry::retry_strategy;
