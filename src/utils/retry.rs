//! Retry strategy.

use std::time::Duration;

use tokio_retry::strategy::FixedInterval;

use crate::config::RetryPolicy;

/// Creates a fixed-interval retry strategy for a policy.
///
/// `tokio_retry::Retry` makes one initial attempt and then one more attempt per
/// item yielded by the strategy, sleeping for that item's duration first. The
/// iterator is therefore limited to `max_attempts - 1` pauses of `delay` each:
/// no sleep happens after the final attempt.
pub fn retry_strategy(policy: &RetryPolicy) -> impl Iterator<Item = Duration> {
    let pauses = policy.max_attempts().saturating_sub(1) as usize;
    FixedInterval::new(policy.delay()).take(pauses)
}
