//! End-of-run statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::app::presenter::plural;
use crate::error_handling::{ErrorType, ProcessingStats};

/// Prints a one-line summary of the run.
///
/// Works with both plain and JSON log formats (`log::info!` handles formatting).
pub fn print_scan_summary(
    domains_processed: usize,
    domains_with_results: usize,
    domains_failed: usize,
    total_subdomains: usize,
    elapsed_seconds: f64,
) {
    info!(
        "✅ Processed {} domain{} ({} with results, {} unreachable) in {:.1}s",
        domains_processed,
        plural(domains_processed),
        domains_with_results,
        domains_failed,
        elapsed_seconds
    );
    info!(
        "Found {} unique subdomain{} in total",
        total_subdomains,
        plural(total_subdomains)
    );
}

/// Prints failed-attempt counts per error category to the log.
pub fn print_error_statistics(error_stats: &ProcessingStats) {
    let total_errors = error_stats.total_errors();
    if total_errors == 0 {
        return;
    }

    info!("Failed attempt counts ({} total):", total_errors);
    for error_type in ErrorType::iter() {
        let count = error_stats.get_error_count(error_type);
        if count > 0 {
            info!("   {}: {}", error_type.as_str(), count);
        }
    }
}
