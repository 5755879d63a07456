//! subcrt library: subdomain discovery from certificate transparency logs
//!
//! This library queries a certificate transparency search service (crt.sh by
//! default) for every certificate issued under a domain and extracts the set of
//! subdomains named in them. Each domain gets one GET request, retried with a
//! fixed delay on failure, and the resulting names are normalized, filtered to
//! the domain and deduplicated.
//!
//! # Example
//!
//! ```no_run
//! use subcrt::{Config, Input, run_scan};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     input: Input::Domain("example.com".to_string()),
//!     ..Default::default()
//! };
//!
//! let report = run_scan(config).await?;
//! println!("Found {} subdomains across {} domains",
//!          report.total_subdomains, report.domains_processed);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

mod app;
pub mod config;
mod domain;
mod error_handling;
mod fetch;
pub mod initialization;
mod utils;

// Re-export public API
pub use app::Presenter;
pub use config::{Config, Input, LogFormat, LogLevel, Opt, RetryPolicy};
pub use domain::{Domain, HostnameFilter, ResultSet};
pub use error_handling::{
    ConfigError, ErrorType, FetchError, InitializationError, InputError, OutputError,
    ProcessingStats,
};
pub use fetch::{FetchOutcome, SubdomainFetcher};
pub use run::{run_scan, run_scan_with_output, ScanReport};

// Internal run module (contains the main scanning logic)
mod run {
    use anyhow::{Context, Result};
    use std::io::Write;
    use std::path::PathBuf;
    use std::sync::Arc;
    use std::time::Instant;

    use log::{error, info, warn};

    use crate::app::{
        output_path, print_error_statistics, print_results, print_scan_summary,
        resolve_domains, save_to_file, Presenter,
    };
    use crate::config::Config;
    use crate::domain::ResultSet;
    use crate::error_handling::ProcessingStats;
    use crate::fetch::SubdomainFetcher;

    /// Results of a subdomain scanning run.
    ///
    /// Contains summary statistics about the completed scan.
    #[derive(Debug, Clone, Default)]
    pub struct ScanReport {
        /// Number of domains in the work list
        pub domains_processed: usize,
        /// Number of domains with at least one subdomain
        pub domains_with_results: usize,
        /// Number of domains for which every attempt failed
        pub domains_failed: usize,
        /// Unique subdomains across all domains of the run
        pub total_subdomains: usize,
        /// Result files written, in processing order
        pub files_written: Vec<PathBuf>,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs a subdomain scan with the provided configuration.
    ///
    /// This is the main entry point for the library. Print-mode results go to
    /// stdout; see [`run_scan_with_output`] to redirect them.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The input file cannot be read
    /// - The HTTP client cannot be built or the endpoint is invalid
    ///
    /// Failed fetches and failed file writes are logged and never returned.
    pub async fn run_scan(config: Config) -> Result<ScanReport> {
        let mut stdout = std::io::stdout();
        run_scan_with_output(config, &mut stdout).await
    }

    /// Runs a subdomain scan, writing print-mode results to `out`.
    ///
    /// Domains are processed sequentially in input order. The whole work list is
    /// resolved before the first request is sent.
    ///
    /// # Errors
    ///
    /// Same as [`run_scan`].
    pub async fn run_scan_with_output<W: Write>(
        config: Config,
        out: &mut W,
    ) -> Result<ScanReport> {
        let start_time = Instant::now();

        let domains = resolve_domains(&config.input).await?;
        info!("Total domains to scan: {}", domains.len());

        let error_stats = Arc::new(ProcessingStats::new());
        let fetcher = SubdomainFetcher::from_config(&config, Arc::clone(&error_stats))
            .context("Failed to initialize subdomain fetcher")?;

        if config.output.is_some() && domains.len() > 1 && !config.print {
            warn!(
                "--output is ignored when scanning {} domains; using derived file names",
                domains.len()
            );
        }

        let presenter = Presenter::detect(config.color);
        let mut report = ScanReport {
            domains_processed: domains.len(),
            ..Default::default()
        };
        let mut all_subdomains = ResultSet::new();

        for domain in &domains {
            let outcome = fetcher.fetch(domain, &config.retry).await;
            if !outcome.succeeded {
                report.domains_failed += 1;
            }

            let subdomains = outcome.subdomains;
            if subdomains.is_empty() {
                warn!("No subdomains found for {}", domain);
                continue;
            }
            report.domains_with_results += 1;

            if config.print {
                if let Err(e) = print_results(out, &presenter, domain, &subdomains) {
                    error!("{}", e);
                }
            } else {
                let path = output_path(
                    config.output.as_deref(),
                    &config.output_dir,
                    domain,
                    domains.len(),
                );
                match save_to_file(&path, &subdomains) {
                    Ok(()) => {
                        info!(
                            "Saved {} subdomains for {} to: {}",
                            subdomains.len(),
                            domain,
                            path.display()
                        );
                        report.files_written.push(path);
                    }
                    Err(e) => error!("{}", e),
                }
            }

            all_subdomains.extend(subdomains);
        }

        report.total_subdomains = all_subdomains.len();
        report.elapsed_seconds = start_time.elapsed().as_secs_f64();

        print_error_statistics(&error_stats);
        print_scan_summary(
            report.domains_processed,
            report.domains_with_results,
            report.domains_failed,
            report.total_subdomains,
            report.elapsed_seconds,
        );

        Ok(report)
    }
}
