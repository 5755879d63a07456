//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgGroup, Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_DELAY_SECS, DEFAULT_ENDPOINT, DEFAULT_RETRIES, DEFAULT_USER_AGENT,
    REQUEST_TIMEOUT_SECS,
};
use crate::error_handling::ConfigError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace). `Debug` adds per-attempt request detail.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options.
///
/// Exactly one of `--domain` or `--file` must be given; clap enforces this via
/// the `input` argument group.
///
/// # Examples
///
/// ```bash
/// # Single domain, results written to subcrt-example.com.txt
/// subcrt --domain example.com
///
/// # Single domain, explicit output file
/// subcrt --domain example.com --output results.txt
///
/// # List of domains, printed instead of saved
/// subcrt --file domains.txt --print
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "subcrt",
    version,
    about = "subcrt - Minimal subdomain discovery using crt.sh"
)]
#[command(group(ArgGroup::new("input").required(true).args(["domain", "file"])))]
pub struct Opt {
    /// Single domain to scan
    #[arg(short, long)]
    pub domain: Option<String>,

    /// File containing list of domains (one per line)
    #[arg(short, long, value_parser)]
    pub file: Option<PathBuf>,

    /// Output file name (only honored when a single domain is processed)
    #[arg(short, long, value_parser)]
    pub output: Option<PathBuf>,

    /// Directory for derived per-domain output files
    #[arg(long, value_parser, default_value = ".")]
    pub output_dir: PathBuf,

    /// Number of attempts per domain
    #[arg(long, default_value_t = DEFAULT_RETRIES, value_parser = clap::value_parser!(u32).range(1..))]
    pub retries: u32,

    /// Delay between attempts (seconds)
    #[arg(long, default_value_t = DEFAULT_DELAY_SECS)]
    pub delay: u64,

    /// Print results to stdout instead of writing files
    #[arg(long)]
    pub print: bool,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = REQUEST_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_seconds: u64,

    /// Certificate transparency search endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Strip a leading `*.` from wildcard certificate names before matching
    #[arg(long)]
    pub strip_wildcards: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Do not print the startup banner
    #[arg(long)]
    pub no_banner: bool,
}

/// Where the list of domains comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A single domain given on the command line
    Domain(String),
    /// A text file with one domain per line
    File(PathBuf),
}

/// Immutable retry configuration shared by every domain of a run.
///
/// `max_attempts` counts the initial attempt, so it is never below 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_RETRIES, Duration::from_secs(DEFAULT_DELAY_SECS))
    }
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically or converted from [`Opt`].
///
/// # Examples
///
/// ```no_run
/// use subcrt::{Config, Input};
///
/// let config = Config {
///     input: Input::Domain("example.com".to_string()),
///     print: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Domain or domain list to scan
    pub input: Input,

    /// Explicit output file (single-domain runs only)
    pub output: Option<PathBuf>,

    /// Directory for derived per-domain files
    pub output_dir: PathBuf,

    /// Print results to stdout instead of writing files
    pub print: bool,

    /// Attempts and delay per domain
    pub retry: RetryPolicy,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// Certificate transparency search endpoint
    pub endpoint: String,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// De-star wildcard names before the membership check
    pub strip_wildcards: bool,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Colored terminal output
    pub color: bool,

    /// Print the startup banner
    pub banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: Input::File(PathBuf::from("domains.txt")),
            output: None,
            output_dir: PathBuf::from("."),
            print: false,
            retry: RetryPolicy::default(),
            timeout_seconds: REQUEST_TIMEOUT_SECS,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            strip_wildcards: false,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            color: true,
            banner: true,
        }
    }
}

impl TryFrom<Opt> for Config {
    type Error = ConfigError;

    fn try_from(opt: Opt) -> Result<Self, Self::Error> {
        let input = match (opt.domain, opt.file) {
            (Some(_), Some(_)) => return Err(ConfigError::ConflictingInput),
            (None, None) => return Err(ConfigError::MissingInput),
            (Some(domain), None) => {
                let trimmed = domain.trim();
                if trimmed.is_empty() {
                    return Err(ConfigError::EmptyDomain);
                }
                Input::Domain(trimmed.to_string())
            }
            (None, Some(file)) => Input::File(file),
        };

        Ok(Self {
            input,
            output: opt.output,
            output_dir: opt.output_dir,
            print: opt.print,
            retry: RetryPolicy::new(opt.retries, Duration::from_secs(opt.delay)),
            timeout_seconds: opt.timeout_seconds,
            endpoint: opt.endpoint,
            user_agent: opt.user_agent,
            strip_wildcards: opt.strip_wildcards,
            log_level: opt.log_level,
            log_format: opt.log_format,
            color: !opt.no_color,
            banner: !opt.no_banner,
        })
    }
}
