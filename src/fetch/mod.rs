//! Subdomain fetching from a certificate transparency search service.
//!
//! One domain is resolved by a single GET of `<endpoint>?q=%25.<domain>&output=json`,
//! retried with a fixed pause until it parses or the attempts run out. Exhausting
//! every attempt is not an error for the caller: it yields an empty result set.

mod request;
mod response;

use std::sync::Arc;

use log::{debug, error, info, warn};
use reqwest::Url;
use tokio_retry::Retry;

use crate::config::{Config, RetryPolicy};
use crate::domain::{Domain, HostnameFilter, ResultSet};
use crate::error_handling::{update_error_stats, FetchError, InitializationError, ProcessingStats};
use crate::initialization::{init_client, parse_endpoint};
use crate::utils::retry_strategy;

use request::{build_query_url, send_query};
use response::{collect_hostnames, parse_entries};

/// Result of fetching one domain, including how many attempts were made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    /// Sorted, deduplicated hostnames. Empty when nothing was found or every attempt failed.
    pub subdomains: ResultSet,
    /// Number of requests sent (initial attempt included).
    pub attempts: u32,
    /// Whether one of the attempts returned a parseable response.
    pub succeeded: bool,
}

/// Client for the certificate transparency search service.
pub struct SubdomainFetcher {
    client: reqwest::Client,
    endpoint: Url,
    filter: HostnameFilter,
    stats: Arc<ProcessingStats>,
}

impl SubdomainFetcher {
    pub fn new(
        client: reqwest::Client,
        endpoint: Url,
        filter: HostnameFilter,
        stats: Arc<ProcessingStats>,
    ) -> Self {
        Self {
            client,
            endpoint,
            filter,
            stats,
        }
    }

    /// Builds a fetcher from the run configuration.
    ///
    /// # Errors
    ///
    /// Returns an `InitializationError` if the HTTP client cannot be built or the
    /// endpoint is not a valid URL.
    pub fn from_config(
        config: &Config,
        stats: Arc<ProcessingStats>,
    ) -> Result<Self, InitializationError> {
        let client = init_client(config)?;
        let endpoint = parse_endpoint(&config.endpoint)?;
        let filter = HostnameFilter {
            strip_wildcards: config.strip_wildcards,
        };
        Ok(Self::new(client, endpoint, filter, stats))
    }

    /// Fetches the subdomains of `domain`, retrying according to `policy`.
    ///
    /// Network errors, non-2xx statuses and malformed JSON are retried after
    /// `policy.delay()`. A parsed response ends the loop immediately, even if it
    /// holds no matching names. After `policy.max_attempts()` failures the
    /// outcome is empty.
    pub async fn fetch(&self, domain: &Domain, policy: &RetryPolicy) -> FetchOutcome {
        info!("Fetching subdomains for: {}", domain);

        let max_attempts = policy.max_attempts();
        let mut attempts = 0u32;

        let result = Retry::spawn(retry_strategy(policy), || {
            attempts += 1;
            let attempt = attempts;
            async move {
                debug!("Attempt {}/{} for {}", attempt, max_attempts, domain);
                match self.fetch_once(domain).await {
                    Ok(subdomains) => Ok(subdomains),
                    Err(e) => {
                        warn!("Attempt {} failed for {}: {}", attempt, domain, e);
                        update_error_stats(&self.stats, &e);
                        if attempt < max_attempts {
                            debug!("Retrying in {}s", policy.delay().as_secs_f64());
                        }
                        Err(e)
                    }
                }
            }
        })
        .await;

        match result {
            Ok(subdomains) => FetchOutcome {
                subdomains,
                attempts,
                succeeded: true,
            },
            Err(e) => {
                error!(
                    "Failed to fetch subdomains for {} after {} attempts: {}",
                    domain, attempts, e
                );
                FetchOutcome {
                    subdomains: ResultSet::new(),
                    attempts,
                    succeeded: false,
                }
            }
        }
    }

    /// Performs a single request/parse cycle without retrying.
    ///
    /// # Errors
    ///
    /// Returns the `FetchError` of the failing step.
    pub async fn fetch_once(&self, domain: &Domain) -> Result<ResultSet, FetchError> {
        let url = build_query_url(&self.endpoint, domain);
        let body = send_query(&self.client, url).await?;
        let entries = parse_entries(&body)?;
        info!("Received {} certificate entries for {}", entries.len(), domain);

        let subdomains = collect_hostnames(&entries, domain, self.filter);
        debug!("{} unique names match {}", subdomains.len(), domain);
        Ok(subdomains)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::ErrorType;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fetcher_for(server: &MockServer, timeout_seconds: u64) -> (SubdomainFetcher, Arc<ProcessingStats>) {
        let config = Config {
            endpoint: format!("{}/", server.uri()),
            timeout_seconds,
            ..Default::default()
        };
        let stats = Arc::new(ProcessingStats::new());
        let fetcher = SubdomainFetcher::from_config(&config, Arc::clone(&stats)).unwrap();
        (fetcher, stats)
    }

    #[tokio::test]
    async fn test_fetch_once_sends_wildcard_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .and(query_param("q", "%.example.com"))
            .and(query_param("output", "json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"[{"name_value": "www.example.com"}]"#),
            )
            .expect(1)
            .mount(&server)
            .await;

        let (fetcher, _) = fetcher_for(&server, 5);
        let domain = Domain::parse("example.com").unwrap();
        let result = fetcher.fetch_once(&domain).await.unwrap();
        assert_eq!(result.into_iter().collect::<Vec<_>>(), vec!["www.example.com"]);
    }

    #[tokio::test]
    async fn test_fetch_once_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let (fetcher, _) = fetcher_for(&server, 5);
        let domain = Domain::parse("example.com").unwrap();
        let err = fetcher.fetch_once(&domain).await.unwrap_err();
        assert!(matches!(err, FetchError::Status(s) if s.as_u16() == 503));
    }

    #[tokio::test]
    async fn test_fetch_counts_failed_attempts_by_category() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>busy</html>"))
            .mount(&server)
            .await;

        let (fetcher, stats) = fetcher_for(&server, 5);
        let domain = Domain::parse("example.com").unwrap();
        let outcome = fetcher
            .fetch(&domain, &RetryPolicy::new(2, Duration::ZERO))
            .await;

        assert!(!outcome.succeeded);
        assert_eq!(outcome.attempts, 2);
        assert_eq!(stats.get_error_count(ErrorType::HttpRequestTooManyRequests), 1);
        assert_eq!(stats.get_error_count(ErrorType::ResponseDecodeError), 1);
    }

    #[tokio::test]
    async fn test_fetch_timeout_is_a_failed_attempt() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("[]")
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let (fetcher, stats) = fetcher_for(&server, 1);
        let domain = Domain::parse("example.com").unwrap();
        let outcome = fetcher
            .fetch(&domain, &RetryPolicy::new(1, Duration::ZERO))
            .await;

        assert!(!outcome.succeeded);
        assert!(outcome.subdomains.is_empty());
        assert_eq!(stats.get_error_count(ErrorType::HttpRequestTimeoutError), 1);
    }
}
