// Shared test helpers for mock crt.sh servers and scan configuration.

use std::io::Write;
use std::path::Path;
use std::time::Duration;

use subcrt::{Config, Input, LogFormat, LogLevel, RetryPolicy};
use tempfile::NamedTempFile;
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds a quiet, fast config pointed at the mock server.
#[allow(dead_code)] // Used by other test files
pub fn create_test_config(server: &MockServer, input: Input, output_dir: &Path) -> Config {
    Config {
        input,
        output_dir: output_dir.to_path_buf(),
        retry: RetryPolicy::new(1, Duration::ZERO),
        timeout_seconds: 5,
        endpoint: format!("{}/", server.uri()),
        user_agent: "subcrt_test/1.0".to_string(),
        log_level: LogLevel::Error, // Reduce noise in tests
        log_format: LogFormat::Plain,
        color: false,
        banner: false,
        ..Default::default()
    }
}

/// Writes one domain per line to a temporary file (sync I/O).
#[allow(dead_code)] // Used by other test files
pub fn write_domains_to_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    for line in lines {
        writeln!(file, "{}", line).expect("Failed to write domain");
    }
    file.flush().expect("Failed to flush file");
    file
}

/// Mounts a mock answering the query for `domain` with the given JSON body.
#[allow(dead_code)] // Used by other test files
pub async fn mount_crtsh_response(server: &MockServer, domain: &str, body: &str) {
    Mock::given(method("GET"))
        .and(query_param("q", format!("%.{}", domain)))
        .and(query_param("output", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}
