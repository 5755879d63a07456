//! Integration tests for run_scan
//!
//! These tests verify the driver's orchestration logic:
//! - Work list resolution (single domain, domain file, blank and missing files)
//! - Output routing (derived filenames, explicit `--output`, print mode)
//! - Failure handling (unreachable service, unwritable output)

mod helpers;

use std::path::PathBuf;
use std::time::Duration;

use subcrt::{run_scan, run_scan_with_output, Input, RetryPolicy};
use tempfile::TempDir;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use helpers::{create_test_config, mount_crtsh_response, write_domains_to_file};

fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

fn dir_entries(dir: &TempDir) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir.path())
        .expect("Failed to read temp dir")
        .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

#[tokio::test]
async fn test_single_domain_writes_derived_file() {
    let server = MockServer::start().await;
    mount_crtsh_response(
        &server,
        "example.com",
        r#"[{"name_value": "a.example.com\nb.Example.com,example.com"}]"#,
    )
    .await;
    let dir = create_temp_dir();
    let config = create_test_config(&server, Input::Domain("example.com".into()), dir.path());

    let report = run_scan(config).await.expect("Scan should succeed");

    let expected = dir.path().join("subcrt-example.com.txt");
    assert_eq!(report.files_written, vec![expected.clone()]);
    assert_eq!(report.domains_processed, 1);
    assert_eq!(report.domains_with_results, 1);
    assert_eq!(report.total_subdomains, 3);
    assert_eq!(
        std::fs::read_to_string(expected).unwrap(),
        "a.example.com\nb.example.com\nexample.com\n"
    );
}

#[tokio::test]
async fn test_single_domain_honors_explicit_output() {
    let server = MockServer::start().await;
    mount_crtsh_response(&server, "example.com", r#"[{"name_value": "www.example.com"}]"#)
        .await;
    let dir = create_temp_dir();
    let explicit = dir.path().join("foo.txt");
    let mut config = create_test_config(&server, Input::Domain("example.com".into()), dir.path());
    config.output = Some(explicit.clone());

    let report = run_scan(config).await.unwrap();

    assert_eq!(report.files_written, vec![explicit.clone()]);
    assert_eq!(std::fs::read_to_string(explicit).unwrap(), "www.example.com\n");
    assert_eq!(dir_entries(&dir), vec!["foo.txt"]);
}

#[tokio::test]
async fn test_single_line_file_honors_explicit_output() {
    let server = MockServer::start().await;
    mount_crtsh_response(&server, "example.com", r#"[{"name_value": "www.example.com"}]"#)
        .await;
    let dir = create_temp_dir();
    let input = write_domains_to_file(&["", "example.com", "   "]);
    let explicit = dir.path().join("foo.txt");
    let mut config = create_test_config(
        &server,
        Input::File(input.path().to_path_buf()),
        dir.path(),
    );
    config.output = Some(explicit.clone());

    let report = run_scan(config).await.unwrap();
    assert_eq!(report.files_written, vec![explicit]);
}

#[tokio::test]
async fn test_multiple_domains_ignore_explicit_output() {
    let server = MockServer::start().await;
    mount_crtsh_response(&server, "example.com", r#"[{"name_value": "www.example.com"}]"#)
        .await;
    mount_crtsh_response(&server, "example.org", r#"[{"name_value": "api.example.org"}]"#)
        .await;
    let dir = create_temp_dir();
    let input = write_domains_to_file(&["example.com", "", "example.org"]);
    let mut config = create_test_config(
        &server,
        Input::File(input.path().to_path_buf()),
        dir.path(),
    );
    config.output = Some(dir.path().join("foo.txt"));

    let report = run_scan(config).await.unwrap();

    assert_eq!(report.domains_processed, 2);
    assert_eq!(report.total_subdomains, 2);
    assert_eq!(
        report.files_written,
        vec![
            dir.path().join("subcrt-example.com.txt"),
            dir.path().join("subcrt-example.org.txt"),
        ]
    );
    assert_eq!(
        dir_entries(&dir),
        vec!["subcrt-example.com.txt", "subcrt-example.org.txt"]
    );
}

#[tokio::test]
async fn test_blank_input_file_processes_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(0)
        .mount(&server)
        .await;
    let dir = create_temp_dir();

    for lines in [&[][..], &["", "   ", "\t"][..]] {
        let input = write_domains_to_file(lines);
        let config = create_test_config(
            &server,
            Input::File(input.path().to_path_buf()),
            dir.path(),
        );
        let report = run_scan(config).await.expect("Blank input is not an error");
        assert_eq!(report.domains_processed, 0);
        assert!(report.files_written.is_empty());
    }
    assert!(dir_entries(&dir).is_empty());
}

#[tokio::test]
async fn test_missing_input_file_fails_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(0)
        .mount(&server)
        .await;
    let dir = create_temp_dir();
    let config = create_test_config(
        &server,
        Input::File(PathBuf::from("/nonexistent/subcrt/domains.txt")),
        dir.path(),
    );

    let err = run_scan(config).await.unwrap_err();
    assert!(format!("{:#}", err).contains("Error reading file"));
    assert!(dir_entries(&dir).is_empty());
}

#[tokio::test]
async fn test_print_mode_writes_to_output_only() {
    let server = MockServer::start().await;
    mount_crtsh_response(
        &server,
        "example.com",
        r#"[{"name_value": "www.example.com\napi.example.com"}]"#,
    )
    .await;
    let dir = create_temp_dir();
    let mut config = create_test_config(&server, Input::Domain("example.com".into()), dir.path());
    config.print = true;

    let mut out = Vec::new();
    let report = run_scan_with_output(config, &mut out).await.unwrap();

    assert!(report.files_written.is_empty());
    assert!(dir_entries(&dir).is_empty());
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "[example.com] 2 subdomains\napi.example.com\nwww.example.com\n"
    );
}

#[tokio::test]
async fn test_empty_result_writes_no_file() {
    let server = MockServer::start().await;
    mount_crtsh_response(&server, "example.com", "[]").await;
    let dir = create_temp_dir();
    let config = create_test_config(&server, Input::Domain("example.com".into()), dir.path());

    let report = run_scan(config).await.unwrap();

    assert_eq!(report.domains_processed, 1);
    assert_eq!(report.domains_with_results, 0);
    assert_eq!(report.domains_failed, 0);
    assert!(dir_entries(&dir).is_empty());
}

#[tokio::test]
async fn test_unreachable_service_is_not_fatal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(4)
        .mount(&server)
        .await;
    let dir = create_temp_dir();
    let input = write_domains_to_file(&["example.com", "example.org"]);
    let mut config = create_test_config(
        &server,
        Input::File(input.path().to_path_buf()),
        dir.path(),
    );
    config.retry = RetryPolicy::new(2, Duration::ZERO);

    let report = run_scan(config).await.expect("Failed fetches are not fatal");

    assert_eq!(report.domains_processed, 2);
    assert_eq!(report.domains_failed, 2);
    assert_eq!(report.total_subdomains, 0);
    assert!(dir_entries(&dir).is_empty());
}

#[tokio::test]
async fn test_write_failure_is_not_fatal() {
    let server = MockServer::start().await;
    mount_crtsh_response(&server, "example.com", r#"[{"name_value": "www.example.com"}]"#)
        .await;
    mount_crtsh_response(&server, "example.org", r#"[{"name_value": "www.example.org"}]"#)
        .await;
    let dir = create_temp_dir();
    let input = write_domains_to_file(&["example.com", "example.org"]);
    let config = create_test_config(
        &server,
        Input::File(input.path().to_path_buf()),
        &dir.path().join("missing"),
    );

    let report = run_scan(config).await.expect("Write failures are not fatal");

    assert_eq!(report.domains_processed, 2);
    assert_eq!(report.domains_with_results, 2);
    assert!(report.files_written.is_empty());
}

#[tokio::test]
async fn test_invalid_endpoint_is_fatal() {
    let server = MockServer::start().await;
    let dir = create_temp_dir();
    let mut config = create_test_config(&server, Input::Domain("example.com".into()), dir.path());
    config.endpoint = "not a url".to_string();

    let err = run_scan(config).await.unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to initialize subdomain fetcher"));
}

#[tokio::test]
async fn test_hash_prefixed_line_is_a_domain() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&server)
        .await;
    let dir = create_temp_dir();
    let input = write_domains_to_file(&["#internal.example"]);
    let config = create_test_config(
        &server,
        Input::File(input.path().to_path_buf()),
        dir.path(),
    );

    let report = run_scan(config).await.unwrap();
    assert_eq!(report.domains_processed, 1);
}
