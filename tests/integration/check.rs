//! Tests for the `check` script

use super::common::{resource_command, source, DEPLOYMENTS_PATH};
use predicates::prelude::*;
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn run_check(request: &Value) -> Value {
    let output = resource_command()
        .arg("check")
        .write_stdin(request.to_string())
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "check failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn test_check_first_run_reports_newest_deployment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(DEPLOYMENTS_PATH))
        .and(header("authorization", "token test-token"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("ETag", "\"etag-1\"")
                .set_body_json(json!([
                    {"id": 12, "environment": "production"},
                    {"id": 11, "environment": "staging"},
                    {"id": 10, "environment": "production"}
                ])),
        )
        .mount(&server)
        .await;

    let request = json!({"source": source(&server, &["production"]), "version": null});
    let versions = run_check(&request);

    assert_eq!(versions, json!([{"id": "12", "etag": "\"etag-1\""}]));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_check_reports_versions_since_prior() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(DEPLOYMENTS_PATH))
        .and(header("if-none-match", "abc"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("ETag", "xyz")
                .set_body_json(json!([{"id": 7}, {"id": 5}, {"id": 3}])),
        )
        .mount(&server)
        .await;

    let request = json!({
        "source": source(&server, &[]),
        "version": {"id": "5", "etag": "abc"}
    });
    let versions = run_check(&request);

    assert_eq!(
        versions,
        json!([{"id": "5", "etag": "xyz"}, {"id": "7", "etag": "xyz"}])
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_check_without_etag_header_reports_new_versions() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(DEPLOYMENTS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 5}, {"id": 3}])))
        .mount(&server)
        .await;

    let request = json!({
        "source": source(&server, &[]),
        "version": {"id": "3"}
    });
    let versions = run_check(&request);

    assert_eq!(versions, json!([{"id": "3"}, {"id": "5"}]));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_check_not_modified_returns_prior_version() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(DEPLOYMENTS_PATH))
        .respond_with(ResponseTemplate::new(304))
        .mount(&server)
        .await;

    let request = json!({
        "source": source(&server, &[]),
        "version": {"id": "5", "etag": "abc", "statuses": "success"}
    });
    let versions = run_check(&request);

    assert_eq!(
        versions,
        json!([{"id": "5", "etag": "abc", "statuses": "success"}])
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_check_api_error_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(DEPLOYMENTS_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Bad credentials"})))
        .mount(&server)
        .await;

    let request = json!({"source": source(&server, &[])});

    resource_command()
        .arg("check")
        .write_stdin(request.to_string())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Bad credentials"));
}

#[test]
fn test_check_missing_repository_fails() {
    let request = json!({"source": {"user": "octocat"}});

    resource_command()
        .arg("check")
        .write_stdin(request.to_string())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("source.repository must be set"));
}

#[test]
fn test_check_invalid_json_fails() {
    resource_command()
        .arg("check")
        .write_stdin("not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON error"));
}
