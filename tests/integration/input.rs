//! Tests for the `in` script

use super::common::{resource_command, source, DEPLOYMENTS_PATH};
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_deployment(server: &MockServer, id: i64, body: Value, statuses: Value) {
    Mock::given(method("GET"))
        .and(path(format!("{}/{}", DEPLOYMENTS_PATH, id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{}/{}/statuses", DEPLOYMENTS_PATH, id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(statuses))
        .mount(server)
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_in_writes_deployment_files() {
    let server = MockServer::start().await;
    mount_deployment(
        &server,
        7,
        json!({
            "id": 7,
            "ref": "main",
            "sha": "deadbeef",
            "task": "deploy",
            "environment": "production",
            "description": "Ship it",
            "creator": {"login": "octocat", "id": 1},
            "created_at": "2024-05-01T10:00:00Z"
        }),
        json!([{"id": 2, "state": "success"}, {"id": 1, "state": "pending"}]),
    )
    .await;

    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("deployment");
    let request = json!({"source": source(&server, &[]), "version": {"id": "7"}});

    let output = resource_command()
        .arg("in")
        .arg(&dest)
        .write_stdin(request.to_string())
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "in failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let response: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(response["version"], json!({"id": "7", "statuses": "success"}));
    assert!(response["metadata"]
        .as_array()
        .unwrap()
        .contains(&json!({"name": "creator", "value": "octocat"})));

    let read = |name: &str| fs::read_to_string(dest.join(name)).unwrap();
    assert_eq!(read("id"), "7");
    assert_eq!(read("ref"), "main");
    assert_eq!(read("sha"), "deadbeef");
    assert_eq!(read("task"), "deploy");
    assert_eq!(read("environment"), "production");
    assert_eq!(read("description"), "Ship it");

    let dump: Value = serde_json::from_str(&read("deploymentJSON")).unwrap();
    assert_eq!(dump["creator"]["login"], "octocat");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_in_missing_deployment_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{}/99", DEPLOYMENTS_PATH)))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let request = json!({"source": source(&server, &[]), "version": {"id": "99"}});

    resource_command()
        .arg("in")
        .arg(temp.path())
        .write_stdin(request.to_string())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no deployment"));

    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn test_in_requires_destination() {
    resource_command()
        .arg("in")
        .write_stdin("{}")
        .assert()
        .code(1);
}
