use std::io::Write;
use std::process::Command;

use serde_json::{Value, json};
use tempfile::NamedTempFile;

fn payload_file(body: &Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(body.to_string().as_bytes())
        .expect("write payload");
    file
}

fn validate(kind: &str, body: &Value, extra: &[&str]) -> std::process::Output {
    let file = payload_file(body);
    Command::new(assert_cmd::cargo::cargo_bin!("cpkit"))
        .env_remove("RUST_LOG")
        .args(["validate", kind])
        .arg(file.path())
        .args(extra)
        .output()
        .expect("run validate")
}

fn configuration(status: &str, current: Value) -> Value {
    json!({
        "id": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
        "name": "platform-ref",
        "currentVersion": current,
        "desiredVersion": "1.2.0",
        "status": status
    })
}

fn list(items: usize, size: u32, count: u32) -> Value {
    let item = json!({
        "controlPlane": {
            "id": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
            "name": "prod",
            "reserved": false,
            "expiresAt": "2030-01-01T00:00:00Z",
            "configuration": configuration("ready", json!("1.2.0"))
        },
        "controlPlanestatus": "ready"
    });
    json!({
        "controlPlanes": vec![item; items],
        "size": size,
        "page": 1,
        "count": count
    })
}

#[test]
fn consistent_list_passes() {
    let output = validate("list", &list(10, 10, 23), &[]);
    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "list: ok (decoded and consistent)");
}

#[test]
fn overflowing_page_fails() {
    let output = validate("list", &list(11, 10, 23), &[]);
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[page_overflow]"), "{stdout}");
}

#[test]
fn decode_only_ignores_invariants() {
    let output = validate("list", &list(11, 10, 23), &["--decode-only"]);
    assert!(output.status.success(), "{output:?}");
}

#[test]
fn ready_configuration_needs_current_version() {
    let output = validate("configuration", &configuration("ready", Value::Null), &[]);
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[ready_without_current_version]"), "{stdout}");

    let output = validate(
        "configuration",
        &configuration("installing", Value::Null),
        &[],
    );
    assert!(output.status.success(), "{output:?}");
}

#[test]
fn unknown_status_is_reported_as_json() {
    let output = validate(
        "configuration",
        &configuration("archived", json!("1.2.0")),
        &["--json"],
    );
    assert!(!output.status.success());
    let report: Value = serde_json::from_slice(&output.stdout).expect("report is JSON");
    assert_eq!(report["kind"], "configuration");
    assert_eq!(report["decoded"], false);
    assert_eq!(report["issues"][0]["code"], "unknown_enum_value");
}

#[test]
fn create_params_reject_unknown_fields() {
    let body = json!({
        "configurationId": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
        "name": "staging",
        "description": "",
        "status": "ready"
    });
    let output = validate("create-params", &body, &[]);
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("invalid (not decodable)"), "{stdout}");
}

#[test]
fn malformed_identifier_is_classified() {
    let mut body = configuration("ready", json!("1.2.0"));
    body["id"] = json!("not-a-uuid");
    let output = validate("configuration", &body, &[]);
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[malformed_identifier]"), "{stdout}");
}
