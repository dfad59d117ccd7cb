use std::process::Command;

use serde_json::Value;

#[test]
fn schema_lists_resource_components() {
    let output = Command::new(assert_cmd::cargo::cargo_bin!("cpkit"))
        .arg("schema")
        .output()
        .expect("run schema");

    assert!(output.status.success(), "{output:?}");
    let doc: Value = serde_json::from_slice(&output.stdout).expect("schema is JSON");
    let schemas = doc["components"]["schemas"]
        .as_object()
        .expect("component schemas");
    for name in [
        "ControlPlane",
        "ControlPlaneConfiguration",
        "ControlPlaneResponse",
        "ControlPlaneListResponse",
        "ControlPlaneCreateParameters",
        "Status",
        "ConfigurationStatus",
        "PermissionGroup",
    ] {
        assert!(schemas.contains_key(name), "missing schema {name}");
    }
    let response = &schemas["ControlPlaneResponse"]["properties"];
    assert!(response.get("controlPlanestatus").is_some());
}
