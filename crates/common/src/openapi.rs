use utoipa::OpenApi;

use crate::api::{
    ConfigurationStatus, ControlPlane, ControlPlaneConfiguration, ControlPlaneCreateParameters,
    ControlPlaneListResponse, ControlPlaneResponse, PermissionGroup, Status,
};

/// Component schemas for every resource in the model.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Managed control plane resources",
        description = "Resources exchanged with the managed control plane API."
    ),
    components(schemas(
        ControlPlane,
        ControlPlaneConfiguration,
        ControlPlaneResponse,
        ControlPlaneListResponse,
        ControlPlaneCreateParameters,
        Status,
        PermissionGroup,
        ConfigurationStatus,
    ))
)]
pub struct ResourceSchemas;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_every_resource_schema() {
        let doc = ResourceSchemas::openapi();
        let components = doc.components.expect("components");
        for name in [
            "ControlPlane",
            "ControlPlaneConfiguration",
            "ControlPlaneResponse",
            "ControlPlaneListResponse",
            "ControlPlaneCreateParameters",
            "Status",
            "PermissionGroup",
            "ConfigurationStatus",
        ] {
            assert!(components.schemas.contains_key(name), "missing {name}");
        }
    }

    #[test]
    fn schema_uses_wire_field_names() {
        let json = ResourceSchemas::openapi()
            .to_json()
            .expect("serialize openapi document");
        assert!(json.contains("controlPlanestatus"));
        assert!(json.contains("installationQueued"));
        assert!(json.contains("currentVersion"));
    }
}
