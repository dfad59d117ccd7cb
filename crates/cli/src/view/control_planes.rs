use ::common::api::{
    ControlPlane, ControlPlaneConfiguration, ControlPlaneCreateParameters,
    ControlPlaneListResponse, ControlPlaneResponse,
};
use chrono::{DateTime, Utc};

use super::{
    format::{
        color_configuration_status, color_status, format_expiry, format_nullable,
        format_optional_str, format_permission, format_timestamp, format_uuid, format_versions,
    },
    table::{render_details, render_table},
};

/// Rendering switches shared by every view.
#[derive(Debug, Clone, Copy)]
pub struct ViewOptions {
    pub short_ids: bool,
    pub colorize: bool,
    pub now: DateTime<Utc>,
}

fn control_plane_pairs(
    control_plane: &ControlPlane,
    opts: &ViewOptions,
) -> Vec<(&'static str, String)> {
    vec![
        ("ID", format_uuid(control_plane.id, opts.short_ids)),
        ("NAME", format_optional_str(Some(&control_plane.name))),
        (
            "DESCRIPTION",
            format_optional_str(Some(&control_plane.description)),
        ),
        (
            "CREATOR",
            match control_plane.creator_id {
                0 => "-".to_string(),
                id => id.to_string(),
            },
        ),
        ("RESERVED", control_plane.reserved.to_string()),
        ("CREATED_AT", format_timestamp(control_plane.created_at)),
        ("UPDATED_AT", format_timestamp(control_plane.updated_at)),
        (
            "EXPIRES_AT",
            format_expiry(
                control_plane.expires_at,
                control_plane.is_expired_at(opts.now),
            ),
        ),
    ]
}

fn configuration_pairs(
    configuration: &ControlPlaneConfiguration,
    opts: &ViewOptions,
    nested: bool,
) -> Vec<(&'static str, String)> {
    let key = |plain: &'static str, prefixed: &'static str| if nested { prefixed } else { plain };
    vec![
        (
            key("ID", "CONFIG_ID"),
            format_uuid(configuration.id, opts.short_ids),
        ),
        (
            key("NAME", "CONFIG_NAME"),
            format_nullable(&configuration.name),
        ),
        (
            key("STATUS", "CONFIG_STATUS"),
            color_configuration_status(configuration.status, opts.colorize),
        ),
        (
            key("CURRENT_VERSION", "CONFIG_CURRENT"),
            format_nullable(&configuration.current_version),
        ),
        (
            key("DESIRED_VERSION", "CONFIG_DESIRED"),
            format_nullable(&configuration.desired_version),
        ),
        (
            key("SYNCED_AT", "CONFIG_SYNCED_AT"),
            format_timestamp(configuration.synced_at),
        ),
        (
            key("DEPLOYED_AT", "CONFIG_DEPLOYED_AT"),
            format_timestamp(configuration.deployed_at),
        ),
    ]
}

pub fn render_control_plane(control_plane: &ControlPlane, opts: &ViewOptions) -> String {
    let mut pairs = control_plane_pairs(control_plane, opts);
    pairs.extend(configuration_pairs(
        &control_plane.configuration,
        opts,
        true,
    ));
    render_details(&pairs)
}

pub fn render_configuration(configuration: &ControlPlaneConfiguration, opts: &ViewOptions) -> String {
    render_details(&configuration_pairs(configuration, opts, false))
}

pub fn render_response(response: &ControlPlaneResponse, opts: &ViewOptions) -> String {
    let mut pairs = vec![
        ("STATUS", color_status(response.status, opts.colorize)),
        ("PERMISSION", format_permission(response.permission)),
    ];
    pairs.extend(control_plane_pairs(&response.control_plane, opts));
    pairs.extend(configuration_pairs(
        &response.control_plane.configuration,
        opts,
        true,
    ));
    render_details(&pairs)
}

pub fn render_list(list: &ControlPlaneListResponse, opts: &ViewOptions) -> String {
    let headers = [
        "ID",
        "NAME",
        "STATUS",
        "PERMISSION",
        "CONFIG",
        "VERSION",
        "EXPIRES_AT",
    ];
    let rows = list
        .control_planes
        .iter()
        .map(|response| {
            let control_plane = &response.control_plane;
            let configuration = &control_plane.configuration;
            vec![
                format_uuid(control_plane.id, opts.short_ids),
                format_optional_str(Some(&control_plane.name)),
                color_status(response.status, opts.colorize),
                format_permission(response.permission),
                color_configuration_status(configuration.status, opts.colorize),
                format_versions(
                    &configuration.current_version,
                    &configuration.desired_version,
                ),
                format_expiry(
                    control_plane.expires_at,
                    control_plane.is_expired_at(opts.now),
                ),
            ]
        })
        .collect::<Vec<_>>();

    let summary = format!(
        "page {} (size {}, showing {}, {} total)",
        list.page,
        list.size,
        list.control_planes.len(),
        list.count
    );
    if rows.is_empty() {
        return format!("{summary}\nno control planes");
    }
    format!("{summary}\n{}", render_table(&headers, &rows))
}

pub fn render_create_parameters(params: &ControlPlaneCreateParameters, opts: &ViewOptions) -> String {
    render_details(&[
        (
            "CONFIGURATION_ID",
            format_uuid(params.configuration_id, opts.short_ids),
        ),
        ("NAME", format_optional_str(Some(&params.name))),
        ("DESCRIPTION", format_optional_str(Some(&params.description))),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::common::Nullable;
    use ::common::api::{ConfigurationStatus, PermissionGroup, Status};
    use chrono::TimeZone;
    use uuid::Uuid;

    fn at(year: i32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0)
            .single()
            .expect("timestamp")
    }

    fn opts() -> ViewOptions {
        ViewOptions {
            short_ids: true,
            colorize: false,
            now: at(2029),
        }
    }

    fn response(name: &str, status: Status, expires: i32) -> ControlPlaneResponse {
        ControlPlaneResponse {
            control_plane: ControlPlane {
                id: Uuid::from_u128(0x3fa85f64_5717_4562_b3fc_2c963f66afa6),
                name: name.to_string(),
                description: String::new(),
                creator_id: 0,
                reserved: false,
                created_at: None,
                updated_at: None,
                expires_at: at(expires),
                configuration: ControlPlaneConfiguration {
                    id: Uuid::from_u128(0x7c9e6679_7425_40de_944b_e07fc1f90ae7),
                    name: Nullable::Null,
                    current_version: Nullable::Value("1.2.0".into()),
                    desired_version: Nullable::Value("1.3.0".into()),
                    status: ConfigurationStatus::UpgradeQueued,
                    synced_at: None,
                    deployed_at: None,
                },
            },
            status,
            permission: Some(PermissionGroup::Member),
        }
    }

    #[test]
    fn list_renders_summary_and_rows() {
        let list = ControlPlaneListResponse {
            control_planes: vec![
                response("prod", Status::Ready, 2030),
                response("old", Status::Deleting, 2020),
            ],
            size: 10,
            page: 1,
            count: 23,
        };
        let text = render_list(&list, &opts());
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "page 1 (size 10, showing 2, 23 total)");
        assert!(lines[1].starts_with("ID"));
        assert!(lines[2].contains("3fa85f64"));
        assert!(lines[2].contains("upgradeQueued"));
        assert!(lines[2].contains("1.2.0 -> 1.3.0"));
        assert!(lines[3].contains("deleting"));
        assert!(lines[3].contains("(expired)"));
    }

    #[test]
    fn empty_list_says_so() {
        let list = ControlPlaneListResponse {
            control_planes: vec![],
            size: 10,
            page: 3,
            count: 23,
        };
        assert_eq!(
            render_list(&list, &opts()),
            "page 3 (size 10, showing 0, 23 total)\nno control planes"
        );
    }

    #[test]
    fn response_details_include_envelope_fields() {
        let text = render_response(&response("prod", Status::Updating, 2030), &opts());
        assert!(text.starts_with("STATUS"));
        assert!(text.contains("PERMISSION"));
        assert!(text.contains("member"));
        assert!(text.contains("CONFIG_NAME"));
        assert!(text.contains("null"));
        assert!(text.contains("DESCRIPTION"));
    }

    #[test]
    fn configuration_details_use_plain_keys() {
        let configuration = response("prod", Status::Ready, 2030)
            .control_plane
            .configuration;
        let text = render_configuration(&configuration, &opts());
        assert!(text.starts_with("ID"));
        assert!(text.contains("CURRENT_VERSION"));
        assert!(!text.contains("CONFIG_"));
    }
}
