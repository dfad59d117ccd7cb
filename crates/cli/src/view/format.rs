use ::common::Nullable;
use ::common::api::{ConfigurationStatus, PermissionGroup, Status};
use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

pub fn colorize(text: &str, code: &str, enabled: bool) -> String {
    if enabled {
        format!("\x1b[{}m{}\x1b[0m", code, text)
    } else {
        text.to_string()
    }
}

pub fn color_status(status: Status, enabled: bool) -> String {
    let label = status.as_str();
    match status {
        Status::Ready => colorize(label, "32", enabled),
        Status::Provisioning => colorize(label, "36", enabled),
        Status::Updating => colorize(label, "33", enabled),
        Status::Deleting => colorize(label, "31", enabled),
    }
}

pub fn color_configuration_status(status: ConfigurationStatus, enabled: bool) -> String {
    let label = status.as_str();
    match status {
        ConfigurationStatus::Ready => colorize(label, "32", enabled),
        ConfigurationStatus::InstallationQueued | ConfigurationStatus::UpgradeQueued => {
            colorize(label, "36", enabled)
        }
        ConfigurationStatus::Installing | ConfigurationStatus::Upgrading => {
            colorize(label, "33", enabled)
        }
    }
}

pub fn format_permission(permission: Option<PermissionGroup>) -> String {
    permission
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn format_optional_str(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

/// Absent renders as `-`, explicit null as `null`.
pub fn format_nullable(value: &Nullable<String>) -> String {
    match value {
        Nullable::Absent => "-".to_string(),
        Nullable::Null => "null".to_string(),
        Nullable::Value(v) => format_optional_str(Some(v)),
    }
}

pub fn format_timestamp(ts: Option<DateTime<Utc>>) -> String {
    ts.map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_else(|| "-".to_string())
}

pub fn format_uuid(id: Uuid, short: bool) -> String {
    if short {
        id.simple().to_string()[..8].to_string()
    } else {
        id.to_string()
    }
}

pub fn format_expiry(expires_at: DateTime<Utc>, expired: bool) -> String {
    let stamp = format_timestamp(Some(expires_at));
    if expired {
        format!("{stamp} (expired)")
    } else {
        stamp
    }
}

pub fn format_versions(current: &Nullable<String>, desired: &Nullable<String>) -> String {
    let current_label = format_nullable(current);
    match (current.as_deref(), desired.as_deref()) {
        (_, None) => current_label,
        (Some(c), Some(d)) if c == d => current_label,
        (_, Some(d)) => format!("{current_label} -> {d}"),
    }
}
