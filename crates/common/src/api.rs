//! Control plane resources, status enumerations, and response envelopes.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::codec::{deserialize_identifier, wire_error};
use crate::error::ModelError;
use crate::nullable::Nullable;

/// Lifecycle phase of a control plane (wire format uses lowercase values).
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Control plane is being created.
    Provisioning,
    /// Control plane is available; the only stable resting state.
    Ready,
    /// An update was requested and is being applied.
    Updating,
    /// Deletion was requested; the control plane disappears afterwards.
    Deleting,
}

impl Status {
    /// Every status, in lifecycle order.
    pub const ALL: [Status; 4] = [
        Status::Provisioning,
        Status::Ready,
        Status::Updating,
        Status::Deleting,
    ];

    /// Returns the canonical lowercase representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Provisioning => "provisioning",
            Status::Ready => "ready",
            Status::Updating => "updating",
            Status::Deleting => "deleting",
        }
    }
}

/// Access level of the requesting identity on a control plane.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PermissionGroup {
    /// May modify any object in the control plane, including deleting it.
    Owner,
    /// May read the basic environment.
    Member,
    /// No access.
    None,
}

impl PermissionGroup {
    /// Every permission group, from most to least privileged.
    pub const ALL: [PermissionGroup; 3] = [
        PermissionGroup::Owner,
        PermissionGroup::Member,
        PermissionGroup::None,
    ];

    /// Returns the canonical lowercase representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionGroup::Owner => "owner",
            PermissionGroup::Member => "member",
            PermissionGroup::None => "none",
        }
    }

    /// Whether the viewer may read the control plane.
    pub fn can_read(&self) -> bool {
        match self {
            PermissionGroup::Owner | PermissionGroup::Member => true,
            PermissionGroup::None => false,
        }
    }

    /// Whether the viewer may modify objects in the control plane.
    pub fn can_write(&self) -> bool {
        match self {
            PermissionGroup::Owner => true,
            PermissionGroup::Member | PermissionGroup::None => false,
        }
    }

    /// Whether the viewer may delete the control plane.
    pub fn can_delete(&self) -> bool {
        self.can_write()
    }
}

/// Phase of a configuration relative to its control plane (wire format uses camelCase values).
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum ConfigurationStatus {
    /// Queued to begin installation.
    InstallationQueued,
    /// Installing into the control plane.
    Installing,
    /// Queued to upgrade to the desired version.
    UpgradeQueued,
    /// Upgrading to the desired version.
    Upgrading,
    /// Ready for use.
    Ready,
}

impl ConfigurationStatus {
    /// Every configuration status, in lifecycle order.
    pub const ALL: [ConfigurationStatus; 5] = [
        ConfigurationStatus::InstallationQueued,
        ConfigurationStatus::Installing,
        ConfigurationStatus::UpgradeQueued,
        ConfigurationStatus::Upgrading,
        ConfigurationStatus::Ready,
    ];

    /// Returns the canonical camelCase representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigurationStatus::InstallationQueued => "installationQueued",
            ConfigurationStatus::Installing => "installing",
            ConfigurationStatus::UpgradeQueued => "upgradeQueued",
            ConfigurationStatus::Upgrading => "upgrading",
            ConfigurationStatus::Ready => "ready",
        }
    }

    /// Waiting for an install or upgrade to start.
    pub fn is_queued(&self) -> bool {
        matches!(
            self,
            ConfigurationStatus::InstallationQueued | ConfigurationStatus::UpgradeQueued
        )
    }

    /// An install or upgrade is running.
    pub fn is_in_progress(&self) -> bool {
        matches!(
            self,
            ConfigurationStatus::Installing | ConfigurationStatus::Upgrading
        )
    }
}

macro_rules! closed_enum_text {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ModelError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                <$ty>::ALL
                    .iter()
                    .copied()
                    .find(|candidate| candidate.as_str() == value)
                    .ok_or_else(|| {
                        ModelError::unknown_enum_value(value, <$ty>::ALL.iter().map(|v| v.as_str()))
                    })
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                String::deserialize(deserializer)?
                    .parse()
                    .map_err(wire_error)
            }
        }
    };
}

closed_enum_text!(Status);
closed_enum_text!(PermissionGroup);
closed_enum_text!(ConfigurationStatus);

fn is_zero(value: &u64) -> bool {
    *value == 0
}

/// A managed control plane.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[schema(example = json!({
    "id": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
    "name": "prod",
    "description": "production tenant",
    "creatorId": 42,
    "reserved": false,
    "createdAt": "2029-06-01T08:00:00Z",
    "expiresAt": "2030-01-01T00:00:00Z",
    "configuration": {
        "id": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
        "name": "platform-ref",
        "currentVersion": "1.2.0",
        "desiredVersion": "1.2.0",
        "status": "ready",
        "deployedAt": "2029-06-01T08:05:00Z"
    }
}))]
#[serde(rename_all = "camelCase")]
pub struct ControlPlane {
    /// Globally unique identifier, immutable after creation.
    #[serde(deserialize_with = "deserialize_identifier")]
    pub id: Uuid,
    /// Human-readable name.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Free-text description.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Identifier of the account that created the control plane.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub creator_id: u64,
    /// Held for internal/system use rather than general allocation.
    #[serde(default)]
    pub reserved: bool,
    /// Creation timestamp; absent for instances not yet persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Expiry timestamp, set at creation and possibly extended.
    pub expires_at: DateTime<Utc>,
    /// Configuration installed into the control plane.
    pub configuration: ControlPlaneConfiguration,
}

impl ControlPlane {
    /// Whether `expires_at` lies in the past relative to `now`.
    ///
    /// Informational only: what an expired control plane means is decided by the serving system.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }
}

/// Configuration instance associated with a control plane.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ControlPlaneConfiguration {
    /// Identifier, independent of the owning control plane's identifier.
    #[serde(deserialize_with = "deserialize_identifier")]
    pub id: Uuid,
    /// Optional label; null when unnamed or not yet resolved.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    #[schema(value_type = Option<String>)]
    pub name: Nullable<String>,
    /// Version presently deployed; null before the first successful install.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    #[schema(value_type = Option<String>, example = "1.2.0")]
    pub current_version: Nullable<String>,
    /// Version the system is converging toward; null when nothing is pending.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    #[schema(value_type = Option<String>, example = "1.3.0")]
    pub desired_version: Nullable<String>,
    /// Install/upgrade phase.
    pub status: ConfigurationStatus,
    /// Last successful reconciliation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synced_at: Option<DateTime<Utc>>,
    /// Last successful deployment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployed_at: Option<DateTime<Utc>>,
}

/// Control plane snapshot returned when fetching a control plane.
///
/// Assembled by the server per request; the permission reflects the requesting identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct ControlPlaneResponse {
    /// Entity snapshot.
    #[serde(rename = "controlPlane")]
    pub control_plane: ControlPlane,
    /// Current lifecycle phase.
    #[serde(rename = "controlPlanestatus")]
    pub status: Status,
    /// Access level of the requesting identity.
    #[serde(
        rename = "controlPlanePermission",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub permission: Option<PermissionGroup>,
}

/// One page of control planes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ControlPlaneListResponse {
    /// Control planes on this page, in server-defined order.
    #[serde(deserialize_with = "deserialize_null_as_empty")]
    pub control_planes: Vec<ControlPlaneResponse>,
    /// Requested page size.
    pub size: u32,
    /// Page index, using the server's numbering convention.
    pub page: u32,
    /// Total matching control planes across all pages.
    pub count: u32,
}

fn deserialize_null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Parameters accepted when creating a control plane.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[schema(example = json!({
    "configurationId": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
    "name": "staging",
    "description": "staging tenant"
}))]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ControlPlaneCreateParameters {
    /// Configuration to install into the new control plane.
    #[serde(deserialize_with = "deserialize_identifier")]
    pub configuration_id: Uuid,
    /// Desired name.
    pub name: String,
    /// Description.
    pub description: String,
}
