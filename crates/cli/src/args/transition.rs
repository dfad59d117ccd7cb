use clap::{Args, Subcommand};
use ::common::api::{ConfigurationStatus, Status};

#[derive(Debug, Subcommand)]
pub enum TransitionCommands {
    /// Check a control plane status transition.
    ControlPlane(ControlPlaneTransitionArgs),
    /// Check a configuration status transition.
    Configuration(ConfigurationTransitionArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ControlPlaneTransitionArgs {
    /// Current status.
    #[arg(long, value_parser = parse_status)]
    pub from: Status,
    /// Next status, or `removed` once deletion completes.
    #[arg(long, value_parser = parse_control_plane_target)]
    pub to: ControlPlaneTarget,
}

#[derive(Debug, Clone, Args)]
pub struct ConfigurationTransitionArgs {
    /// Current status.
    #[arg(long, value_parser = parse_configuration_status)]
    pub from: ConfigurationStatus,
    /// Next status.
    #[arg(long, value_parser = parse_configuration_status)]
    pub to: ConfigurationStatus,
}

/// Where a control plane goes next.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ControlPlaneTarget {
    Status(Status),
    Removed,
}

pub const REMOVED: &str = "removed";

pub fn parse_status(value: &str) -> Result<Status, String> {
    value.parse().map_err(|err: ::common::ModelError| err.to_string())
}

pub fn parse_configuration_status(value: &str) -> Result<ConfigurationStatus, String> {
    value.parse().map_err(|err: ::common::ModelError| err.to_string())
}

pub fn parse_control_plane_target(value: &str) -> Result<ControlPlaneTarget, String> {
    if value == REMOVED {
        return Ok(ControlPlaneTarget::Removed);
    }
    parse_status(value).map(ControlPlaneTarget::Status)
}
