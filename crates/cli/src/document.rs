use std::fs;
use std::io::{self, Read};
use std::path::Path;

use ::common::api::{
    ControlPlane, ControlPlaneConfiguration, ControlPlaneCreateParameters,
    ControlPlaneListResponse, ControlPlaneResponse,
};
use ::common::{ConsistencyError, ModelError, decode_str};
use anyhow::Context;
use serde::Serialize;
use tracing::debug;

use crate::args::ResourceKind;

/// A decoded payload of any supported resource kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Document {
    ControlPlane(ControlPlane),
    Configuration(ControlPlaneConfiguration),
    Response(ControlPlaneResponse),
    List(ControlPlaneListResponse),
    CreateParams(ControlPlaneCreateParameters),
}

impl Document {
    pub fn decode(kind: ResourceKind, payload: &str) -> Result<Self, ModelError> {
        let document = match kind {
            ResourceKind::ControlPlane => Document::ControlPlane(decode_str(payload)?),
            ResourceKind::Configuration => Document::Configuration(decode_str(payload)?),
            ResourceKind::Response => Document::Response(decode_str(payload)?),
            ResourceKind::List => Document::List(decode_str(payload)?),
            ResourceKind::CreateParams => Document::CreateParams(decode_str(payload)?),
        };
        Ok(document)
    }

    pub fn kind(&self) -> ResourceKind {
        match self {
            Document::ControlPlane(_) => ResourceKind::ControlPlane,
            Document::Configuration(_) => ResourceKind::Configuration,
            Document::Response(_) => ResourceKind::Response,
            Document::List(_) => ResourceKind::List,
            Document::CreateParams(_) => ResourceKind::CreateParams,
        }
    }

    pub fn consistency_issues(&self) -> Vec<ConsistencyError> {
        match self {
            Document::ControlPlane(control_plane) => control_plane.consistency_issues(),
            Document::Configuration(configuration) => {
                configuration.check_consistency().err().into_iter().collect()
            }
            Document::Response(response) => response.consistency_issues(),
            Document::List(list) => list.consistency_issues(),
            // Write-only input carries no server-side invariants.
            Document::CreateParams(_) => Vec::new(),
        }
    }
}

/// Read a payload from `path`, or stdin when the path is absent or `-`.
pub fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            debug!(path = %path.display(), "reading payload file");
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
        }
        _ => {
            debug!("reading payload from stdin");
            let mut payload = String::new();
            io::stdin()
                .read_to_string(&mut payload)
                .context("read payload from stdin")?;
            Ok(payload)
        }
    }
}
