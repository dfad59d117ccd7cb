//! Consistency checks for decoded resources.
//!
//! Decoding only guarantees shape. These checks flag payloads that decode fine but describe a
//! state the model does not allow at rest.

use tracing::warn;

use crate::api::{
    ConfigurationStatus, ControlPlane, ControlPlaneConfiguration, ControlPlaneListResponse,
    ControlPlaneResponse,
};
use crate::error::ConsistencyError;

impl ControlPlaneConfiguration {
    /// A `ready` configuration must have a current version matching any desired version.
    pub fn check_consistency(&self) -> Result<(), ConsistencyError> {
        match self.status {
            ConfigurationStatus::Ready => {}
            ConfigurationStatus::InstallationQueued
            | ConfigurationStatus::Installing
            | ConfigurationStatus::UpgradeQueued
            | ConfigurationStatus::Upgrading => return Ok(()),
        }

        let Some(current) = self.current_version.as_deref() else {
            return Err(ConsistencyError::ReadyWithoutCurrentVersion {
                configuration_id: self.id,
            });
        };
        if let Some(desired) = self.desired_version.as_deref()
            && desired != current
        {
            return Err(ConsistencyError::VersionDrift {
                configuration_id: self.id,
                current: current.to_string(),
                desired: desired.to_string(),
            });
        }
        Ok(())
    }
}

impl ControlPlane {
    /// Every invariant violation carried by the control plane.
    pub fn consistency_issues(&self) -> Vec<ConsistencyError> {
        self.configuration.check_consistency().err().into_iter().collect()
    }
}

impl ControlPlaneResponse {
    /// Every invariant violation carried by the snapshot.
    pub fn consistency_issues(&self) -> Vec<ConsistencyError> {
        self.control_plane.consistency_issues()
    }
}

impl ControlPlaneListResponse {
    /// Page bounds: no more items than the page size, and no fewer total matches than items.
    pub fn validate(&self) -> Result<(), ConsistencyError> {
        let items = self.control_planes.len();
        if items > self.size as usize {
            return Err(ConsistencyError::PageOverflow {
                items,
                size: self.size,
            });
        }
        if (self.count as usize) < items {
            return Err(ConsistencyError::CountBelowPage {
                count: self.count,
                items,
            });
        }
        Ok(())
    }

    /// Page bounds plus every embedded configuration.
    pub fn consistency_issues(&self) -> Vec<ConsistencyError> {
        let mut issues = Vec::new();
        if let Err(err) = self.validate() {
            warn!(%err, page = self.page, "control plane page violates its bounds");
            issues.push(err);
        }
        for response in &self.control_planes {
            issues.extend(response.consistency_issues());
        }
        issues
    }
}
