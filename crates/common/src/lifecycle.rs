//! Status transition tables.
//!
//! Control plane:
//!
//! | From | To |
//! |---|---|
//! | provisioning | ready |
//! | ready | updating |
//! | updating | ready |
//! | ready | deleting |
//! | deleting | (removed) |
//!
//! Configuration:
//!
//! | From | To |
//! |---|---|
//! | installationQueued | installing |
//! | installing | ready |
//! | ready | upgradeQueued |
//! | upgradeQueued | upgrading |
//! | upgrading | ready |
//!
//! Anything else is a data-integrity error, not something to interpret.

use std::fmt;

use crate::api::{ConfigurationStatus, Status};
use crate::error::TransitionError;

/// A closed state machine over a status enumeration.
pub trait Lifecycle: Copy + Eq + fmt::Display + 'static {
    /// Name used in diagnostics.
    const KIND: &'static str;
    /// State a new entity starts in.
    const INITIAL: Self;

    /// States reachable in a single step.
    fn successors(self) -> &'static [Self];

    /// Whether `next` is reachable from `self` in a single step.
    fn can_transition_to(self, next: Self) -> bool {
        self.successors().contains(&next)
    }

    /// Move to `next`, rejecting steps the table does not list.
    fn transition_to(self, next: Self) -> Result<Self, TransitionError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(TransitionError::Invalid {
                kind: Self::KIND,
                from: self.to_string(),
                to: next.to_string(),
            })
        }
    }
}

impl Lifecycle for Status {
    const KIND: &'static str = "control plane";
    const INITIAL: Self = Status::Provisioning;

    fn successors(self) -> &'static [Self] {
        match self {
            Status::Provisioning => &[Status::Ready],
            Status::Ready => &[Status::Updating, Status::Deleting],
            Status::Updating => &[Status::Ready],
            Status::Deleting => &[],
        }
    }
}

impl Status {
    /// `deleting` has no outgoing transition; the entity is removed afterwards.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Status::Deleting)
    }

    /// `ready` is the only resting state; every other state is transient.
    pub fn is_stable(&self) -> bool {
        matches!(self, Status::Ready)
    }

    /// Whether the entity may disappear from the system.
    pub fn can_be_removed(&self) -> bool {
        self.is_terminal()
    }

    /// Validate that the entity may be removed from this state.
    pub fn remove(self) -> Result<(), TransitionError> {
        if self.can_be_removed() {
            Ok(())
        } else {
            Err(TransitionError::PrematureRemoval {
                from: self.to_string(),
            })
        }
    }
}

impl Lifecycle for ConfigurationStatus {
    const KIND: &'static str = "configuration";
    const INITIAL: Self = ConfigurationStatus::InstallationQueued;

    fn successors(self) -> &'static [Self] {
        match self {
            ConfigurationStatus::InstallationQueued => &[ConfigurationStatus::Installing],
            ConfigurationStatus::Installing => &[ConfigurationStatus::Ready],
            ConfigurationStatus::Ready => &[ConfigurationStatus::UpgradeQueued],
            ConfigurationStatus::UpgradeQueued => &[ConfigurationStatus::Upgrading],
            ConfigurationStatus::Upgrading => &[ConfigurationStatus::Ready],
        }
    }
}
