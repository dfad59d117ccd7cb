use thiserror::Error;
use uuid::Uuid;

/// Failure to decode or encode an API payload.
///
/// Every variant is surfaced to the caller; unknown values are never coerced into a default so
/// that client/server version skew stays visible.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A closed enumeration received a value outside its set.
    #[error("unknown enum value `{value}`, expected {expected}")]
    UnknownEnumValue {
        /// Value found on the wire.
        value: String,
        /// Human readable list of accepted values.
        expected: String,
    },
    /// A required field was absent from the payload.
    #[error("missing required field `{field}`")]
    MissingRequiredField {
        /// Wire name of the missing field.
        field: String,
    },
    /// An identifier field was present but not a valid UUID.
    #[error("malformed identifier `{value}`: {reason}")]
    MalformedIdentifier {
        /// Raw value found on the wire.
        value: String,
        /// Parser diagnostic.
        reason: String,
    },
    /// The payload is not valid JSON or has the wrong shape.
    #[error("invalid payload: {message}")]
    InvalidPayload {
        /// Decoder diagnostic, including position when known.
        message: String,
    },
    /// A value could not be encoded.
    #[error("failed to encode payload: {message}")]
    Encode {
        /// Encoder diagnostic.
        message: String,
    },
}

impl ModelError {
    pub(crate) fn unknown_enum_value<'a>(
        value: &str,
        accepted: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let names = accepted
            .into_iter()
            .map(|name| format!("`{name}`"))
            .collect::<Vec<_>>()
            .join(", ");
        ModelError::UnknownEnumValue {
            value: value.to_string(),
            expected: format!("one of {names}"),
        }
    }

    /// Short machine-friendly label for the error class.
    pub fn code(&self) -> &'static str {
        match self {
            ModelError::UnknownEnumValue { .. } => "unknown_enum_value",
            ModelError::MissingRequiredField { .. } => "missing_required_field",
            ModelError::MalformedIdentifier { .. } => "malformed_identifier",
            ModelError::InvalidPayload { .. } => "invalid_payload",
            ModelError::Encode { .. } => "encode",
        }
    }
}

/// A decoded resource that is structurally valid but violates a model invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsistencyError {
    /// A configuration reports `ready` without a deployed version.
    #[error("configuration {configuration_id} is ready but has no current version")]
    ReadyWithoutCurrentVersion {
        /// Offending configuration.
        configuration_id: Uuid,
    },
    /// A configuration reports `ready` while still diverging from its desired version.
    #[error(
        "configuration {configuration_id} is ready at {current} but desires {desired}; a transition is pending or was missed"
    )]
    VersionDrift {
        /// Offending configuration.
        configuration_id: Uuid,
        /// Version presently deployed.
        current: String,
        /// Version the system is converging toward.
        desired: String,
    },
    /// A list page carries more items than its page size.
    #[error("page holds {items} control planes but size is {size}")]
    PageOverflow {
        /// Items present on the page.
        items: usize,
        /// Declared page size.
        size: u32,
    },
    /// A list reports fewer total matches than the page itself carries.
    #[error("total count {count} is smaller than the {items} control planes on the page")]
    CountBelowPage {
        /// Declared total count.
        count: u32,
        /// Items present on the page.
        items: usize,
    },
}

impl ConsistencyError {
    /// Short machine-friendly label for the error class.
    pub fn code(&self) -> &'static str {
        match self {
            ConsistencyError::ReadyWithoutCurrentVersion { .. } => "ready_without_current_version",
            ConsistencyError::VersionDrift { .. } => "version_drift",
            ConsistencyError::PageOverflow { .. } => "page_overflow",
            ConsistencyError::CountBelowPage { .. } => "count_below_page",
        }
    }
}

/// A status change that the lifecycle tables do not allow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// Moving between two states is not listed in the transition table.
    #[error("invalid {kind} transition {from} -> {to}")]
    Invalid {
        /// Which state machine rejected the step.
        kind: &'static str,
        /// State observed first.
        from: String,
        /// State observed next.
        to: String,
    },
    /// Removal was observed before the control plane entered `deleting`.
    #[error("control plane cannot be removed while {from}")]
    PrematureRemoval {
        /// State the control plane was in.
        from: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_enum_value_lists_accepted_values() {
        let err = ModelError::unknown_enum_value("archived", ["ready", "deleting"]);
        assert_eq!(
            err.to_string(),
            "unknown enum value `archived`, expected one of `ready`, `deleting`"
        );
        assert_eq!(err.code(), "unknown_enum_value");
    }

    #[test]
    fn consistency_errors_render_context() {
        let err = ConsistencyError::PageOverflow { items: 11, size: 10 };
        assert_eq!(err.to_string(), "page holds 11 control planes but size is 10");
        assert_eq!(err.code(), "page_overflow");
    }
}
