//! Decoding and encoding of API payloads.
//!
//! Decoding maps every `serde_json` failure onto [`ModelError`] so callers can tell an unknown
//! enum value (version skew) from a missing field or a malformed identifier.

use std::any::type_name;

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use serde_json::error::Category;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::ModelError;

const MALFORMED_IDENTIFIER: &str = "malformed identifier ";
const MISSING_FIELD: &str = "missing field `";
const UNKNOWN_ENUM_VALUE: &str = "unknown enum value ";

/// Length of the canonical `8-4-4-4-12` identifier text.
const HYPHENATED_LEN: usize = 36;

/// Decode a resource from raw JSON bytes.
pub fn decode<T: DeserializeOwned>(payload: &[u8]) -> Result<T, ModelError> {
    finish(serde_json::from_slice(payload))
}

/// Decode a resource from a JSON string.
pub fn decode_str<T: DeserializeOwned>(payload: &str) -> Result<T, ModelError> {
    finish(serde_json::from_str(payload))
}

/// Decode a resource from an already parsed JSON value.
pub fn decode_value<T: DeserializeOwned>(payload: Value) -> Result<T, ModelError> {
    finish(serde_json::from_value(payload))
}

/// Encode a resource to its compact wire form.
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, ModelError> {
    serde_json::to_vec(value).map_err(|err| ModelError::Encode {
        message: err.to_string(),
    })
}

/// Encode a resource as indented JSON text.
pub fn encode_pretty<T: Serialize>(value: &T) -> Result<String, ModelError> {
    serde_json::to_string_pretty(value).map_err(|err| ModelError::Encode {
        message: err.to_string(),
    })
}

fn finish<T>(result: serde_json::Result<T>) -> Result<T, ModelError> {
    match result {
        Ok(value) => {
            debug!(resource = type_name::<T>(), "decoded resource");
            Ok(value)
        }
        Err(err) => {
            let err = classify(&err);
            warn!(resource = type_name::<T>(), code = err.code(), %err, "failed to decode resource");
            Err(err)
        }
    }
}

/// Carry a model error through serde's string-only custom error channel.
///
/// The offending value is JSON-quoted so [`classify`] can recover it verbatim.
pub(crate) fn wire_error<E: de::Error>(err: ModelError) -> E {
    match err {
        ModelError::UnknownEnumValue { value, expected } => E::custom(format!(
            "{UNKNOWN_ENUM_VALUE}{}, expected {expected}",
            quote(&value)
        )),
        ModelError::MalformedIdentifier { value, reason } => E::custom(format!(
            "{MALFORMED_IDENTIFIER}{}: {reason}",
            quote(&value)
        )),
        other => E::custom(other),
    }
}

fn classify(err: &serde_json::Error) -> ModelError {
    let message = without_position(err);
    if err.classify() != Category::Data {
        return ModelError::InvalidPayload { message };
    }

    if let Some(rest) = message.strip_prefix(MISSING_FIELD) {
        return ModelError::MissingRequiredField {
            field: until_backtick(rest).to_string(),
        };
    }

    if let Some(rest) = message.strip_prefix(UNKNOWN_ENUM_VALUE)
        && let Some((value, tail)) = split_quoted(rest)
    {
        return ModelError::UnknownEnumValue {
            value,
            expected: tail.strip_prefix(", expected ").unwrap_or(tail).to_string(),
        };
    }

    if let Some(rest) = message.strip_prefix(MALFORMED_IDENTIFIER)
        && let Some((value, tail)) = split_quoted(rest)
    {
        return ModelError::MalformedIdentifier {
            value,
            reason: tail.strip_prefix(": ").unwrap_or(tail).to_string(),
        };
    }

    ModelError::InvalidPayload { message }
}

fn without_position(err: &serde_json::Error) -> String {
    let rendered = err.to_string();
    if err.line() == 0 {
        return rendered;
    }
    match rendered.rsplit_once(" at line ") {
        Some((message, _)) => message.to_string(),
        None => rendered,
    }
}

fn until_backtick(text: &str) -> &str {
    text.split('`').next().unwrap_or(text)
}

fn quote(value: &str) -> String {
    Value::from(value).to_string()
}

/// Split a leading JSON string literal off `text`.
fn split_quoted(text: &str) -> Option<(String, &str)> {
    let mut stream = serde_json::Deserializer::from_str(text).into_iter::<String>();
    let value = stream.next()?.ok()?;
    Some((value, &text[stream.byte_offset()..]))
}

/// Parse an identifier in its hyphenated form; braced, URN and bare-hex spellings are rejected.
pub(crate) fn parse_identifier(raw: &str) -> Result<Uuid, ModelError> {
    if raw.len() != HYPHENATED_LEN {
        return Err(ModelError::MalformedIdentifier {
            value: raw.to_string(),
            reason: format!(
                "expected {HYPHENATED_LEN} characters in hyphenated form, found {}",
                raw.len()
            ),
        });
    }
    Uuid::parse_str(raw).map_err(|err| ModelError::MalformedIdentifier {
        value: raw.to_string(),
        reason: err.to_string(),
    })
}

/// Deserialize a UUID-shaped field, reporting any unusable value as a malformed identifier.
pub(crate) fn deserialize_identifier<'de, D>(deserializer: D) -> Result<Uuid, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(raw) => parse_identifier(&raw).map_err(wire_error),
        other => Err(wire_error(ModelError::MalformedIdentifier {
            reason: format!("expected a string, found {}", json_type(&other)),
            value: other.to_string(),
        })),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
