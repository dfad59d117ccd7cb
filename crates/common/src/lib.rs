//! Resource model shared by clients of the managed control plane API.
//!
//! Keep wire types, lifecycle tables, and decode/consistency error handling here so consumers do
//! not re-derive them.

#![warn(missing_docs)]

/// Control plane resources and envelopes exchanged with the API.
pub mod api;
/// Decoding and encoding of API payloads.
pub mod codec;
/// Decode, consistency, and transition errors.
pub mod error;
/// Status transition tables for control planes and configurations.
pub mod lifecycle;
/// Three-state presence wrapper for nullable wire fields.
pub mod nullable;
/// OpenAPI component schemas for the resource model.
pub mod openapi;
/// Consistency checks over decoded resources.
pub mod validation;

pub use codec::{decode, decode_str, decode_value, encode, encode_pretty};
pub use error::{ConsistencyError, ModelError, TransitionError};
pub use lifecycle::Lifecycle;
pub use nullable::Nullable;
