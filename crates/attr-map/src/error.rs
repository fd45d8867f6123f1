//! Error types for map operations.
//!
//! Only a few operations can fail: deleting a key that is not there, and
//! loading a map from JSON. Missing attribute reads and failing stylers are
//! reported through `tracing` instead and never surface here.

use crate::AutoStr;
use miette::Diagnostic;
use thiserror::Error;

/// Alias for Result type with map errors
pub type DictResult<T> = std::result::Result<T, DictError>;

#[derive(Error, Diagnostic, Debug)]
pub enum DictError {
    /// Delete of a key the map does not hold
    #[error("no key \"{key}\" in this dictionary")]
    #[diagnostic(code(attr_map_E0001), help("valid keys are [{valid}]"))]
    KeyNotFound { key: AutoStr, valid: String },

    /// Input that should have been a mapping was something else
    #[error("expected a mapping, found {found}")]
    #[diagnostic(
        code(attr_map_E0002),
        help("Only JSON objects can be loaded into a dictionary")
    )]
    NotAMapping { found: String },

    /// JSON parsing or serialization failed
    #[error("json error: {0}")]
    #[diagnostic(code(attr_map_E0003))]
    Json(#[from] serde_json::Error),
}

impl DictError {
    pub fn key_not_found<'a>(
        key: impl Into<AutoStr>,
        valid: impl IntoIterator<Item = &'a AutoStr>,
    ) -> Self {
        let valid = valid
            .into_iter()
            .map(|k| crate::quoted(k).to_string())
            .collect::<Vec<_>>()
            .join(", ");
        DictError::KeyNotFound {
            key: key.into(),
            valid,
        }
    }

    pub fn is_key_not_found(&self) -> bool {
        matches!(self, DictError::KeyNotFound { .. })
    }
}
