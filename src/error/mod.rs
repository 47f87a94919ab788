//! Error types for tree construction and untyped tree input.
//!
//! Serializing a well-typed [`TreeValue`](crate::tree::TreeValue) cannot fail,
//! so every error here originates at a boundary where values arrive without
//! static types: a component reference that is not one of the three known
//! kinds, or a JSON document that does not have the node descriptor shape.
//!
//! All errors are fail-fast. Construction and serialization are deterministic,
//! so retrying the same input reproduces the same error.

use thiserror::Error;

/// An error raised by the node builder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The component reference is neither a compound component, a tag
    /// identifier, nor the fragment sentinel.
    #[error("invalid component kind: expected a tag name, a compound component or null, found {found}")]
    InvalidComponentKind {
        /// A short description of what was supplied instead (e.g. `"number"`).
        found: &'static str,
    },
}

/// An error raised while decoding a JSON-encoded tree.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input was not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// An object in the input does not have the node descriptor shape.
    #[error("malformed node at {path}: {message}")]
    MalformedNode {
        /// Location of the offending value, e.g. `/props/children/2`.
        path: String,
        /// What was wrong with it.
        message: String,
    },

    /// The node builder rejected a component reference.
    #[error("at {path}: {source}")]
    Build {
        /// Location of the offending `tag` value.
        path: String,
        /// The underlying builder error.
        #[source]
        source: BuildError,
    },
}

impl DecodeError {
    /// Returns the location of the offending value, if the error has one.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Json(_) => None,
            Self::MalformedNode { path, .. } | Self::Build { path, .. } => Some(path),
        }
    }
}
