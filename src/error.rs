//! Error types shared across the library.
//!
//! Configuration-resource failures and profile-editing failures are kept as
//! separate enums so the front end can match on the variant it cares about.

use crate::models::Mode;
use thiserror::Error;

/// Errors raised while loading robot or controller configuration resources.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No configuration file exists for the requested identifier.
    #[error("configuration '{0}' not found")]
    NotFound(String),

    /// Filesystem-level failure while reading or listing resources.
    #[error("failed to read configuration")]
    Io(#[from] std::io::Error),

    /// The resource exists but is not well-formed JSON of the expected shape.
    #[error("malformed configuration '{name}'")]
    Parse {
        /// Identifier of the offending resource.
        name: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised by profile-editing operations.
///
/// Every rejected operation leaves the profile unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    /// A node with this name is already registered.
    #[error("controller node '{0}' is already registered")]
    DuplicateNode(String),

    /// The named node is not registered in the profile.
    #[error("unknown controller node '{0}'")]
    UnknownNode(String),

    /// A mode-specific operation was invoked while the node is bound to a
    /// different mode (or to none at all).
    #[error("controller node '{node}' is not in {expected} mode")]
    ModeMismatch {
        /// Name of the node the operation targeted.
        node: String,
        /// Mode the operation requires.
        expected: Mode,
    },
}
