//! Error types for the neuron library.
//!
//! Only *input* problems are errors: a layer that cannot be read or parsed, an
//! inventory without the requested host, a malformed override. Rule violations
//! found while validating a resolved configuration are never raised as errors;
//! they are collected into a [`ValidationReport`](crate::ValidationReport).

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a neuron error.
///
/// # Examples
///
/// ```
/// use neuron::{Error, Result};
///
/// fn example_operation() -> Result<&'static str> {
///     Ok("1.0.0")
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the neuron library.
#[derive(Debug, Error)]
pub enum Error {
    /// A layer file could not be read.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The path that could not be read.
        path: PathBuf,
        /// The reason the path is unusable.
        reason: String,
    },

    /// A layer parsed, but cannot be used as a mapping of named keys.
    #[error("invalid layer '{layer}': {reason}")]
    InvalidLayer {
        /// Name of the offending layer.
        layer: String,
        /// What was found instead.
        reason: String,
    },

    /// A `KEY=VALUE` override could not be parsed.
    #[error("invalid override '{raw}': {reason}")]
    InvalidOverride {
        /// The override as supplied.
        raw: String,
        /// The reason it was rejected.
        reason: String,
    },

    /// The requested host is not present in the inventory.
    #[error("host '{host}' not found in inventory")]
    HostNotFound {
        /// The requested host name.
        host: String,
    },

    /// The inventory declares no hosts at all.
    #[error("no hosts found in inventory")]
    NoHosts,

    /// A YAML document could not be parsed.
    #[error("configuration error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A value could not be converted to or from JSON.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if the error was caused by unusable input (as opposed to I/O or
    /// serialization of output).
    ///
    /// # Examples
    ///
    /// ```
    /// use neuron::Error;
    ///
    /// let err = Error::HostNotFound { host: "web-1".to_string() };
    /// assert!(err.is_input_error());
    /// ```
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidPath { .. }
                | Self::InvalidLayer { .. }
                | Self::InvalidOverride { .. }
                | Self::HostNotFound { .. }
                | Self::NoHosts
                | Self::Yaml(_)
        )
    }
}
