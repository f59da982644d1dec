use std::path::PathBuf;
use thiserror::Error;

use crate::plugin::{PluginId, ResourceId};

/// Load-time errors. A plugin that produces one of these must not be
/// registered by the host.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The host's string table has no entry for a resource the plugin uses
    #[error("plugin {plugin} references missing text resource {resource}")]
    MissingResource {
        plugin: PluginId,
        resource: ResourceId,
    },

    /// Two plugin types claim the same identity
    #[error("plugin identity {0} is registered more than once")]
    DuplicateId(PluginId),
}

/// Per-call errors returned by `get_path`. The host decides whether to fall
/// back to the original path or drop the menu entry.
#[derive(Error, Debug)]
pub enum PathError {
    #[error("path is empty")]
    EmptyPath,

    /// The path cannot be handed to the platform (e.g. it contains a NUL)
    #[error("invalid path {}", .path.display())]
    InvalidPath { path: PathBuf },

    /// The platform call itself failed
    #[error("platform could not shorten {}: {source}", .path.display())]
    Platform {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The platform answered, but with components that have no 8.3 alias
    #[error("no short name available for {}", .path.display())]
    ShortNameUnavailable { path: PathBuf },

    #[error("short path resolution is not supported on this platform")]
    Unsupported,
}

impl PathError {
    /// Check if the OS declined to produce a short form for an otherwise
    /// well-formed request
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            PathError::Platform { .. } | PathError::ShortNameUnavailable { .. }
        )
    }
}

/// Result type alias for path operations
pub type PathResult<T> = Result<T, PathError>;
