//! Short-path plugin for the copy-path shell extension.
//!
//! Turns a file or folder path into its legacy 8.3 form through the
//! platform's short-name facility, and describes itself to the plugin host
//! through a fixed identity and host-owned text resources.

pub mod config;
pub mod error;
pub mod logging;
pub mod platform;
pub mod plugin;

// Re-export commonly used types
pub use config::{LogLevel, PluginConfig, ShortNameFallback};
pub use error::{ConfigurationError, PathError, PathResult};
pub use logging::{LogConfig, LogGuard};
pub use platform::{ShortPathResolver, SystemResolver};
pub use plugin::{
    DescriptionIds, Plugin, PluginId, ResourceId, ShortPathPlugin, ShortPathVariant, StringTable,
    TextResolver, validate_plugins,
};
