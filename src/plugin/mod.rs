//! Capability contract shared by every plugin the copy-path host enumerates.
//!
//! A plugin has a fixed identity, a pair of descriptions and a help text
//! (looked up through host-owned resource IDs), and a single transformation
//! from a file-system path to the text that ends up on the clipboard.

pub mod androgynous;
pub mod identity;
pub mod short_path;

pub use identity::validate_plugins;
pub use short_path::{ShortPathPlugin, ShortPathVariant};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::error::{ConfigurationError, PathResult};

/// Index into the host's string table
pub type ResourceId = u16;

/// Identity of a plugin type. Compiled in, never generated at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PluginId(Uuid);

impl PluginId {
    pub const fn from_u128(value: u128) -> Self {
        Self(Uuid::from_u128(value))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Converts to the COM representation used by the shell extension.
    #[cfg(windows)]
    pub fn to_guid(self) -> windows::core::GUID {
        windows::core::GUID::from_u128(self.0.as_u128())
    }
}

impl fmt::Display for PluginId {
    // Registry form: {XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX}
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{:X}}}", self.0)
    }
}

/// The three text resources a plugin is described by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DescriptionIds {
    pub description: ResourceId,
    pub androgynous_description: ResourceId,
    pub help_text: ResourceId,
}

/// Host-supplied lookup from resource ID to display text
pub trait TextResolver {
    fn resolve_text(&self, id: ResourceId) -> Option<String>;
}

impl<F> TextResolver for F
where
    F: Fn(ResourceId) -> Option<String>,
{
    fn resolve_text(&self, id: ResourceId) -> Option<String> {
        self(id)
    }
}

/// In-memory string table
#[derive(Debug, Clone, Default)]
pub struct StringTable {
    entries: HashMap<ResourceId, String>,
}

impl StringTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// English texts for the plugins shipped in this crate.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        short_path::register_builtin_texts(&mut table);
        table
    }

    pub fn insert(&mut self, id: ResourceId, text: impl Into<String>) -> &mut Self {
        self.entries.insert(id, text.into());
        self
    }
}

impl TextResolver for StringTable {
    fn resolve_text(&self, id: ResourceId) -> Option<String> {
        self.entries.get(&id).cloned()
    }
}

/// A path-transforming plugin as seen by the host.
///
/// Implementors supply identity, resource IDs, the androgynous flag and the
/// transformation; text lookup and comparison come for free.
pub trait Plugin: Send + Sync {
    fn id(&self) -> PluginId;

    fn description_ids(&self) -> &DescriptionIds;

    /// Whether the host should show the gender/number-neutral description
    fn is_androgynous(&self) -> bool;

    fn get_path(&self, path: &Path) -> PathResult<PathBuf>;

    fn description(&self, texts: &dyn TextResolver) -> Result<String, ConfigurationError> {
        let id = androgynous::description_resource(self.description_ids(), self.is_androgynous());
        androgynous::resolve(self.id(), id, texts)
    }

    fn help_text(&self, texts: &dyn TextResolver) -> Result<String, ConfigurationError> {
        androgynous::resolve(self.id(), self.description_ids().help_text, texts)
    }

    /// Plugins are the same when they share an identity
    fn same_as(&self, other: &dyn Plugin) -> bool {
        self.id() == other.id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plugin_id_registry_format() {
        let id = PluginId::from_u128(0x0a1b2c3d_4e5f_6a7b_8c9d_0e1f2a3b4c5d);
        assert_eq!(id.to_string(), "{0A1B2C3D-4E5F-6A7B-8C9D-0E1F2A3B4C5D}");
    }

    #[test]
    fn test_plugin_id_serializes_as_uuid() {
        let id = PluginId::from_u128(0x0a1b2c3d_4e5f_6a7b_8c9d_0e1f2a3b4c5d);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"0a1b2c3d-4e5f-6a7b-8c9d-0e1f2a3b4c5d\"");
    }

    #[test]
    fn test_string_table_lookup() {
        let mut table = StringTable::new();
        table.insert(7, "Seven");
        assert_eq!(table.resolve_text(7).as_deref(), Some("Seven"));
        assert_eq!(table.resolve_text(8), None);
    }

    #[test]
    fn test_closure_resolver() {
        let resolver = |id: ResourceId| (id == 1).then(|| "one".to_string());
        assert_eq!(resolver.resolve_text(1).as_deref(), Some("one"));
        assert_eq!(resolver.resolve_text(2), None);
    }

    #[test]
    fn test_builtin_table_is_not_empty() {
        let table = StringTable::builtin();
        let ids = ShortPathVariant::DEFAULT.descriptions;
        assert!(table.resolve_text(ids.description).is_some());
        assert!(table.resolve_text(ids.androgynous_description).is_some());
        assert!(table.resolve_text(ids.help_text).is_some());
    }
}
