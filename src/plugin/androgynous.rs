//! Text lookup shared by internal plugins that carry an androgynous
//! (gender/number-neutral) description next to their regular one.

use super::{DescriptionIds, PluginId, ResourceId, TextResolver};
use crate::error::ConfigurationError;

/// Picks which description resource the host should display
pub fn description_resource(ids: &DescriptionIds, androgynous: bool) -> ResourceId {
    if androgynous {
        ids.androgynous_description
    } else {
        ids.description
    }
}

/// Resolves a resource through the host's table. A miss is a wiring defect
/// of the plugin, not a runtime condition.
pub fn resolve(
    plugin: PluginId,
    resource: ResourceId,
    texts: &dyn TextResolver,
) -> Result<String, ConfigurationError> {
    texts.resolve_text(resource).ok_or_else(|| {
        tracing::error!(target: "plugin", %plugin, resource, "Missing text resource");
        ConfigurationError::MissingResource { plugin, resource }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::StringTable;

    const IDS: DescriptionIds = DescriptionIds {
        description: 1,
        androgynous_description: 2,
        help_text: 3,
    };

    #[test]
    fn test_description_resource_selection() {
        assert_eq!(description_resource(&IDS, false), 1);
        assert_eq!(description_resource(&IDS, true), 2);
    }

    #[test]
    fn test_resolve_missing_resource() {
        let plugin = PluginId::from_u128(1);
        let table = StringTable::new();
        let err = resolve(plugin, 42, &table).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::MissingResource {
                plugin,
                resource: 42
            }
        );
    }

    #[test]
    fn test_resolve_present_resource() {
        let mut table = StringTable::new();
        table.insert(3, "Help");
        assert_eq!(resolve(PluginId::from_u128(1), 3, &table).unwrap(), "Help");
    }
}
