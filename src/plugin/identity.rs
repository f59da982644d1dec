use std::collections::HashSet;

use super::{Plugin, TextResolver, androgynous};
use crate::error::ConfigurationError;

/// Start-up self-test over the plugins a host is about to register: every
/// identity is distinct and every text resource resolves.
pub fn validate_plugins(
    plugins: &[&dyn Plugin],
    texts: &dyn TextResolver,
) -> Result<(), ConfigurationError> {
    let mut seen = HashSet::with_capacity(plugins.len());

    for plugin in plugins {
        let id = plugin.id();
        if !seen.insert(id) {
            tracing::error!(target: "plugin::identity", %id, "Duplicate plugin identity");
            return Err(ConfigurationError::DuplicateId(id));
        }

        // The host may show either description depending on the selection
        let ids = plugin.description_ids();
        for resource in [ids.description, ids.androgynous_description, ids.help_text] {
            androgynous::resolve(id, resource, texts)?;
        }
    }

    tracing::debug!(target: "plugin::identity", count = plugins.len(), "Plugin identities validated");
    Ok(())
}
