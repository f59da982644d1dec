use std::path::{Path, PathBuf};

use super::{DescriptionIds, Plugin, PluginId, ResourceId, StringTable};
use crate::config::ShortNameFallback;
use crate::error::{PathError, PathResult};
use crate::platform::{ShortPathResolver, SystemResolver, eight_dot_three};

pub const IDS_SHORT_PATH_DESCRIPTION: ResourceId = 120;
pub const IDS_SHORT_PATH_ANDROGYNOUS_DESCRIPTION: ResourceId = 121;
pub const IDS_SHORT_PATH_HELP_TEXT: ResourceId = 122;

/// Identity, texts and androgynous flag of one member of the short-path
/// plugin family. Variants share the transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortPathVariant {
    pub id: PluginId,
    pub descriptions: DescriptionIds,
    pub androgynous: bool,
}

impl ShortPathVariant {
    pub const DEFAULT: ShortPathVariant = ShortPathVariant {
        id: PluginId::from_u128(0x330ac6c3_5c6b_4e1b_9f3a_8a1d2e3b6c07),
        descriptions: DescriptionIds {
            description: IDS_SHORT_PATH_DESCRIPTION,
            androgynous_description: IDS_SHORT_PATH_ANDROGYNOUS_DESCRIPTION,
            help_text: IDS_SHORT_PATH_HELP_TEXT,
        },
        androgynous: true,
    };
}

pub(crate) fn register_builtin_texts(table: &mut StringTable) {
    table
        .insert(IDS_SHORT_PATH_DESCRIPTION, "Copy Short Path")
        .insert(IDS_SHORT_PATH_ANDROGYNOUS_DESCRIPTION, "Short Path")
        .insert(
            IDS_SHORT_PATH_HELP_TEXT,
            "Copies the short (8.3) path of the selected files and folders",
        );
}

/// Plugin that returns the short path of a file or folder.
///
/// Deliberately neither `Clone` nor `Copy`: the host constructs one per
/// plugin type and hands out references.
#[derive(Debug)]
pub struct ShortPathPlugin<R = SystemResolver> {
    variant: ShortPathVariant,
    resolver: R,
    fallback: ShortNameFallback,
}

impl ShortPathPlugin<SystemResolver> {
    pub fn new() -> Self {
        Self::from_variant(ShortPathVariant::DEFAULT)
    }

    /// Builds a derived plugin that reuses the transformation under its own
    /// identity and texts.
    pub fn from_variant(variant: ShortPathVariant) -> Self {
        Self::with_resolver(variant, SystemResolver)
    }
}

impl Default for ShortPathPlugin<SystemResolver> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ShortPathResolver> ShortPathPlugin<R> {
    pub fn with_resolver(variant: ShortPathVariant, resolver: R) -> Self {
        Self {
            variant,
            resolver,
            fallback: ShortNameFallback::default(),
        }
    }

    /// Sets what `get_path` returns when the platform declines to shorten
    pub fn with_fallback(mut self, fallback: ShortNameFallback) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn variant(&self) -> &ShortPathVariant {
        &self.variant
    }

    pub fn fallback(&self) -> ShortNameFallback {
        self.fallback
    }

    fn shorten(&self, path: &Path) -> PathResult<PathBuf> {
        if path.as_os_str().is_empty() {
            return Err(PathError::EmptyPath);
        }

        let short = self.resolver.short_path(path)?;

        // With short-name generation disabled the platform returns the long
        // names unchanged instead of failing
        let short_str = short.to_string_lossy();
        if !eight_dot_three::is_short_path(&short_str) {
            return Err(PathError::ShortNameUnavailable {
                path: path.to_path_buf(),
            });
        }

        Ok(short)
    }
}

impl<R: ShortPathResolver> Plugin for ShortPathPlugin<R> {
    fn id(&self) -> PluginId {
        self.variant.id
    }

    fn description_ids(&self) -> &DescriptionIds {
        &self.variant.descriptions
    }

    fn is_androgynous(&self) -> bool {
        self.variant.androgynous
    }

    fn get_path(&self, path: &Path) -> PathResult<PathBuf> {
        match self.shorten(path) {
            Ok(short) => {
                tracing::debug!(
                    target: "plugin::short_path",
                    path = %path.display(),
                    short = %short.display(),
                    "Resolved short path"
                );
                Ok(short)
            }
            Err(e) if e.is_unavailable() && self.fallback == ShortNameFallback::OriginalPath => {
                tracing::debug!(
                    target: "plugin::short_path",
                    path = %path.display(),
                    error = %e,
                    "No short path, falling back to original"
                );
                Ok(path.to_path_buf())
            }
            Err(e) => {
                tracing::debug!(target: "plugin::short_path", path = %path.display(), error = %e, "Short path unavailable");
                Err(e)
            }
        }
    }
}
