pub mod eight_dot_three;
#[cfg(windows)]
mod win32;

use std::path::{Path, PathBuf};

use crate::error::{PathError, PathResult};

/// The one platform service the short-path plugin consumes: given a path,
/// return its canonical short alias.
pub trait ShortPathResolver: Send + Sync {
    fn short_path(&self, path: &Path) -> PathResult<PathBuf>;
}

/// Resolver backed by the operating system
#[derive(Debug, Default)]
pub struct SystemResolver;

impl ShortPathResolver for SystemResolver {
    fn short_path(&self, path: &Path) -> PathResult<PathBuf> {
        if path.as_os_str().is_empty() {
            return Err(PathError::EmptyPath);
        }

        platform_short_path(path)
    }
}

#[cfg(windows)]
fn platform_short_path(path: &Path) -> PathResult<PathBuf> {
    let short = win32::short_path_name(path)?;
    tracing::trace!(
        target: "platform",
        path = %path.display(),
        short = %short.display(),
        "GetShortPathNameW succeeded"
    );
    Ok(short)
}

#[cfg(not(windows))]
fn platform_short_path(path: &Path) -> PathResult<PathBuf> {
    tracing::debug!(target: "platform", path = %path.display(), "Short paths are a Windows-only facility");
    Err(PathError::Unsupported)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_resolver_rejects_empty_path() {
        let err = SystemResolver.short_path(Path::new("")).unwrap_err();
        assert!(matches!(err, PathError::EmptyPath));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_system_resolver_unsupported_off_windows() {
        let err = SystemResolver.short_path(Path::new("/tmp")).unwrap_err();
        assert!(matches!(err, PathError::Unsupported));
    }

    #[cfg(windows)]
    #[test]
    fn test_system_resolver_missing_entry_is_platform_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does not exist.txt");
        let err = SystemResolver.short_path(&missing).unwrap_err();
        assert!(matches!(err, PathError::Platform { .. }));
    }

    #[cfg(windows)]
    #[test]
    fn test_system_resolver_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("A rather long file name.text");
        std::fs::write(&file, b"x").unwrap();

        let first = SystemResolver.short_path(&file).unwrap();
        let second = SystemResolver.short_path(&file).unwrap();
        assert_eq!(first, second);
        assert!(std::fs::metadata(&first).is_ok());
    }
}
