//! 8.3 name rules, used to tell a real short path from a long path the
//! platform handed back unchanged.

const MAX_BASE_LEN: usize = 8;
const MAX_EXTENSION_LEN: usize = 3;
const FORBIDDEN: &[char] = &[
    '"', '*', '+', ',', '/', ':', ';', '<', '=', '>', '?', '[', '\\', ']', '|',
];

/// Returns true if `name` is already a legal 8.3 name.
///
/// Case is not checked: the platform keeps an existing short name such as
/// `data.txt` as-is instead of upper-casing it.
pub fn is_short_component(name: &str) -> bool {
    if name == "." || name == ".." {
        return true;
    }

    let (base, extension) = match name.split_once('.') {
        Some((base, extension)) => {
            if extension.is_empty() || extension.contains('.') {
                return false;
            }
            (base, Some(extension))
        }
        None => (name, None),
    };

    let base_len = base.chars().count();
    if base_len == 0 || base_len > MAX_BASE_LEN {
        return false;
    }
    if let Some(extension) = extension {
        if extension.chars().count() > MAX_EXTENSION_LEN {
            return false;
        }
    }

    name.chars()
        .filter(|c| *c != '.')
        .all(|c| !c.is_whitespace() && !c.is_control() && !FORBIDDEN.contains(&c))
}

/// Splits a Windows path into its name components, skipping any drive,
/// device (`\\?\`, `\\.\`) or UNC (`\\server\share`) prefix.
pub fn components(path: &str) -> impl Iterator<Item = &str> {
    strip_prefix(path)
        .split(['\\', '/'])
        .filter(|component| !component.is_empty())
}

/// Returns true if every named component of `path` is a legal 8.3 name.
pub fn is_short_path(path: &str) -> bool {
    components(path).all(is_short_component)
}

fn strip_prefix(path: &str) -> &str {
    // Device namespaces: the root after the prefix (drive, UNC share, volume
    // GUID, GLOBALROOT device) is never checked
    if let Some(rest) = path
        .strip_prefix(r"\\?\")
        .or_else(|| path.strip_prefix(r"\\.\"))
    {
        if starts_with_ignore_case(rest, r"UNC\") {
            return skip_components(&rest[4..], 2);
        }
        if starts_with_ignore_case(rest, r"GLOBALROOT\") {
            // GLOBALROOT\Device\<name>
            return skip_components(rest, 3);
        }
        if is_drive(rest) {
            return &rest[2..];
        }
        return skip_components(rest, 1);
    }

    if let Some(rest) = path.strip_prefix(r"\\") {
        // server and share names are not subject to short-name generation
        return skip_components(rest, 2);
    }

    if is_drive(path) {
        return &path[2..];
    }
    path
}

fn is_drive(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

fn starts_with_ignore_case(path: &str, prefix: &str) -> bool {
    path.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

fn skip_components(path: &str, count: usize) -> &str {
    let mut rest = path;
    for _ in 0..count {
        rest = match rest.find(['\\', '/']) {
            Some(index) => &rest[index + 1..],
            None => "",
        };
    }
    rest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_generated_short_names() {
        assert!(is_short_component("PROGRA~1"));
        assert!(is_short_component("EXAMPL~1"));
        assert!(is_short_component("LONGFI~1.TXT"));
    }

    #[test]
    fn test_accepts_names_that_are_already_short() {
        assert!(is_short_component("data.txt"));
        assert!(is_short_component("Windows"));
        assert!(is_short_component("a"));
        assert!(is_short_component(".."));
    }

    #[test]
    fn test_rejects_long_names() {
        assert!(!is_short_component("Program Files"));
        assert!(!is_short_component("longname123"));
        assert!(!is_short_component("archive.tar.gz"));
        assert!(!is_short_component("readme.markdown"));
        assert!(!is_short_component("a+b.txt"));
        assert!(!is_short_component(".gitignore"));
        assert!(!is_short_component("trailing."));
    }

    #[test]
    fn test_components_skip_drive_prefix() {
        let parts: Vec<_> = components(r"C:\PROGRA~1\data.txt").collect();
        assert_eq!(parts, vec!["PROGRA~1", "data.txt"]);
    }

    #[test]
    fn test_components_skip_unc_prefix() {
        let parts: Vec<_> = components(r"\\fileserver\Shared Documents\REPORT~1.DOC").collect();
        assert_eq!(parts, vec!["REPORT~1.DOC"]);

        let parts: Vec<_> = components(r"\\?\UNC\fileserver\Shared Documents\a.txt").collect();
        assert_eq!(parts, vec!["a.txt"]);
    }

    #[test]
    fn test_components_skip_unc_prefix_in_any_case() {
        let parts: Vec<_> = components(r"\\?\Unc\srv\share\a.txt").collect();
        assert_eq!(parts, vec!["a.txt"]);
    }

    #[test]
    fn test_components_skip_volume_guid_root() {
        let path = r"\\?\Volume{0b1c2d3e-4f50-6172-8394-a5b6c7d8e9f0}\PROGRA~1\data.txt";
        let parts: Vec<_> = components(path).collect();
        assert_eq!(parts, vec!["PROGRA~1", "data.txt"]);
        assert!(is_short_path(path));
        assert!(!is_short_path(
            r"\\?\Volume{0b1c2d3e-4f50-6172-8394-a5b6c7d8e9f0}\Program Files"
        ));
    }

    #[test]
    fn test_components_skip_device_roots() {
        let parts: Vec<_> =
            components(r"\\?\GLOBALROOT\Device\HarddiskVolume3\PROGRA~1").collect();
        assert_eq!(parts, vec!["PROGRA~1"]);

        let parts: Vec<_> = components(r"\\.\C:\PROGRA~1").collect();
        assert_eq!(parts, vec!["PROGRA~1"]);
    }

    #[test]
    fn test_components_skip_verbatim_drive_prefix() {
        let parts: Vec<_> = components(r"\\?\C:\PROGRA~1").collect();
        assert_eq!(parts, vec!["PROGRA~1"]);
    }

    #[test]
    fn test_is_short_path() {
        assert!(is_short_path(r"C:\PROGRA~1\EXAMPL~1\data.txt"));
        assert!(is_short_path("C:/PROGRA~1/"));
        assert!(!is_short_path(r"C:\Program Files\Example App\data.txt"));
    }
}
