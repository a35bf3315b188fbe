//! Virtual path utilities.
//!
//! Paths are normalized, forward-slash separated strings with no leading or
//! trailing separator. The empty string denotes the implicit root, which has
//! no backing record in the store.

/// Join a parent path and a segment name into a full path.
///
/// When `path` is empty the result is just `name`: root-level items have a
/// full path equal to their own name.
pub fn join_path(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{path}/{name}")
    }
}

/// Strip the final segment from a path.
///
/// A single-segment path yields the empty string, i.e. the implicit root.
pub fn parent_path(path: &str) -> String {
    match path.rfind('/') {
        Some(idx) => path[..idx].to_string(),
        None => String::new(),
    }
}

/// Return the final segment of a path, or the path itself when it has only
/// one segment.
pub fn last_segment(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Derive the file extension from a segment name, including the leading dot
/// (e.g. `".txt"`). Returns `None` when the name has no extension or ends
/// with a bare dot.
pub fn extension_of(name: &str) -> Option<String> {
    let idx = name.rfind('.')?;
    let ext = &name[idx..];
    if ext == "." { None } else { Some(ext.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_path_with_parent() {
        assert_eq!(join_path("animals", "dogs"), "animals/dogs");
        assert_eq!(join_path("animals/dogs", "somedog.txt"), "animals/dogs/somedog.txt");
    }

    #[test]
    fn test_join_path_at_root() {
        assert_eq!(join_path("", "animals"), "animals");
    }

    #[test]
    fn test_parent_path_strips_last_segment() {
        assert_eq!(parent_path("people/workers/dogs"), "people/workers");
        assert_eq!(parent_path("animals/dogs"), "animals");
    }

    #[test]
    fn test_parent_path_of_single_segment_is_root() {
        assert_eq!(parent_path("animals"), "");
    }

    #[test]
    fn test_last_segment() {
        assert_eq!(last_segment("animals/dogs/somedog.txt"), "somedog.txt");
        assert_eq!(last_segment("animals"), "animals");
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("somedog.txt").as_deref(), Some(".txt"));
        assert_eq!(extension_of("archive.tar.gz").as_deref(), Some(".gz"));
        assert_eq!(extension_of("README"), None);
        assert_eq!(extension_of("dot."), None);
    }
}
