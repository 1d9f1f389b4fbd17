/// Source path display normalization
///
/// PMD reports carry absolute on-disk paths. For review, everything up to
/// and including the Maven-style source root is noise; rows show the
/// package path only.

/// Marker separating the build layout from the package path.
const SOURCE_ROOT_MARKER: &str = "main/java";

/// Shorten a report path for display.
///
/// Keeps everything after the last `main/java` occurrence, retaining the
/// separator that follows it: `/a/b/src/main/java/com/x/Y.java` becomes
/// `/com/x/Y.java`. Paths without the marker are returned unchanged.
pub fn display_source_path(path: &str) -> &str {
    match path.rfind(SOURCE_ROOT_MARKER) {
        Some(idx) => &path[idx + SOURCE_ROOT_MARKER.len()..],
        None => path,
    }
}
