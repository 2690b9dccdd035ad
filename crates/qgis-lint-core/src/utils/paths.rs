//! Dotted Python module path utilities.

/// Extracts the first segment of a dotted path.
#[must_use]
pub fn first_segment(module: &str) -> &str {
    module.split('.').next().unwrap_or(module)
}

/// Replaces the first segment of a dotted path.
///
/// # Example
///
/// ```
/// use qgis_lint_core::utils::paths::replace_first_segment;
/// assert_eq!(replace_first_segment("PyQt5.QtCore", "qgis.PyQt"), "qgis.PyQt.QtCore");
/// ```
#[must_use]
pub fn replace_first_segment(module: &str, replacement: &str) -> String {
    match module.split_once('.') {
        Some((_, rest)) => format!("{replacement}.{rest}"),
        None => replacement.to_string(),
    }
}
