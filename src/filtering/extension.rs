// src/filtering/extension.rs

/// Filename suffixes recognized as JavaScript/TypeScript sources.
pub const SOURCE_EXTENSIONS: [&str; 4] = [".js", ".jsx", ".ts", ".tsx"];

/// Checks if a filename ends with one of [`SOURCE_EXTENSIONS`].
///
/// The comparison is a plain, case-sensitive suffix match: `App.JSX` and
/// `types.d.ts.map` are not sources, while `types.d.ts` is.
///
/// # Examples
///
/// ```
/// use component_checklist::filtering::has_source_extension;
///
/// assert!(has_source_extension("src/components/Avatar.tsx"));
/// assert!(has_source_extension("index.js"));
/// assert!(!has_source_extension("styles.css"));
/// assert!(!has_source_extension("Legacy.JSX"));
/// ```
pub fn has_source_extension(filename: &str) -> bool {
    SOURCE_EXTENSIONS.iter().any(|ext| filename.ends_with(ext))
}
