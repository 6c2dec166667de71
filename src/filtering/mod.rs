// src/filtering/mod.rs

//! Selects the changed files worth inspecting.
//!
//! Only files the pull request *added* can introduce a new component, and only
//! JavaScript/TypeScript sources can declare one.

mod extension;

pub use extension::{has_source_extension, SOURCE_EXTENSIONS};

use crate::core_types::{ChangeStatus, ChangedFile};

/// Returns the added source files from `files`, preserving input order.
///
/// # Examples
///
/// ```
/// use component_checklist::core_types::{ChangedFile, ChangeStatus};
/// use component_checklist::filtering::filter_added_sources;
///
/// let files = vec![
///     ChangedFile::new("src/Card.tsx", ChangeStatus::Added),
///     ChangedFile::new("src/util.ts", ChangeStatus::Modified),
///     ChangedFile::new("scripts/build.py", ChangeStatus::Added),
///     ChangedFile::new("src/List.jsx", ChangeStatus::Added),
/// ];
///
/// let selected: Vec<&str> = filter_added_sources(&files)
///     .iter()
///     .map(|f| f.filename.as_str())
///     .collect();
/// assert_eq!(selected, ["src/Card.tsx", "src/List.jsx"]);
/// ```
pub fn filter_added_sources(files: &[ChangedFile]) -> Vec<&ChangedFile> {
    files
        .iter()
        .filter(|file| file.status == ChangeStatus::Added && has_source_extension(&file.filename))
        .collect()
}
