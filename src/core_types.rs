//! Defines core data structures used throughout the detection pipeline.
//!
//! `ChangedFile` is the caller-supplied input, `DetectionVerdict` the result.

use serde::{Deserialize, Serialize};

/// Change status of a file in a pull request, as reported by GitHub's
/// "list pull request files" endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeStatus {
    Added,
    Modified,
    Removed,
    Renamed,
    Copied,
    Changed,
    Unchanged,
    /// Any status string this crate does not know about.
    #[serde(other)]
    Unknown,
}

/// A file touched by a pull request.
///
/// Deserializes from the GitHub API shape; fields other than `filename` and
/// `status` (`sha`, `additions`, `patch`, ...) are ignored.
///
/// # Examples
///
/// ```
/// use component_checklist::core_types::{ChangedFile, ChangeStatus};
///
/// let files: Vec<ChangedFile> = serde_json::from_str(
///     r#"[{"filename": "src/Button.tsx", "status": "added", "additions": 12}]"#,
/// ).unwrap();
///
/// assert_eq!(files[0], ChangedFile::new("src/Button.tsx", ChangeStatus::Added));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangedFile {
    /// Repository-relative path of the file.
    pub filename: String,
    /// How the pull request changed the file.
    pub status: ChangeStatus,
}

impl ChangedFile {
    pub fn new(filename: impl Into<String>, status: ChangeStatus) -> Self {
        Self {
            filename: filename.into(),
            status,
        }
    }
}

/// The outcome of one detection run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DetectionVerdict {
    /// `true` iff at least one added source file declares a component.
    pub matched: bool,
    /// The first file classified as declaring a component, if any.
    pub component_file: Option<String>,
}

impl DetectionVerdict {
    pub fn no_match() -> Self {
        Self::default()
    }

    pub fn matched_in(path: impl Into<String>) -> Self {
        Self {
            matched: true,
            component_file: Some(path.into()),
        }
    }
}
