// src/input.rs

//! Reads the caller-supplied list of changed files.

use crate::core_types::ChangedFile;
use crate::errors::{io_error_with_path, ConfigError, Result};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

/// Where the changed-file list comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InputSource {
    #[default]
    Stdin,
    File(PathBuf),
}

/// Parses a JSON array of changed-file descriptors.
///
/// # Examples
/// ```
/// use component_checklist::input::parse_changed_files;
///
/// let files = parse_changed_files(r#"[{"filename": "src/App.tsx", "status": "added"}]"#).unwrap();
/// assert_eq!(files.len(), 1);
/// assert!(parse_changed_files(r#"{"filename": "src/App.tsx"}"#).is_err());
/// ```
pub fn parse_changed_files(json: &str) -> std::result::Result<Vec<ChangedFile>, ConfigError> {
    serde_json::from_str(json).map_err(ConfigError::ChangedFiles)
}

/// Reads and parses the changed-file list from `source`.
///
/// # Errors
/// Returns `Error::Io` if the input cannot be read and `ConfigError::ChangedFiles`
/// if it is not a valid changed-file list.
pub fn read_changed_files(source: &InputSource) -> Result<Vec<ChangedFile>> {
    let text = match source {
        InputSource::Stdin => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| io_error_with_path(e, "<stdin>"))?;
            buffer
        }
        InputSource::File(path) => {
            fs::read_to_string(path).map_err(|e| io_error_with_path(e, path))?
        }
    };
    let files = parse_changed_files(&text)?;
    log::debug!("Read {} changed files.", files.len());
    Ok(files)
}
