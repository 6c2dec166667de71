// src/output/writer.rs

//! Manages the output destination (stdout or file) and GitHub Actions outputs.

use crate::core_types::DetectionVerdict;
use crate::errors::{io_error_with_path, Result};
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Where the report is written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputDestination {
    #[default]
    Stdout,
    File(PathBuf),
}

impl OutputDestination {
    /// A human-readable name for error messages.
    pub fn display_name(&self) -> String {
        match self {
            OutputDestination::Stdout => "<stdout>".to_string(),
            OutputDestination::File(path) => path.display().to_string(),
        }
    }
}

/// Creates the appropriate output writer for `destination`.
///
/// # Errors
/// Returns an error if a file cannot be created for writing.
pub fn setup_output_writer(destination: &OutputDestination) -> Result<Box<dyn Write + Send>> {
    let writer: Box<dyn Write + Send> = match destination {
        OutputDestination::Stdout => Box::new(io::stdout()),
        OutputDestination::File(path) => {
            let file = File::create(path).map_err(|e| io_error_with_path(e, path))?;
            Box::new(BufWriter::new(file)) // Use BufWriter for file I/O
        }
    };
    Ok(writer)
}

/// Appends the verdict to a GitHub Actions output file (`$GITHUB_OUTPUT`).
///
/// Writes `matched=<true|false>` and, when a component was found,
/// `component_file=<path>`. A path containing line breaks is written in the
/// `name<<DELIMITER` multiline form so it cannot add further keys.
pub fn append_github_output(path: &Path, verdict: &DetectionVerdict) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| io_error_with_path(e, path))?;
    let mut lines = output_entry("matched", &verdict.matched.to_string());
    if let Some(component_file) = &verdict.component_file {
        lines.push_str(&output_entry("component_file", component_file));
    }
    file.write_all(lines.as_bytes())
        .map_err(|e| io_error_with_path(e, path))
}

/// Formats one `$GITHUB_OUTPUT` entry.
fn output_entry(name: &str, value: &str) -> String {
    if !value.contains(['\n', '\r']) {
        return format!("{}={}\n", name, value);
    }
    // The delimiter must not occur anywhere in the value.
    let mut delimiter = String::from("COMPONENT_CHECKLIST_EOF");
    let mut attempt = 0;
    while value.contains(&delimiter) {
        attempt += 1;
        delimiter = format!("COMPONENT_CHECKLIST_EOF_{}", attempt);
    }
    format!("{}<<{}\n{}\n{}\n", name, delimiter, value, delimiter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_file_destination_writes_file() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("report.json");
        {
            let mut writer = setup_output_writer(&OutputDestination::File(path.clone()))?;
            writer.write_all(b"{}")?;
            writer.flush()?;
        }
        assert_eq!(fs::read_to_string(&path)?, "{}");
        Ok(())
    }

    #[test]
    fn test_file_destination_in_missing_dir_fails() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("no/such/dir/report.json");
        let result = setup_output_writer(&OutputDestination::File(path));
        assert!(matches!(result, Err(crate::errors::Error::Io { .. })));
    }

    #[test]
    fn test_github_output_appends() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("github_output");
        fs::write(&path, "previous=1\n")?;

        append_github_output(&path, &DetectionVerdict::matched_in("src/Nav.tsx"))?;
        append_github_output(&path, &DetectionVerdict::no_match())?;

        assert_eq!(
            fs::read_to_string(&path)?,
            "previous=1\nmatched=true\ncomponent_file=src/Nav.tsx\nmatched=false\n"
        );
        Ok(())
    }

    #[test]
    fn test_github_output_path_with_newlines_cannot_add_keys() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("github_output");

        append_github_output(&path, &DetectionVerdict::matched_in("a\nmatched=false\nb.jsx"))?;

        let written = fs::read_to_string(&path)?;
        assert_eq!(
            written,
            "matched=true\ncomponent_file<<COMPONENT_CHECKLIST_EOF\na\nmatched=false\nb.jsx\nCOMPONENT_CHECKLIST_EOF\n"
        );
        Ok(())
    }

    #[test]
    fn test_multiline_delimiter_avoids_value_content() {
        let entry = output_entry("component_file", "x\nCOMPONENT_CHECKLIST_EOF\ny.tsx");
        assert_eq!(
            entry,
            "component_file<<COMPONENT_CHECKLIST_EOF_1\nx\nCOMPONENT_CHECKLIST_EOF\ny.tsx\nCOMPONENT_CHECKLIST_EOF_1\n"
        );
        assert_eq!(output_entry("matched", "true"), "matched=true\n");
        assert!(output_entry("component_file", "a\rb.jsx").starts_with("component_file<<"));
    }
}
