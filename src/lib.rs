//! `component-checklist` is a library and command-line tool for pull-request
//! review automation: it detects whether a pull request adds a React-style UI
//! component and, if so, surfaces an author checklist.
//!
//! As a library, it provides a small, sequential pipeline:
//! 1.  **Filter**: Keep only added `.js`/`.jsx`/`.ts`/`.tsx` files.
//! 2.  **Fetch**: Read each file at the pull request's head ref through a
//!     [`ContentSource`] (GitHub's Contents API in production).
//! 3.  **Parse**: Build a typed syntax tree with the tree-sitter TSX grammar.
//! 4.  **Classify**: Look for a named top-level function declaration that
//!     directly returns a JSX element.
//!
//! The first matching file ends the run. Files that fail to fetch or parse are
//! logged and treated as not declaring a component.
//!
//! # Example: Library Usage
//!
//! ```
//! use async_trait::async_trait;
//! use component_checklist::prelude::*;
//!
//! // An in-memory content source standing in for GitHub.
//! struct Snapshot;
//!
//! #[async_trait]
//! impl ContentSource for Snapshot {
//!     async fn fetch_content(
//!         &self,
//!         request: &ContentRequest<'_>,
//!     ) -> std::result::Result<String, FetchError> {
//!         Ok(match request.path {
//!             "src/Avatar.jsx" => "export function Avatar() { return <img/>; }".to_string(),
//!             _ => "export const answer = 42;".to_string(),
//!         })
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<()> {
//! let files = vec![
//!     ChangedFile::new("src/answer.ts", ChangeStatus::Added),
//!     ChangedFile::new("src/Avatar.jsx", ChangeStatus::Added),
//!     ChangedFile::new("src/Old.jsx", ChangeStatus::Modified),
//! ];
//! let context = DetectionContext {
//!     repo: RepoCoordinates::new("acme", "storefront"),
//!     head_ref: "feature/avatar".to_string(),
//! };
//!
//! let verdict = detect(&files, &context, &Snapshot).await?;
//! assert!(verdict.matched);
//! assert_eq!(verdict.component_file.as_deref(), Some("src/Avatar.jsx"));
//!
//! // The checklist the author should acknowledge.
//! assert!(!checklist_items().is_empty());
//! # Ok(())
//! # }
//! ```

// Make modules public if they contain public types used in the API
pub mod checklist;
pub mod classify;
pub mod cli;
pub mod config;
pub mod core_types;
pub mod detect;
pub mod errors;
pub mod filtering;
pub mod github;
pub mod input;
pub mod output;
pub mod parsing;
pub mod prelude;
pub mod source;

// Re-export key public types for easier use as a library
pub use checklist::{checklist_items, CHECKLIST};
pub use config::{Config, ConfigBuilder};
pub use core_types::{ChangeStatus, ChangedFile, DetectionVerdict};
pub use detect::{detect_components as detect, DetectionContext};
pub use source::{ContentRequest, ContentSource};

use crate::errors::{io_error_with_path, Error, Result};
use crate::github::GitHubClient;

/// Executes the complete run the way the command-line tool does: read the
/// changed files, detect against GitHub, write the report.
///
/// The detection call is bounded by `config.timeout` when set; the pipeline
/// itself has no deadline.
///
/// # Returns
/// The verdict, after the report has been written to the configured
/// destination (and appended to the GitHub Actions output file, if any).
///
/// # Errors
/// Configuration errors (including a malformed changed-file list), I/O errors
/// on input or output, and timeouts. Per-file fetch or parse failures never
/// surface here.
pub async fn run(config: &Config) -> Result<DetectionVerdict> {
    let files = input::read_changed_files(&config.changed_files)?;
    let client = GitHubClient::new(config.api_url.clone(), config.token.as_deref())?;
    let context = config.detection_context();

    let detection = detect(&files, &context, &client);
    let verdict = match config.timeout {
        Some(limit) => tokio::time::timeout(limit, detection)
            .await
            .map_err(|_| Error::Timeout(limit.as_secs()))??,
        None => detection.await?,
    };

    let mut writer = output::writer::setup_output_writer(&config.output_destination)?;
    output::write_report(&verdict, config.output_format, &mut writer)
        .map_err(|e| io_error_with_path(e, config.output_destination.display_name()))?;

    if let Some(path) = &config.github_output {
        output::writer::append_github_output(path, &verdict)?;
    }
    Ok(verdict)
}
