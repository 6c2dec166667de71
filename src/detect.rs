// src/detect.rs

//! Runs the detection pipeline over a pull request's changed files.
//!
//! Files are processed strictly one after another, in input order: fetch,
//! parse, classify. The first file that declares a component ends the run, so
//! later files are never fetched. A file that cannot be fetched or parsed is
//! logged and counted as not declaring a component.

use crate::classify::declares_component;
use crate::core_types::{ChangedFile, DetectionVerdict};
use crate::errors::{Error, Result};
use crate::filtering::filter_added_sources;
use crate::github::RepoCoordinates;
use crate::parsing::SourceParser;
use crate::source::{ContentRequest, ContentSource};

/// Pull-request context needed to fetch changed files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionContext {
    pub repo: RepoCoordinates,
    /// The pull request's head branch; files are read at this ref.
    pub head_ref: String,
}

/// Result of inspecting one file.
#[derive(Debug)]
enum FileOutcome {
    Component,
    NoComponent,
    Skipped(Error),
}

/// Detects whether any added source file in `files` declares a component.
///
/// # Errors
/// Per-file fetch and parse failures are never returned. The only error is a
/// failure to initialize the parser.
///
/// # Examples
///
/// ```
/// use component_checklist::core_types::{ChangedFile, ChangeStatus};
/// use component_checklist::detect::{detect_components, DetectionContext};
/// use component_checklist::github::{GitHubClient, RepoCoordinates, DEFAULT_API_URL};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> component_checklist::errors::Result<()> {
/// let client = GitHubClient::new(DEFAULT_API_URL.parse().unwrap(), None)?;
/// let context = DetectionContext {
///     repo: RepoCoordinates::new("acme", "storefront"),
///     head_ref: "feature/avatar".to_string(),
/// };
///
/// // Nothing here is an added source file, so nothing is fetched.
/// let files = vec![ChangedFile::new("README.md", ChangeStatus::Added)];
/// let verdict = detect_components(&files, &context, &client).await?;
/// assert!(!verdict.matched);
/// # Ok(())
/// # }
/// ```
pub async fn detect_components<S>(
    files: &[ChangedFile],
    context: &DetectionContext,
    source: &S,
) -> Result<DetectionVerdict>
where
    S: ContentSource + ?Sized,
{
    let candidates = filter_added_sources(files);
    log::info!(
        "{} of {} changed files are added sources",
        candidates.len(),
        files.len()
    );
    if candidates.is_empty() {
        return Ok(DetectionVerdict::no_match());
    }

    let mut parser = SourceParser::new()?;
    for file in candidates {
        match inspect_file(file, context, source, &mut parser).await {
            FileOutcome::Component => {
                log::info!("New component found in '{}'", file.filename);
                return Ok(DetectionVerdict::matched_in(&file.filename));
            }
            FileOutcome::NoComponent => {}
            FileOutcome::Skipped(e) => {
                log::warn!(
                    "Skipping '{}' (repo: {}, ref: {}): {}",
                    file.filename,
                    context.repo,
                    context.head_ref,
                    e
                );
            }
        }
    }

    log::info!("No new components found.");
    Ok(DetectionVerdict::no_match())
}

#[tracing::instrument(level = "debug", skip_all, fields(path = %file.filename))]
async fn inspect_file<S>(
    file: &ChangedFile,
    context: &DetectionContext,
    source: &S,
    parser: &mut SourceParser,
) -> FileOutcome
where
    S: ContentSource + ?Sized,
{
    match fetch_and_classify(file, context, source, parser).await {
        Ok(true) => FileOutcome::Component,
        Ok(false) => FileOutcome::NoComponent,
        Err(e) => FileOutcome::Skipped(e),
    }
}

async fn fetch_and_classify<S>(
    file: &ChangedFile,
    context: &DetectionContext,
    source: &S,
    parser: &mut SourceParser,
) -> Result<bool>
where
    S: ContentSource + ?Sized,
{
    let request = ContentRequest {
        repo: &context.repo,
        path: &file.filename,
        git_ref: &context.head_ref,
    };
    let text = source.fetch_content(&request).await?;
    let tree = parser.parse(&text, &file.filename)?;
    Ok(declares_component(&tree, &file.filename))
}
