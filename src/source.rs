// src/source.rs

//! Defines the seam between the detection pipeline and the source-control host.

use crate::errors::FetchError;
use crate::github::RepoCoordinates;
use async_trait::async_trait;

/// Parameters of a single "get content at path for ref" request.
#[derive(Debug, Clone, Copy)]
pub struct ContentRequest<'a> {
    pub repo: &'a RepoCoordinates,
    pub path: &'a str,
    pub git_ref: &'a str,
}

/// A source of file contents at a given ref.
///
/// [`GitHubClient`](crate::github::GitHubClient) is the production
/// implementation; tests drive the pipeline with in-memory sources.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use component_checklist::errors::FetchError;
/// use component_checklist::source::{ContentRequest, ContentSource};
///
/// struct Fixed(&'static str);
///
/// #[async_trait]
/// impl ContentSource for Fixed {
///     async fn fetch_content(&self, _request: &ContentRequest<'_>) -> Result<String, FetchError> {
///         Ok(self.0.to_string())
///     }
/// }
/// ```
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Returns the decoded text of `request.path` at `request.git_ref`.
    async fn fetch_content(&self, request: &ContentRequest<'_>) -> Result<String, FetchError>;
}
