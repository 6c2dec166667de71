// src/github/repo.rs

//! Handles parsing of repository coordinates.

use crate::errors::{ConfigError, Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// The `owner/repo` pair identifying a GitHub repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoCoordinates {
    pub owner: String,
    pub repo: String,
}

impl RepoCoordinates {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

impl fmt::Display for RepoCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Accepts `owner/repo` (the `GITHUB_REPOSITORY` format) or a GitHub
/// clone/browse URL, with or without a `.git` suffix.
static REPO_SLUG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:(?:https?://)?github\.com/|git@github\.com:)?([A-Za-z0-9_.-]+)/([A-Za-z0-9_.-]+?)(?:\.git)?/?$",
    )
    .unwrap()
});

/// Parses repository coordinates from a slug or URL.
///
/// # Errors
/// Returns `ConfigError::InvalidValue` if the input does not name exactly one owner and repository.
///
/// # Examples
/// ```
/// # use component_checklist::github::parse_repo_slug;
/// let coords = parse_repo_slug("octo-org/web-app").unwrap();
/// assert_eq!(coords.owner, "octo-org");
/// assert_eq!(coords.repo, "web-app");
///
/// let coords = parse_repo_slug("git@github.com:rust-lang/cargo.git").unwrap();
/// assert_eq!(coords.to_string(), "rust-lang/cargo");
/// ```
pub fn parse_repo_slug(input: &str) -> Result<RepoCoordinates> {
    let trimmed = input.trim();
    REPO_SLUG_RE
        .captures(trimmed)
        .and_then(|caps| Some((caps.get(1)?.as_str(), caps.get(2)?.as_str())))
        .filter(|(owner, repo)| !is_dot_segment(owner) && !is_dot_segment(repo) && *repo != ".git")
        .map(|(owner, repo)| RepoCoordinates::new(owner, repo))
        .ok_or_else(|| {
            Error::from(ConfigError::invalid(
                "--repo",
                format!("could not parse '{}'; expected 'owner/repo'", input),
            ))
        })
}

fn is_dot_segment(segment: &str) -> bool {
    segment == "." || segment == ".."
}
