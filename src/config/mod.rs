//! Defines the core `Config` struct for application configuration.
//!
//! This module consolidates all the settings parsed and validated from the CLI
//! (or set programmatically through [`ConfigBuilder`]), making them available
//! to the rest of the application in a structured and type-safe manner. A
//! `Config` is built once at startup and passed explicitly to everything that
//! needs it.

use crate::detect::DetectionContext;
use crate::github::RepoCoordinates;
use crate::input::InputSource;
use crate::output::{OutputDestination, OutputFormat};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

pub use builder::ConfigBuilder;
mod builder;
mod parsing;
mod validation;

/// Validated settings for one detection run.
#[derive(Clone)]
pub struct Config {
    /// The repository the pull request belongs to.
    pub repo: RepoCoordinates,
    /// The pull request's head branch.
    pub head_ref: String,
    /// Base URL of the GitHub REST API.
    pub api_url: Url,
    /// Token for authenticated API requests.
    pub token: Option<String>,
    /// Where to read the changed-file list from.
    pub changed_files: InputSource,
    /// Report format.
    pub output_format: OutputFormat,
    /// Specifies where the report should be written.
    pub output_destination: OutputDestination,
    /// GitHub Actions output file to append `matched=<bool>` to.
    pub github_output: Option<PathBuf>,
    /// Deadline for the whole detection call.
    pub timeout: Option<Duration>,
}

impl Config {
    /// The pull-request context handed to the detection pipeline.
    pub fn detection_context(&self) -> DetectionContext {
        DetectionContext {
            repo: self.repo.clone(),
            head_ref: self.head_ref.clone(),
        }
    }
}

// Custom Debug implementation for Config, as the token must never be logged.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("repo", &self.repo)
            .field("head_ref", &self.head_ref)
            .field("api_url", &self.api_url.as_str())
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("changed_files", &self.changed_files)
            .field("output_format", &self.output_format)
            .field("output_destination", &self.output_destination)
            .field("github_output", &self.github_output)
            .field("timeout", &self.timeout)
            .finish()
    }
}
