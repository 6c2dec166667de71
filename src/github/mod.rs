// src/github/mod.rs

//! Retrieves file contents from GitHub.
//!
//! This module provides:
//! - [`RepoCoordinates`] and their parsing from `owner/repo` slugs or GitHub URLs.
//! - [`GitHubClient`], the [`ContentSource`](crate::source::ContentSource)
//!   backed by the GitHub REST Contents API, built with `reqwest`.
//! - Base64 decoding of API payloads.

// Declare the sub-modules.
mod api;
mod decode;
mod repo;

// Re-export the public-facing API.
pub use api::{GitHubClient, DEFAULT_API_URL};
pub use decode::decode_base64_content;
pub use repo::{parse_repo_slug, RepoCoordinates};
