//! The `component-checklist` prelude for convenient library usage.
//!
//! This module re-exports the most commonly used types, traits, and functions.
//!
//! # Example
//!
//! ```
//! use component_checklist::prelude::*;
//! # fn main() -> Result<()> {
//!
//! // Now you can use ConfigBuilder, filter_added_sources, etc. without full paths.
//! let config = ConfigBuilder::new()
//!     .repo("acme/storefront")
//!     .head_ref("topic")
//!     .build()?;
//! let files = [ChangedFile::new("src/App.tsx", ChangeStatus::Added)];
//! assert_eq!(filter_added_sources(&files).len(), 1);
//! # Ok(())
//! # }
//! ```

pub use crate::checklist::{checklist_items, CHECKLIST};
pub use crate::classify::declares_component;
pub use crate::config::{Config, ConfigBuilder};
pub use crate::core_types::{ChangeStatus, ChangedFile, DetectionVerdict};
pub use crate::detect::{detect_components, DetectionContext};
pub use crate::errors::{ConfigError, Error, FetchError, ParseError, Result};
pub use crate::filtering::{filter_added_sources, has_source_extension};
pub use crate::github::{parse_repo_slug, GitHubClient, RepoCoordinates};
pub use crate::output::{write_report, OutputDestination, OutputFormat};
pub use crate::parsing::{SourceParser, SyntaxTree};
pub use crate::source::{ContentRequest, ContentSource};
pub use crate::{detect, run};
