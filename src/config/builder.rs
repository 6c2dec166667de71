use super::{
    parsing::{parse_api_url, parse_input_source, parse_timeout, require_non_blank},
    validation::validate_builder_options,
    Config,
};
use crate::cli::Cli;
use crate::errors::{Error, Result};
use crate::github::parse_repo_slug;
use crate::output::{OutputDestination, OutputFormat};
use std::path::PathBuf;

/// Builds a [`Config`] from CLI arguments or programmatic settings.
///
/// # Examples
///
/// ```
/// use component_checklist::config::ConfigBuilder;
/// use component_checklist::output::OutputFormat;
///
/// let config = ConfigBuilder::new()
///     .repo("acme/storefront")
///     .head_ref("feature/avatar")
///     .format(OutputFormat::Markdown)
///     .timeout_secs(60)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.repo.to_string(), "acme/storefront");
/// assert_eq!(config.api_url.as_str(), "https://api.github.com/");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    pub(super) changed_files: Option<String>,
    pub(super) repo: Option<String>,
    pub(super) head_ref: Option<String>,
    pub(super) api_url: Option<String>,
    pub(super) token: Option<String>,
    pub(super) format: Option<OutputFormat>,
    pub(super) output_file: Option<String>,
    pub(super) github_output: Option<String>,
    pub(super) timeout_secs: Option<u64>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-filled from parsed CLI arguments.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            changed_files: cli.changed_files,
            repo: cli.repo,
            head_ref: cli.head_ref,
            api_url: cli.api_url,
            token: cli.token,
            format: Some(cli.format),
            output_file: cli.output_file,
            github_output: cli.github_output,
            timeout_secs: cli.timeout,
        }
    }

    /// Path of the changed-file JSON; `-` reads stdin.
    pub fn changed_files(mut self, path: impl Into<String>) -> Self {
        self.changed_files = Some(path.into());
        self
    }

    pub fn repo(mut self, slug: impl Into<String>) -> Self {
        self.repo = Some(slug.into());
        self
    }

    pub fn head_ref(mut self, head_ref: impl Into<String>) -> Self {
        self.head_ref = Some(head_ref.into());
        self
    }

    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn output_file(mut self, path: impl Into<String>) -> Self {
        self.output_file = Some(path.into());
        self
    }

    pub fn github_output(mut self, path: impl Into<String>) -> Self {
        self.github_output = Some(path.into());
        self
    }

    pub fn timeout_secs(mut self, seconds: u64) -> Self {
        self.timeout_secs = Some(seconds);
        self
    }

    /// Validates the settings and produces a [`Config`].
    ///
    /// # Errors
    /// Returns `Error::Config` when the repository or head ref is missing or
    /// any setting is invalid.
    pub fn build(self) -> Result<Config> {
        validate_builder_options(&self)?;

        let repo_slug = require_non_blank(self.repo, "--repo", "GITHUB_REPOSITORY")?;
        let repo = parse_repo_slug(&repo_slug)?;
        let head_ref = require_non_blank(self.head_ref, "--head-ref", "GITHUB_HEAD_REF")?;

        let config = Config {
            repo,
            head_ref,
            api_url: parse_api_url(self.api_url.as_deref())?,
            token: self.token.filter(|t| !t.trim().is_empty()),
            changed_files: parse_input_source(self.changed_files),
            output_format: self.format.unwrap_or_default(),
            output_destination: match self.output_file {
                Some(path) if path != "-" => OutputDestination::File(PathBuf::from(path)),
                _ => OutputDestination::Stdout,
            },
            github_output: self
                .github_output
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            timeout: parse_timeout(self.timeout_secs)?,
        };
        log::debug!("Built configuration: {:?}", config);
        Ok(config)
    }
}

impl TryFrom<Cli> for Config {
    type Error = Error;

    fn try_from(cli: Cli) -> Result<Self> {
        ConfigBuilder::from_cli(cli).build()
    }
}
