// src/config/parsing.rs

use crate::errors::ConfigError;
use crate::github::DEFAULT_API_URL;
use crate::input::InputSource;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Parses the API base URL, defaulting to the public GitHub API.
pub(super) fn parse_api_url(api_url: Option<&str>) -> Result<Url, ConfigError> {
    let raw = api_url
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_API_URL);
    let url = Url::parse(raw).map_err(|e| ConfigError::invalid("--api-url", format!("'{}': {}", raw, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::invalid(
            "--api-url",
            format!("unsupported scheme '{}'", other),
        )),
    }
}

/// Requires a non-blank value, trimming surrounding whitespace.
///
/// GitHub Actions sets `GITHUB_HEAD_REF` to an empty string outside of
/// pull-request events, so blank counts as missing.
pub(super) fn require_non_blank(
    value: Option<String>,
    option: &str,
    env: &str,
) -> Result<String, ConfigError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ConfigError::Missing {
            option: option.to_string(),
            env: env.to_string(),
        })
}

/// `None` and `-` mean stdin.
pub(super) fn parse_input_source(path: Option<String>) -> InputSource {
    match path {
        Some(p) if p != "-" => InputSource::File(PathBuf::from(p)),
        _ => InputSource::Stdin,
    }
}

pub(super) fn parse_timeout(seconds: Option<u64>) -> Result<Option<Duration>, ConfigError> {
    match seconds {
        Some(0) => Err(ConfigError::invalid("--timeout", "must be greater than zero")),
        Some(s) => Ok(Some(Duration::from_secs(s))),
        None => Ok(None),
    }
}
