// src/github/api.rs

//! Fetches file contents from the GitHub Contents API.

use super::decode::decode_base64_content;
use crate::errors::{ConfigError, FetchError, Result};
use crate::source::{ContentRequest, ContentSource};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::Value;
use url::Url;

/// Base URL of the public GitHub REST API.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Represents a file item from the GitHub Contents API.
#[derive(Deserialize, Debug)]
struct ContentItem {
    #[serde(rename = "type")]
    item_type: String,
    encoding: Option<String>,
    content: Option<String>,
    download_url: Option<String>,
}

/// A [`ContentSource`] backed by the GitHub REST API.
///
/// The client holds transport configuration only (API base URL and
/// credentials); repository coordinates and the ref arrive with each request.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    api_base: Url,
}

impl GitHubClient {
    /// Builds a client for `api_base`, authenticating with `token` when given.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if the base URL cannot carry a path, the token is
    /// not a valid header value, or the HTTP client cannot be constructed.
    pub fn new(api_base: Url, token: Option<&str>) -> Result<Self> {
        if api_base.cannot_be_a_base() {
            return Err(ConfigError::invalid(
                "--api-url",
                format!("'{}' cannot be used as a base URL", api_base),
            )
            .into());
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github.v3+json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("component-checklist/", env!("CARGO_PKG_VERSION"))),
        );
        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
                ConfigError::invalid("GITHUB_TOKEN", "contains characters not valid in an HTTP header")
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
            log::debug!("Using GITHUB_TOKEN for authentication.");
        }

        let http = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(ConfigError::HttpClient)?;
        Ok(Self { http, api_base })
    }

    /// Builds `{api_base}/repos/{owner}/{repo}/contents/{path}?ref={git_ref}`,
    /// percent-encoding each path segment.
    fn contents_url(&self, request: &ContentRequest<'_>) -> std::result::Result<Url, FetchError> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::UnexpectedResponse {
                path: request.path.to_string(),
                reason: format!("API URL '{}' cannot carry a path", self.api_base),
            })?
            .pop_if_empty()
            .extend(["repos", request.repo.owner.as_str(), request.repo.repo.as_str(), "contents"])
            .extend(request.path.split('/').filter(|segment| !segment.is_empty()));
        url.query_pairs_mut().append_pair("ref", request.git_ref);
        Ok(url)
    }

    async fn get(&self, url: &str, path: &str) -> std::result::Result<Response, FetchError> {
        log::debug!("Fetching content from: {}", url);
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Http {
                path: path.to_string(),
                source,
            })?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                path: path.to_string(),
                status,
            });
        }
        Ok(response)
    }

    /// Downloads a file's raw text. Used when the API omits inline content.
    async fn fetch_raw(&self, download_url: &str, path: &str) -> std::result::Result<String, FetchError> {
        let response = self.get(download_url, path).await?;
        response.text().await.map_err(|source| FetchError::Http {
            path: path.to_string(),
            source,
        })
    }
}

#[async_trait]
impl ContentSource for GitHubClient {
    async fn fetch_content(&self, request: &ContentRequest<'_>) -> std::result::Result<String, FetchError> {
        let path = request.path;
        let url = self.contents_url(request)?;
        let response = self.get(url.as_str(), path).await?;

        // Anything but JSON is already the file's text.
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map_or(true, |value| value.contains("json"));
        let body = response.text().await.map_err(|source| FetchError::Http {
            path: path.to_string(),
            source,
        })?;
        if !is_json {
            return Ok(body);
        }

        let unexpected = |reason: String| FetchError::UnexpectedResponse {
            path: path.to_string(),
            reason,
        };

        // The API returns a single object for a file, or an array for a directory.
        let json_value: Value =
            serde_json::from_str(&body).map_err(|e| unexpected(format!("invalid JSON: {}", e)))?;
        if json_value.is_array() {
            return Err(unexpected("path is a directory".to_string()));
        }
        let item: ContentItem =
            serde_json::from_value(json_value).map_err(|e| unexpected(e.to_string()))?;
        if item.item_type != "file" {
            return Err(unexpected(format!("expected a file, found '{}'", item.item_type)));
        }

        match item.encoding.as_deref() {
            Some("base64") => decode_base64_content(item.content.as_deref().unwrap_or_default(), path),
            // Files above 1 MB come back with `encoding: "none"` and no inline content.
            Some("none") | None => match item.download_url {
                Some(download_url) => {
                    log::debug!("No inline content for '{}', downloading raw file.", path);
                    self.fetch_raw(&download_url, path).await
                }
                None => Err(unexpected("no inline content and no download_url".to_string())),
            },
            Some(other) => Err(unexpected(format!("unsupported encoding '{}'", other))),
        }
    }
}
