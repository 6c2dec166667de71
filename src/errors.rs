//! Defines application-specific error types.
//!
//! Errors are split along the recovery policy of the detection pipeline:
//! [`FetchError`] and [`ParseError`] are file-level and recovered by the
//! orchestrator (the file is skipped), while [`ConfigError`] aborts the whole
//! invocation because it means the caller's contract was violated.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level errors returned by `component-checklist`.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid or missing configuration. Never recovered.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Fetching a file's content from the source-control host failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// A fetched file could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Error occurring while reading input or writing output.
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// The bundled TSX grammar could not be loaded into the parser.
    #[error("Failed to load the TSX grammar: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),

    /// The caller-imposed deadline elapsed before detection finished.
    #[error("Detection did not finish within {0} seconds")]
    Timeout(u64),
}

impl Error {
    /// Returns `true` for errors scoped to a single file, which the
    /// orchestrator recovers from by skipping that file.
    pub fn is_file_level(&self) -> bool {
        matches!(self, Error::Fetch(_) | Error::Parse(_))
    }
}

/// Caller contract violations: missing PR context, bad repository
/// coordinates, unusable changed-file input.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required setting was given neither as a flag nor in the environment.
    #[error("Missing required setting {option} (or environment variable {env})")]
    Missing { option: String, env: String },

    /// A setting was present but unusable.
    #[error("Invalid value for {option}: {reason}")]
    InvalidValue { option: String, reason: String },

    /// Two settings cannot be used together.
    #[error("Cannot use {option1} together with {option2}: {reason}")]
    Conflict {
        option1: String,
        option2: String,
        reason: String,
    },

    /// The changed-file list is not a JSON array of `{filename, status}` objects.
    #[error("Malformed changed-file list: {0}")]
    ChangedFiles(#[source] serde_json::Error),

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

impl ConfigError {
    pub(crate) fn invalid(option: &str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            option: option.to_string(),
            reason: reason.into(),
        }
    }
}

/// Failures while retrieving file content from the GitHub Contents API.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level failure (connection refused, TLS, body read).
    #[error("Request for '{path}' failed: {source}")]
    Http {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status (404 for a missing file,
    /// 403 when rate-limited, ...).
    #[error("GitHub API returned {status} for '{path}'")]
    Status {
        path: String,
        status: reqwest::StatusCode,
    },

    /// The response was well-formed but not a single file entry we can use.
    #[error("Unexpected response for '{path}': {reason}")]
    UnexpectedResponse { path: String, reason: String },

    /// The content could not be decoded into UTF-8 text.
    #[error("Could not decode content of '{path}': {reason}")]
    Decode { path: String, reason: String },
}

/// Malformed or unsupported source text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Syntax error in '{path}' at line {line}, column {column}")]
pub struct ParseError {
    /// The file the source text came from.
    pub path: String,
    /// 1-based line of the first erroneous node.
    pub line: usize,
    /// 1-based column of the first erroneous node.
    pub column: usize,
}

/// Helper function to create an `Error::Io` with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `path` - The path associated with the error, convertible to `AsRef<std::path::Path>`.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}
