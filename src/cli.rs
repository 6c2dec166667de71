// src/cli.rs

use crate::output::OutputFormat;
use clap::{Parser, Subcommand};

/// Detects newly added React components in a pull request and surfaces an author checklist.
///
/// Reads the pull request's changed files (the JSON returned by GitHub's
/// "list pull request files" endpoint) from a file or stdin, fetches every added
/// JavaScript/TypeScript file at the head ref, and reports whether any of them
/// declares a component. Most settings fall back to the environment variables
/// GitHub Actions provides.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON file listing the changed files. Reads stdin when omitted or '-'.
    #[arg(short = 'f', long, value_name = "PATH")]
    pub changed_files: Option<String>,

    // --- Pull Request Context ---
    /// Repository as 'owner/repo' (or a GitHub URL).
    #[arg(short = 'R', long, env = "GITHUB_REPOSITORY", value_name = "OWNER/REPO")]
    pub repo: Option<String>,

    /// The pull request's head branch; files are fetched at this ref.
    #[arg(short = 'H', long, env = "GITHUB_HEAD_REF", value_name = "REF")]
    pub head_ref: Option<String>,

    // --- GitHub API ---
    /// Base URL of the GitHub REST API (for GitHub Enterprise Server, '<host>/api/v3').
    #[arg(long, env = "GITHUB_API_URL", value_name = "URL")]
    pub api_url: Option<String>,

    /// Token used to authenticate API requests.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true, value_name = "TOKEN")]
    pub token: Option<String>,

    // --- Output ---
    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Write the report to the specified file instead of stdout.
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output_file: Option<String>,

    /// Append 'matched=<true|false>' to this GitHub Actions output file.
    #[arg(long, env = "GITHUB_OUTPUT", value_name = "PATH")]
    pub github_output: Option<String>,

    // --- Execution Control ---
    /// Abort detection if it takes longer than this many seconds.
    #[arg(short = 't', long, value_name = "SECONDS")]
    pub timeout: Option<u64>,
}

/// Subcommands that do not run detection.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the checklist items, one per line, and exit.
    Checklist,
}
