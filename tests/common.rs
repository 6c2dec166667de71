// tests/common.rs

use async_trait::async_trait;
use component_checklist::errors::FetchError;
use component_checklist::source::{ContentRequest, ContentSource};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Environment variables GitHub Actions sets that the binary falls back to.
#[allow(dead_code)]
pub const GITHUB_ENV_VARS: &[&str] = &[
    "GITHUB_REPOSITORY",
    "GITHUB_HEAD_REF",
    "GITHUB_API_URL",
    "GITHUB_TOKEN",
    "GITHUB_OUTPUT",
];

// Helper function to get the binary command, isolated from the CI environment
#[allow(dead_code)] // This is used by the CLI tests, but not all.
pub fn component_checklist_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("component-checklist"));
    for var in GITHUB_ENV_VARS {
        cmd.env_remove(var);
    }
    cmd
}

/// An in-memory content source that counts fetches.
///
/// Paths without an entry fail with a 404, like a file missing at the ref.
#[allow(dead_code)]
#[derive(Default)]
pub struct CountingSource {
    files: HashMap<String, String>,
    fetches: AtomicUsize,
    requested: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl CountingSource {
    pub fn new(files: &[(&str, &str)]) -> Self {
        Self {
            files: files
                .iter()
                .map(|(path, text)| (path.to_string(), text.to_string()))
                .collect(),
            ..Default::default()
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentSource for CountingSource {
    async fn fetch_content(&self, request: &ContentRequest<'_>) -> Result<String, FetchError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push(request.path.to_string());
        self.files
            .get(request.path)
            .cloned()
            .ok_or_else(|| FetchError::Status {
                path: request.path.to_string(),
                status: reqwest::StatusCode::NOT_FOUND,
            })
    }
}
