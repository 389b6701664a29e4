//! Upload transport configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

fn default_endpoint() -> String {
    "http://localhost:8080/api/upload/image".to_string()
}

fn default_folder() -> String {
    "Blog_Images".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Configuration for the HTTP upload transport.
///
/// The timeout bounds each upload request so an unresponsive endpoint rejects
/// into the failed path instead of hanging the commit barrier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct UploadConfig {
    /// Upload endpoint URL
    #[serde(default = "default_endpoint")]
    endpoint: String,
    /// Destination folder label sent with each payload
    #[serde(default = "default_folder")]
    folder: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
}

impl UploadConfig {
    /// Create a configuration for the given endpoint with default folder and
    /// timeout.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            folder: default_folder(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Set the destination folder label.
    pub fn with_folder(mut self, folder: impl Into<String>) -> Self {
        self.folder = folder.into();
        self
    }

    /// Set the per-request timeout in seconds.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Per-request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            folder: default_folder(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
