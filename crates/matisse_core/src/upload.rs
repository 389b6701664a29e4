//! Upload outcome types.

use matisse_error::UploadError;
use std::collections::HashMap;

/// Outcome of uploading one live local reference.
///
/// Produced once per still-live reference per commit. A failure is recorded
/// here; it never aborts sibling uploads.
#[derive(Debug, Clone, derive_more::Display)]
pub enum UploadResult {
    /// Upload resolved to a permanent URL
    #[display("{} -> {}", local_id, remote_url)]
    Succeeded {
        /// Local reference id that was uploaded
        local_id: String,
        /// Permanent URL returned by the remote store
        remote_url: String,
    },
    /// Upload rejected; the local reference stays live
    #[display("{} failed: {}", local_id, error)]
    Failed {
        /// Local reference id whose upload failed
        local_id: String,
        /// Cause of the failure
        error: UploadError,
    },
}

impl UploadResult {
    /// The local reference id this result belongs to.
    pub fn local_id(&self) -> &str {
        match self {
            UploadResult::Succeeded { local_id, .. } => local_id,
            UploadResult::Failed { local_id, .. } => local_id,
        }
    }

    /// Whether this result is a success.
    pub fn is_succeeded(&self) -> bool {
        matches!(self, UploadResult::Succeeded { .. })
    }
}

/// Mapping from local reference id to permanent remote URL.
///
/// Built only from `Succeeded` results; keys unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadMapping(HashMap<String, String>);

impl UploadMapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful upload.
    pub fn insert(&mut self, local_id: impl Into<String>, remote_url: impl Into<String>) {
        self.0.insert(local_id.into(), remote_url.into());
    }

    /// Remote URL for a local id, if its upload succeeded.
    pub fn get(&self, local_id: &str) -> Option<&str> {
        self.0.get(local_id).map(String::as_str)
    }

    /// Whether any uploads succeeded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of mapped references.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over `(local_id, remote_url)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The mapped local ids.
    pub fn local_ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl FromIterator<(String, String)> for UploadMapping {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Partial-failure report returned by a commit.
///
/// Carries every per-asset `UploadResult` so the caller can react to failures
/// without losing the successes.
#[derive(Debug, Clone, Default)]
pub struct CommitReport {
    results: Vec<UploadResult>,
}

impl CommitReport {
    /// Assemble a report from per-asset results.
    pub fn new(results: Vec<UploadResult>) -> Self {
        Self { results }
    }

    /// All per-asset results in commit order.
    pub fn results(&self) -> &[UploadResult] {
        &self.results
    }

    /// Mapping built from the successful results only.
    pub fn mapping(&self) -> UploadMapping {
        self.results
            .iter()
            .filter_map(|result| match result {
                UploadResult::Succeeded {
                    local_id,
                    remote_url,
                } => Some((local_id.clone(), remote_url.clone())),
                UploadResult::Failed { .. } => None,
            })
            .collect()
    }

    /// The failed results, in commit order.
    pub fn failures(&self) -> Vec<&UploadResult> {
        self.results
            .iter()
            .filter(|result| !result.is_succeeded())
            .collect()
    }

    /// Whether every upload in the commit succeeded.
    pub fn is_complete(&self) -> bool {
        self.results.iter().all(UploadResult::is_succeeded)
    }

    /// Number of uploads issued in the commit.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether the commit had no live references to upload.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matisse_error::{UploadError, UploadErrorKind};

    fn succeeded(id: &str, url: &str) -> UploadResult {
        UploadResult::Succeeded {
            local_id: id.to_string(),
            remote_url: url.to_string(),
        }
    }

    fn failed(id: &str) -> UploadResult {
        UploadResult::Failed {
            local_id: id.to_string(),
            error: UploadError::new(UploadErrorKind::Status("503".to_string())),
        }
    }

    #[test]
    fn test_mapping_from_successes_only() {
        let report = CommitReport::new(vec![
            succeeded("local:a", "https://cdn/a.png"),
            failed("local:b"),
            succeeded("local:c", "https://cdn/c.png"),
        ]);

        let mapping = report.mapping();
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get("local:a"), Some("https://cdn/a.png"));
        assert_eq!(mapping.get("local:b"), None);
        assert_eq!(mapping.get("local:c"), Some("https://cdn/c.png"));
        assert!(!report.is_complete());
        assert_eq!(report.failures().len(), 1);
    }

    #[test]
    fn test_empty_report() {
        let report = CommitReport::default();
        assert!(report.is_empty());
        assert!(report.is_complete());
        assert!(report.mapping().is_empty());
    }
}
