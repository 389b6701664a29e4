//! The upload coordinator.

use crate::AssetUploader;
use futures::future::join_all;
use matisse_core::{AssetPayload, CommitReport, UploadResult};
use matisse_registry::AssetStore;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::instrument;

/// Converts live local references into permanent remote counterparts.
///
/// One upload per distinct live reference per commit, issued concurrently and
/// joined behind a single barrier. The coordinator never revokes: the caller
/// revokes the successfully mapped references only after the rewritten
/// content has been written back, so the last binary copy of an asset cannot
/// be lost to a failed rewrite.
#[derive(Clone)]
pub struct UploadCoordinator {
    store: AssetStore,
    uploader: Arc<dyn AssetUploader>,
}

impl UploadCoordinator {
    /// Create a coordinator over the shared store and an upload transport.
    pub fn new(store: AssetStore, uploader: Arc<dyn AssetUploader>) -> Self {
        Self { store, uploader }
    }

    /// Upload every distinct live reference exactly once.
    ///
    /// Payloads are snapshotted from the registry up front; a revoke landing
    /// after the snapshot cannot corrupt an upload already started. Ids
    /// missing at snapshot time were reconciled away concurrently and are
    /// skipped silently. Individual failures are captured per asset; no
    /// fail-fast, no automatic retries.
    #[instrument(skip(self, live_ids), fields(requested = live_ids.len()))]
    pub async fn commit(&self, live_ids: &[String]) -> CommitReport {
        // Dedupe while preserving order: an asset embedded twice still
        // uploads once.
        let mut seen = HashSet::new();
        let distinct: Vec<String> = live_ids
            .iter()
            .filter(|id| seen.insert(id.as_str()))
            .cloned()
            .collect();

        let snapshot = self.store.snapshot(&distinct).await;
        tracing::info!(
            distinct = distinct.len(),
            live = snapshot.len(),
            "Committing live assets"
        );

        let uploads = snapshot
            .iter()
            .map(|(local_id, payload)| self.upload_one(local_id, payload));
        let results = join_all(uploads).await;

        let report = CommitReport::new(results);
        if report.is_complete() {
            tracing::info!(uploaded = report.len(), "Commit complete");
        } else {
            tracing::warn!(
                uploaded = report.mapping().len(),
                failed = report.failures().len(),
                "Commit finished with partial failures"
            );
        }
        report
    }

    async fn upload_one(&self, local_id: &str, payload: &AssetPayload) -> UploadResult {
        match self.uploader.upload(local_id, payload).await {
            Ok(remote_url) => UploadResult::Succeeded {
                local_id: local_id.to_string(),
                remote_url,
            },
            Err(error) => {
                tracing::warn!(id = local_id, %error, "Asset upload failed");
                UploadResult::Failed {
                    local_id: local_id.to_string(),
                    error,
                }
            }
        }
    }
}

impl std::fmt::Debug for UploadCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadCoordinator")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}
