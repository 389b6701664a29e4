//! Editing session orchestration.

use crate::MatisseConfig;
use matisse_core::{embedded_local_ids, rewrite, AssetPayload, CommitReport, LocalReference};
use matisse_error::{
    AssetError, AssetErrorKind, MatisseResult, SessionError, SessionErrorKind,
};
use matisse_interface::EditorHost;
use matisse_registry::{AssetStore, Reconciler};
use matisse_upload::{AssetUploader, HttpUploader, UploadCoordinator};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::instrument;

/// Result of a submission: the final content plus the per-asset report.
#[derive(Debug, Clone, derive_getters::Getters)]
pub struct SubmitOutcome {
    /// Document content after the rewrite
    content: String,
    /// Per-asset upload outcomes; failures stay embedded as local references
    report: CommitReport,
}

/// One editing session over a hosted rich-text editor.
///
/// Wires the asset store, reconciler and upload coordinator around an
/// [`EditorHost`]: `attach` mints and inserts local references while the user
/// edits, the reconciler prunes deleted ones, and `submit` performs the
/// exactly-once upload pass and rewrites the document to permanent URLs.
#[derive(Clone)]
pub struct EditorSession {
    host: Arc<dyn EditorHost>,
    store: AssetStore,
    reconciler: Reconciler,
    coordinator: UploadCoordinator,
    submit_gate: Arc<Mutex<()>>,
    reconciler_running: Arc<AtomicBool>,
}

impl EditorSession {
    /// Create a session over the given host and upload transport.
    pub fn new(
        host: Arc<dyn EditorHost>,
        config: MatisseConfig,
        uploader: Arc<dyn AssetUploader>,
    ) -> Self {
        let store = AssetStore::new(config.registry().clone());
        let reconciler = Reconciler::new(store.clone());
        let coordinator = UploadCoordinator::new(store.clone(), uploader);
        Self {
            host,
            store,
            reconciler,
            coordinator,
            submit_gate: Arc::new(Mutex::new(())),
            reconciler_running: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a session uploading through the configured HTTP endpoint.
    pub fn with_http_uploader(
        host: Arc<dyn EditorHost>,
        config: MatisseConfig,
    ) -> MatisseResult<Self> {
        let uploader = Arc::new(HttpUploader::new(config.upload().clone())?);
        Ok(Self::new(host, config, uploader))
    }

    /// The session's asset store.
    pub fn store(&self) -> &AssetStore {
        &self.store
    }

    /// Attach an image: mint a local reference and insert it at the cursor.
    ///
    /// Rejected payloads (empty, non-image, over the size ceiling) surface
    /// immediately and leave no reference behind; a failed insert revokes the
    /// reference it would have embedded.
    #[instrument(skip(self, payload), fields(size = payload.size_bytes(), mime = %payload.mime_type()))]
    pub async fn attach(&self, payload: AssetPayload) -> MatisseResult<LocalReference> {
        if payload.size_bytes() == 0 {
            return Err(AssetError::new(AssetErrorKind::EmptyPayload(
                payload.mime_type().clone(),
            ))
            .into());
        }
        if !payload.is_image() {
            return Err(AssetError::new(AssetErrorKind::UnsupportedMediaType(
                payload.mime_type().clone(),
            ))
            .into());
        }

        let reference = self.store.create(payload).await?;
        if let Err(err) = self.host.insert_asset_at_cursor(&reference).await {
            // The host never embedded the reference; release its payload.
            self.store.revoke(reference.id()).await;
            return Err(err);
        }
        tracing::info!(id = %reference.id(), "Attached image");
        Ok(reference)
    }

    /// Spawn the reconciliation loop.
    ///
    /// Consumes the host's notification stream, running one pass per
    /// notification against the content the notification carries. Passes never
    /// overlap: the next notification is not processed until the current pass
    /// finishes. A reference minted by a concurrent [`attach`](Self::attach)
    /// survives notifications queued before its insert landed; it becomes
    /// prunable once a pass has seen it embedded. The task ends when the host
    /// drops its notification senders.
    pub fn run_reconciler(&self) -> MatisseResult<JoinHandle<()>> {
        if self.reconciler_running.swap(true, Ordering::SeqCst) {
            return Err(SessionError::new(SessionErrorKind::ReconcilerRunning).into());
        }

        let mut events = self.host.subscribe();
        let reconciler = self.reconciler.clone();
        Ok(tokio::spawn(async move {
            while let Some(event) = events.recv().await {
                let embedded = embedded_local_ids(event.content());
                reconciler.reconcile(&embedded).await;
            }
            tracing::debug!("Reconciler loop finished");
        }))
    }

    /// Run a single reconciliation pass against the host's current content.
    #[instrument(skip(self))]
    pub async fn reconcile_now(&self) -> MatisseResult<Vec<String>> {
        let content = self.host.serialized_content().await?;
        let embedded = embedded_local_ids(&content);
        Ok(self.reconciler.reconcile(&embedded).await)
    }

    /// Submit the document: upload live assets, rewrite, write back.
    ///
    /// Single-flight: a second submission while one is outstanding fails with
    /// `SubmitInFlight`. Successfully mapped references are revoked only after
    /// the rewritten content has been written back through the host; failed
    /// ones stay embedded and registered, so resubmitting retries just the
    /// stragglers.
    #[instrument(skip(self))]
    pub async fn submit(&self) -> MatisseResult<SubmitOutcome> {
        let _guard = self
            .submit_gate
            .try_lock()
            .map_err(|_| SessionError::new(SessionErrorKind::SubmitInFlight))?;

        let content = self.host.serialized_content().await?;
        let live_ids: Vec<String> = embedded_local_ids(&content).into_iter().collect();
        tracing::info!(live = live_ids.len(), "Submitting document");

        let report = self.coordinator.commit(&live_ids).await;
        let mapping = report.mapping();
        let rewritten = rewrite(&content, &mapping);

        if !mapping.is_empty() {
            self.host.set_serialized_content(&rewritten).await?;
            // Revoke exactly the successfully mapped references, now that the
            // rewritten content no longer embeds them.
            for local_id in mapping.local_ids() {
                self.store.revoke(local_id).await;
            }
        }

        Ok(SubmitOutcome {
            content: rewritten,
            report,
        })
    }

    /// Tear the session down, revoking every tracked reference.
    #[instrument(skip(self))]
    pub async fn close(&self) -> usize {
        self.store.revoke_all().await
    }
}

impl std::fmt::Debug for EditorSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorSession")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}
