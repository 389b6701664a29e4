//! Tests for the upload coordinator.

use async_trait::async_trait;
use matisse_core::{image_embed, rewrite, AssetPayload};
use matisse_error::{UploadError, UploadErrorKind};
use matisse_registry::{AssetStore, RegistryConfig};
use matisse_upload::{AssetUploader, UploadCoordinator};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Scripted transport: fails the configured ids, records every call.
#[derive(Debug, Default)]
struct MockUploader {
    fail_ids: Mutex<HashSet<String>>,
    calls: Mutex<Vec<String>>,
}

impl MockUploader {
    fn fail(&self, id: &str) {
        self.fail_ids.lock().unwrap().insert(id.to_string());
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AssetUploader for MockUploader {
    async fn upload(
        &self,
        local_id: &str,
        _payload: &AssetPayload,
    ) -> Result<String, UploadError> {
        self.calls.lock().unwrap().push(local_id.to_string());
        if self.fail_ids.lock().unwrap().contains(local_id) {
            return Err(UploadError::new(UploadErrorKind::Status(
                "503 Service Unavailable".to_string(),
            )));
        }
        let stem = local_id.strip_prefix("local:").unwrap_or(local_id);
        Ok(format!("https://cdn.example/{stem}.png"))
    }
}

fn png(size: usize) -> AssetPayload {
    AssetPayload::image(vec![0u8; size], "image/png")
}

#[tokio::test]
async fn test_exactly_once_per_distinct_reference() {
    let store = AssetStore::new(RegistryConfig::default());
    let uploader = Arc::new(MockUploader::default());
    let coordinator = UploadCoordinator::new(store.clone(), uploader.clone());

    let a = store.create(png(8)).await.unwrap();
    let b = store.create(png(8)).await.unwrap();

    // The same asset embedded twice still uploads once.
    let live_ids = vec![
        a.id().clone(),
        b.id().clone(),
        a.id().clone(),
        a.id().clone(),
    ];
    let report = coordinator.commit(&live_ids).await;

    assert_eq!(report.len(), 2);
    assert_eq!(uploader.calls().len(), 2);
    assert!(report.is_complete());
}

#[tokio::test]
async fn test_partial_failure_isolation() {
    let store = AssetStore::new(RegistryConfig::default());
    let uploader = Arc::new(MockUploader::default());
    let coordinator = UploadCoordinator::new(store.clone(), uploader.clone());

    let first = store.create(png(8)).await.unwrap();
    let second = store.create(png(8)).await.unwrap();
    let third = store.create(png(8)).await.unwrap();
    uploader.fail(second.id());

    let live_ids = vec![first.id().clone(), second.id().clone(), third.id().clone()];
    let report = coordinator.commit(&live_ids).await;

    // The sibling uploads still resolve.
    let mapping = report.mapping();
    assert_eq!(mapping.len(), 2);
    assert!(mapping.get(first.id()).is_some());
    assert!(mapping.get(second.id()).is_none());
    assert!(mapping.get(third.id()).is_some());
    assert_eq!(report.failures().len(), 1);

    // The failed reference keeps its occurrences in the rewritten content.
    let content = format!(
        "{}{}{}",
        image_embed(&first),
        image_embed(&second),
        image_embed(&third)
    );
    let rewritten = rewrite(&content, &mapping);
    assert!(rewritten.contains(second.id()));
    assert!(!rewritten.contains(first.id()));
    assert!(!rewritten.contains(third.id()));
}

#[tokio::test]
async fn test_reconciled_ids_skipped_silently() {
    let store = AssetStore::new(RegistryConfig::default());
    let uploader = Arc::new(MockUploader::default());
    let coordinator = UploadCoordinator::new(store.clone(), uploader.clone());

    let live = store.create(png(8)).await.unwrap();
    let gone = store.create(png(8)).await.unwrap();
    store.revoke(gone.id()).await;

    let report = coordinator
        .commit(&[live.id().clone(), gone.id().clone()])
        .await;

    // The concurrently reconciled id produces no result at all.
    assert_eq!(report.len(), 1);
    assert_eq!(report.results()[0].local_id(), live.id());
    assert_eq!(uploader.calls(), vec![live.id().clone()]);
}

#[tokio::test]
async fn test_commit_does_not_revoke() {
    let store = AssetStore::new(RegistryConfig::default());
    let uploader = Arc::new(MockUploader::default());
    let coordinator = UploadCoordinator::new(store.clone(), uploader.clone());

    let reference = store.create(png(8)).await.unwrap();
    coordinator.commit(&[reference.id().clone()]).await;

    // Revocation belongs to the caller, after a successful rewrite.
    assert!(store.contains(reference.id()).await);
}

#[tokio::test]
async fn test_empty_commit() {
    let store = AssetStore::new(RegistryConfig::default());
    let uploader = Arc::new(MockUploader::default());
    let coordinator = UploadCoordinator::new(store, uploader.clone());

    let report = coordinator.commit(&[]).await;
    assert!(report.is_empty());
    assert!(uploader.calls().is_empty());
}
