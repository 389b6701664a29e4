//! The local asset store.

use crate::RegistryConfig;
use matisse_core::{AssetPayload, LocalReference};
use matisse_error::{AssetError, AssetErrorKind, MatisseResult};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

/// A tracked payload plus whether the document has ever embedded its id.
///
/// An entry starts unseen: the mint-to-insert window is asynchronous, so a
/// content notification generated before the insert landed must not count the
/// new reference as orphaned. Reconciliation flips the flag the first time it
/// sees the id embedded; only seen entries are eligible for pruning.
#[derive(Debug, Clone)]
struct AssetEntry {
    payload: AssetPayload,
    embedded_seen: bool,
}

/// Handle table from local reference id to binary payload.
///
/// Mints session-scoped `local:<uuid>` references and owns the referenced
/// payloads exclusively. Cloning the store is cheap and shares the underlying
/// table, so the reconciler and the upload coordinator operate on one
/// registry.
#[derive(Debug, Clone)]
pub struct AssetStore {
    config: RegistryConfig,
    entries: Arc<RwLock<HashMap<String, AssetEntry>>>,
}

impl AssetStore {
    /// Create an empty store with the given configuration.
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            config,
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// The store's configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Mint a reference for the payload and register it.
    ///
    /// Enforces the configured size ceiling before minting anything; a
    /// rejected payload leaves no trace in the registry. Inserting the
    /// returned reference into the document is the caller's responsibility.
    #[tracing::instrument(skip(self, payload), fields(size = payload.size_bytes(), mime = %payload.mime_type()))]
    pub async fn create(&self, payload: AssetPayload) -> MatisseResult<LocalReference> {
        let limit = *self.config.max_payload_bytes();
        if payload.size_bytes() > limit {
            return Err(AssetError::new(AssetErrorKind::PayloadTooLarge {
                size_bytes: payload.size_bytes(),
                limit_bytes: limit,
            })
            .into());
        }

        let reference = LocalReference::mint(payload.mime_type().clone(), payload.size_bytes());
        let mut entries = self.entries.write().await;
        entries.insert(
            reference.id().clone(),
            AssetEntry {
                payload,
                embedded_seen: false,
            },
        );

        tracing::debug!(id = %reference.id(), tracked = entries.len(), "Registered local asset");
        Ok(reference)
    }

    /// Revoke a reference, releasing its payload.
    ///
    /// Idempotent: unknown or already-revoked ids are a no-op. Returns whether
    /// an entry was actually removed.
    #[tracing::instrument(skip(self))]
    pub async fn revoke(&self, id: &str) -> bool {
        let mut entries = self.entries.write().await;
        let removed = entries.remove(id).is_some();
        if removed {
            tracing::debug!(id, tracked = entries.len(), "Revoked local asset");
        }
        removed
    }

    /// Revoke every tracked reference; the session teardown path.
    ///
    /// Returns the number of references revoked.
    #[tracing::instrument(skip(self))]
    pub async fn revoke_all(&self) -> usize {
        let mut entries = self.entries.write().await;
        let revoked = entries.len();
        entries.clear();
        if revoked > 0 {
            tracing::info!(revoked, "Revoked all local assets");
        }
        revoked
    }

    /// Remove every previously seen entry whose id is not in `embedded`,
    /// returning the removed ids. Marking, diff and removal happen under one
    /// write lock.
    ///
    /// Entries never yet seen embedded are spared: the notification being
    /// processed may predate the insert of a freshly minted reference, and
    /// revoking it here would leave the document embedding a dead id.
    pub(crate) async fn retain_embedded(&self, embedded: &HashSet<String>) -> Vec<String> {
        let mut entries = self.entries.write().await;
        let mut orphans = Vec::new();
        for (id, entry) in entries.iter_mut() {
            if embedded.contains(id) {
                entry.embedded_seen = true;
            } else if entry.embedded_seen {
                orphans.push(id.clone());
            }
        }
        for id in &orphans {
            entries.remove(id);
            tracing::debug!(id, "Revoked orphaned asset");
        }
        orphans
    }

    /// Clone the payloads for the given ids, in input order.
    ///
    /// The commit path reads its payloads through this snapshot so a revoke
    /// landing mid-upload cannot corrupt work already started. Ids absent from
    /// the registry are skipped silently: they were reconciled away between
    /// the caller reading the document and taking the snapshot.
    pub async fn snapshot(&self, ids: &[String]) -> Vec<(String, AssetPayload)> {
        let entries = self.entries.read().await;
        ids.iter()
            .filter_map(|id| {
                entries
                    .get(id)
                    .map(|entry| (id.clone(), entry.payload.clone()))
            })
            .collect()
    }

    /// Ids of every currently tracked reference.
    pub async fn ids(&self) -> HashSet<String> {
        self.entries.read().await.keys().cloned().collect()
    }

    /// Whether the given id is currently tracked.
    pub async fn contains(&self, id: &str) -> bool {
        self.entries.read().await.contains_key(id)
    }

    /// Number of tracked references.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the registry is empty.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
