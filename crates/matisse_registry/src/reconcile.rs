//! Attachment reconciliation.

use crate::AssetStore;
use std::collections::HashSet;

/// Prunes registry entries no longer embedded in the document.
///
/// Runs once per content-changed notification. The input set MUST come from
/// the authoritative post-mutation content (the notification payload), never
/// a stale snapshot. A reference is only eligible for pruning once a pass has
/// seen it embedded: notifications queued before an in-flight insert landed
/// do not yet contain the new id, and revoking on their evidence would
/// destroy a payload the document is about to embed.
#[derive(Debug, Clone)]
pub struct Reconciler {
    store: AssetStore,
}

impl Reconciler {
    /// Create a reconciler over the shared store.
    pub fn new(store: AssetStore) -> Self {
        Self { store }
    }

    /// Revoke every previously seen reference not present in `embedded_ids`.
    ///
    /// References never yet seen embedded are left alone until a later pass
    /// observes them; everything else absent from the set is revoked.
    /// Idempotent and side-effect-free when nothing is orphaned. Returns the
    /// revoked ids. Marking and removal happen under one write lock, so a
    /// concurrent `create` cannot slip between the diff and the revocation.
    #[tracing::instrument(skip(self, embedded_ids), fields(embedded = embedded_ids.len()))]
    pub async fn reconcile(&self, embedded_ids: &HashSet<String>) -> Vec<String> {
        let orphans = self.store.retain_embedded(embedded_ids).await;
        if !orphans.is_empty() {
            tracing::debug!(orphans = orphans.len(), "Reconciled orphaned assets");
        }
        orphans
    }
}
