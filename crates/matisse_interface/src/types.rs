//! Notification types emitted by editor hosts.

/// Notification that the document content changed.
///
/// Carries the authoritative post-mutation serialized content rather than a
/// pointer back into the host. Reconciliation works from this snapshot, so a
/// just-inserted asset can never be revoked on the basis of stale content.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct ContentChanged {
    /// Serialized content after the mutation was applied
    content: String,
    /// Monotonic revision counter, starting at 1 for the first mutation
    revision: u64,
}

impl ContentChanged {
    /// Create a notification for the given post-mutation content.
    pub fn new(content: impl Into<String>, revision: u64) -> Self {
        Self {
            content: content.into(),
            revision,
        }
    }
}
