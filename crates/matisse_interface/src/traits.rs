//! The editor host trait.

use crate::ContentChanged;
use async_trait::async_trait;
use matisse_core::LocalReference;
use matisse_error::MatisseResult;
use tokio::sync::mpsc::UnboundedReceiver;

/// Seam between the attachment lifecycle machinery and the wrapped editor.
///
/// Implementations bind a concrete editing engine: they expose the current
/// serialized content, accept a rewritten document, insert freshly minted
/// asset references at the cursor, and emit one [`ContentChanged`]
/// notification per mutation, in order.
#[async_trait]
pub trait EditorHost: Send + Sync {
    /// Current serialized document content.
    async fn serialized_content(&self) -> MatisseResult<String>;

    /// Replace the document content wholesale (the post-rewrite write-back).
    async fn set_serialized_content(&self, content: &str) -> MatisseResult<()>;

    /// Insert an embed for the given local reference at the cursor.
    ///
    /// The host owns cursor placement; the caller has already registered the
    /// reference with the asset store.
    async fn insert_asset_at_cursor(&self, reference: &LocalReference) -> MatisseResult<()>;

    /// Subscribe to content-changed notifications.
    ///
    /// Notifications are delivered in mutation order and each carries the
    /// already-updated content. Every call returns an independent receiver.
    fn subscribe(&self) -> UnboundedReceiver<ContentChanged>;
}
