//! Uploader trait definition.

use async_trait::async_trait;
use matisse_core::AssetPayload;
use matisse_error::UploadError;

/// Trait for pluggable upload transports.
///
/// Implementations push one binary payload to the remote store and resolve
/// its permanent URL. Errors are per-asset: the coordinator records them
/// without aborting sibling uploads, and no implementation should retry on
/// its own.
#[async_trait]
pub trait AssetUploader: Send + Sync {
    /// Upload one payload, returning its permanent URL.
    ///
    /// # Arguments
    ///
    /// * `local_id` - The local reference being replaced (for logging and
    ///   filename derivation only; the remote store never sees local ids)
    /// * `payload` - The binary payload to upload
    async fn upload(&self, local_id: &str, payload: &AssetPayload)
    -> Result<String, UploadError>;
}
