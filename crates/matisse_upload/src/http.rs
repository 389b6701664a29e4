//! HTTP multipart upload transport.

use crate::{AssetUploader, UploadConfig};
use async_trait::async_trait;
use matisse_core::{AssetPayload, LOCAL_SCHEME};
use matisse_error::{ConfigError, MatisseResult, UploadError, UploadErrorKind};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::instrument;

/// Response body of the remote store.
#[derive(Debug, Deserialize)]
struct UploadReceipt {
    #[serde(rename = "cloudUrl")]
    cloud_url: Option<String>,
}

/// Uploader backed by an HTTP endpoint accepting multipart form posts.
///
/// Sends the payload as a `file` part plus a `folderName` text part and reads
/// the permanent URL from the `cloudUrl` field of the JSON response.
#[derive(Debug, Clone)]
pub struct HttpUploader {
    config: UploadConfig,
    client: reqwest::Client,
}

impl HttpUploader {
    /// Create an uploader with the configured endpoint and request timeout.
    #[instrument(skip(config), fields(endpoint = %config.endpoint()))]
    pub fn new(config: UploadConfig) -> MatisseResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build HTTP client: {e}")))?;

        tracing::debug!("Created HTTP uploader");
        Ok(Self { config, client })
    }

    /// The uploader's configuration.
    pub fn config(&self) -> &UploadConfig {
        &self.config
    }

    /// Filename sent to the remote store for a payload.
    ///
    /// Falls back to the reference id plus the MIME subtype when the picker
    /// provided no name.
    fn filename(local_id: &str, payload: &AssetPayload) -> String {
        if let Some(name) = payload.filename() {
            return name.clone();
        }
        let stem = local_id.strip_prefix(LOCAL_SCHEME).unwrap_or(local_id);
        let extension = payload.mime_type().split('/').nth(1).unwrap_or("bin");
        format!("{stem}.{extension}")
    }
}

#[async_trait]
impl AssetUploader for HttpUploader {
    #[instrument(skip(self, payload), fields(size = payload.size_bytes()))]
    async fn upload(
        &self,
        local_id: &str,
        payload: &AssetPayload,
    ) -> Result<String, UploadError> {
        let part = Part::bytes(payload.bytes().clone())
            .file_name(Self::filename(local_id, payload))
            .mime_str(payload.mime_type())
            .map_err(|e| {
                UploadError::new(UploadErrorKind::Http(format!("Invalid MIME type: {e}")))
            })?;
        let form = Form::new()
            .part("file", part)
            .text("folderName", self.config.folder().clone());

        let response = self
            .client
            .post(self.config.endpoint())
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Upload request failed: {}", e);
                UploadError::new(UploadErrorKind::Http(format!("Request failed: {e}")))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("Upload endpoint returned error: {}", status);
            return Err(UploadError::new(UploadErrorKind::Status(status.to_string())));
        }

        let receipt: UploadReceipt = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse upload response: {}", e);
            UploadError::new(UploadErrorKind::Deserialization(format!(
                "Failed to parse response: {e}"
            )))
        })?;

        match receipt.cloud_url {
            Some(url) if !url.is_empty() => {
                tracing::debug!(url = %url, "Upload resolved");
                Ok(url)
            }
            _ => Err(UploadError::new(UploadErrorKind::MissingUrl(
                local_id.to_string(),
            ))),
        }
    }
}
