//! Binary asset payload types.

/// Binary payload picked by the user, plus the metadata needed to upload it.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters, derive_new::new)]
pub struct AssetPayload {
    /// Raw binary content
    bytes: Vec<u8>,
    /// MIME type (e.g., "image/png")
    mime_type: String,
    /// Original filename, if the picker provided one
    filename: Option<String>,
}

impl AssetPayload {
    /// Convenience constructor for an image payload without a filename.
    pub fn image(bytes: impl Into<Vec<u8>>, mime_type: impl Into<String>) -> Self {
        Self::new(bytes.into(), mime_type.into(), None)
    }

    /// Size of the payload in bytes.
    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the payload declares an image MIME type.
    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }
}
