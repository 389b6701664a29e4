//! Upload error types.

/// Kinds of per-asset upload failures.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum UploadErrorKind {
    /// HTTP transport failure (connection refused, timeout, TLS)
    #[display("HTTP request failed: {}", _0)]
    Http(String),

    /// Endpoint returned a non-success status
    #[display("Upload endpoint returned: {}", _0)]
    Status(String),

    /// Response body could not be parsed
    #[display("Failed to deserialize response: {}", _0)]
    Deserialization(String),

    /// Response parsed but carried no permanent URL
    #[display("Response missing permanent URL: {}", _0)]
    MissingUrl(String),
}

/// Upload error with location tracking.
///
/// Recorded per asset in `UploadResult::Failed`; never aborts sibling uploads.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Upload Error: {} at line {} in {}", kind, line, file)]
pub struct UploadError {
    /// The error kind
    pub kind: UploadErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl UploadError {
    /// Create a new UploadError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: UploadErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
