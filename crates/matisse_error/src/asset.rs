//! Asset registration error types.

/// Kinds of asset registration errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum AssetErrorKind {
    /// Payload exceeds the configured size ceiling
    #[display("Payload of {} bytes exceeds the {} byte ceiling", size_bytes, limit_bytes)]
    PayloadTooLarge {
        /// Size of the rejected payload in bytes
        size_bytes: usize,
        /// Configured ceiling in bytes
        limit_bytes: usize,
    },
    /// Media type is not accepted by the editor
    #[display("Unsupported media type: {}", _0)]
    UnsupportedMediaType(String),
    /// Payload contained no bytes
    #[display("Empty payload: {}", _0)]
    EmptyPayload(String),
}

/// Asset error with location tracking.
///
/// # Examples
///
/// ```
/// use matisse_error::{AssetError, AssetErrorKind};
///
/// let err = AssetError::new(AssetErrorKind::UnsupportedMediaType("text/html".to_string()));
/// assert!(format!("{}", err).contains("Unsupported"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Asset Error: {} at line {} in {}", kind, line, file)]
pub struct AssetError {
    /// The kind of error that occurred
    pub kind: AssetErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl AssetError {
    /// Create a new asset error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: AssetErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
