//! Top-level error wrapper types.

use crate::{AssetError, ConfigError, EditorError, SessionError, UploadError};

/// This is the foundation error enum. Leaf errors from every matisse crate
/// convert into it through `derive_more::From`.
///
/// # Examples
///
/// ```
/// use matisse_error::{MatisseError, EditorError};
///
/// let editor_err = EditorError::new("Host detached");
/// let err: MatisseError = editor_err.into();
/// assert!(format!("{}", err).contains("Editor Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum MatisseErrorKind {
    /// Asset registration error
    #[from(AssetError)]
    Asset(AssetError),
    /// Upload error
    #[from(UploadError)]
    Upload(UploadError),
    /// Session lifecycle error
    #[from(SessionError)]
    Session(SessionError),
    /// Editor host error
    #[from(EditorError)]
    Editor(EditorError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Matisse error with kind discrimination.
///
/// # Examples
///
/// ```
/// use matisse_error::{MatisseResult, ConfigError};
///
/// fn might_fail() -> MatisseResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Matisse Error: {}", _0)]
pub struct MatisseError(Box<MatisseErrorKind>);

impl MatisseError {
    /// Create a new error from a kind.
    pub fn new(kind: MatisseErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MatisseErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to MatisseErrorKind
impl<T> From<T> for MatisseError
where
    T: Into<MatisseErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Matisse operations.
///
/// # Examples
///
/// ```
/// use matisse_error::{MatisseResult, EditorError};
///
/// fn read_selection() -> MatisseResult<String> {
///     Err(EditorError::new("No selection"))?
/// }
/// ```
pub type MatisseResult<T> = std::result::Result<T, MatisseError>;
