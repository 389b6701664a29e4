//! Editor host error types.

/// Editor host error with source location.
///
/// Host adapters wrap whatever their editing engine reports into this type.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Editor Error: {} at line {} in {}", message, line, file)]
pub struct EditorError {
    /// The underlying error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl EditorError {
    /// Create a new EditorError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use matisse_error::EditorError;
    ///
    /// let err = EditorError::new("Cursor out of range");
    /// assert!(err.message.contains("Cursor"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
