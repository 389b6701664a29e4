//! Editing session error types.

/// Kinds of session lifecycle errors.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum SessionErrorKind {
    /// A submission is already outstanding (single-flight discipline)
    #[display("A submission is already in flight")]
    SubmitInFlight,

    /// The reconciler loop has already been started for this session
    #[display("Reconciler loop already running")]
    ReconcilerRunning,

    /// Operation attempted after the session was closed
    #[display("Session closed: {}", _0)]
    Closed(String),
}

/// Session error with location tracking.
///
/// # Examples
///
/// ```
/// use matisse_error::{SessionError, SessionErrorKind};
///
/// let err = SessionError::new(SessionErrorKind::SubmitInFlight);
/// assert!(format!("{}", err).contains("in flight"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Session Error: {} at line {} in {}", kind, line, file)]
pub struct SessionError {
    /// The kind of error that occurred
    pub kind: SessionErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl SessionError {
    /// Create a new session error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SessionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
