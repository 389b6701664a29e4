//! Session-scoped local reference types.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// URI scheme prefix for session-scoped local references.
///
/// A minted reference id always has the form `local:<uuid-v4>`. The scheme is
/// the platform-neutral stand-in for browser object URLs: it never resolves
/// outside the owning session.
pub const LOCAL_SCHEME: &str = "local:";

/// Reference to a locally held asset, valid for the editing session only.
///
/// A `LocalReference` stands in for a binary payload from the moment the user
/// picks a file until the payload is either uploaded and committed or orphaned
/// by deletion. The asset store owns the payload exclusively; a reference must
/// never be dereferenced after revocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_getters::Getters)]
pub struct LocalReference {
    /// Unique reference id in `local:<uuid>` form
    id: String,
    /// MIME type of the underlying payload
    mime_type: String,
    /// Size of the underlying payload in bytes
    size_bytes: usize,
    /// When the reference was minted
    created_at: DateTime<Utc>,
}

impl LocalReference {
    /// Mint a fresh reference for a payload of the given type and size.
    pub fn mint(mime_type: impl Into<String>, size_bytes: usize) -> Self {
        Self {
            id: format!("{}{}", LOCAL_SCHEME, Uuid::new_v4()),
            mime_type: mime_type.into(),
            size_bytes,
            created_at: Utc::now(),
        }
    }
}

impl std::fmt::Display for LocalReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}
