//! Matisse - deferred local media attachment with lazy remote upload.
//!
//! Matisse wraps a rich-text editor host and adds one mechanism on top of it:
//! images inserted while editing are shown immediately through session-scoped
//! local references (no network round trip), and only on final submission are
//! the surviving attachments uploaded to the remote store and the document
//! rewritten to their permanent URLs.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use matisse::{AssetPayload, BufferEditor, EditorSession, MatisseConfig};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let host = Arc::new(BufferEditor::new());
//!     let session = EditorSession::with_http_uploader(host, MatisseConfig::load()?)?;
//!     let _loop = session.run_reconciler()?;
//!
//!     // User picks a file: shown instantly via a local reference.
//!     let bytes = std::fs::read("photo.png")?;
//!     session.attach(AssetPayload::image(bytes, "image/png")).await?;
//!
//!     // On form submission: upload, rewrite, report.
//!     let outcome = session.submit().await?;
//!     println!("Final content: {}", outcome.content());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Matisse is organized as a workspace with focused crates:
//!
//! - `matisse_error` - Error types
//! - `matisse_core` - Core data types and document rewriting
//! - `matisse_interface` - The `EditorHost` trait and in-memory host
//! - `matisse_registry` - Session-scoped asset registry and reconciler
//! - `matisse_upload` - Upload transports and the commit coordinator
//!
//! This crate (`matisse`) re-exports everything and adds the
//! [`EditorSession`] orchestration on top.
//!
//! # Lifecycle guarantees
//!
//! - An asset deleted from the document is revoked by the reconciler; one
//!   still embedded never is.
//! - Each live asset uploads exactly once per submission, concurrently, and a
//!   single failure never aborts its siblings.
//! - References are revoked only after the rewritten content is written back,
//!   so a failed rewrite cannot lose the last copy of an asset.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod observability;
mod session;

pub use config::MatisseConfig;
pub use observability::{
    init_observability, init_observability_with_config, ObservabilityConfig,
};
pub use session::{EditorSession, SubmitOutcome};

// Re-export the workspace crates for convenience.
pub use matisse_core::{
    embedded_local_ids, image_embed, rewrite, AssetPayload, CommitReport, LocalReference,
    UploadMapping, UploadResult, LOCAL_SCHEME,
};
pub use matisse_error::{
    AssetError, AssetErrorKind, ConfigError, EditorError, MatisseError, MatisseErrorKind,
    MatisseResult, SessionError, SessionErrorKind, UploadError, UploadErrorKind,
};
pub use matisse_interface::{BufferEditor, ContentChanged, EditorHost};
pub use matisse_registry::{AssetStore, Reconciler, RegistryConfig};
pub use matisse_upload::{AssetUploader, HttpUploader, UploadConfig, UploadCoordinator};
