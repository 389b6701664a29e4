//! Error types for the Matisse library.
//!
//! This crate provides the foundation error types used throughout the Matisse
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use matisse_error::{MatisseResult, EditorError};
//!
//! fn read_content() -> MatisseResult<String> {
//!     Err(EditorError::new("Host not mounted"))?
//! }
//!
//! match read_content() {
//!     Ok(content) => println!("Got: {}", content),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod asset;
mod config;
mod editor;
mod error;
mod session;
mod upload;

pub use asset::{AssetError, AssetErrorKind};
pub use config::ConfigError;
pub use editor::EditorError;
pub use error::{MatisseError, MatisseErrorKind, MatisseResult};
pub use session::{SessionError, SessionErrorKind};
pub use upload::{UploadError, UploadErrorKind};
