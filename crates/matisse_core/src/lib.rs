//! Core data types for the Matisse deferred media attachment library.
//!
//! This crate provides the foundation data types shared across the Matisse
//! workspace: session-scoped local references, binary asset payloads, upload
//! outcome types, and the pure document-rewriting helpers.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod document;
mod payload;
mod reference;
mod upload;

pub use document::{embedded_local_ids, image_embed, rewrite};
pub use payload::AssetPayload;
pub use reference::{LocalReference, LOCAL_SCHEME};
pub use upload::{CommitReport, UploadMapping, UploadResult};
