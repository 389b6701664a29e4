//! Remote upload coordination for Matisse.
//!
//! At submission time every still-live local reference is converted into a
//! permanent remote counterpart exactly once. [`UploadCoordinator::commit`]
//! snapshots the payloads up front, fans the uploads out concurrently, joins
//! them behind a single barrier, and reports per-asset outcomes without
//! letting one failure abort its siblings.
//!
//! The transport is pluggable through [`AssetUploader`]; [`HttpUploader`] is
//! the bundled reqwest backend speaking the multipart wire shape of the
//! remote store.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod coordinator;
mod http;
mod uploader;

pub use config::UploadConfig;
pub use coordinator::UploadCoordinator;
pub use http::HttpUploader;
pub use uploader::AssetUploader;
