//! Editor host trait definitions for the Matisse workspace.
//!
//! The rich-text editing engine itself (document model, cursor handling,
//! rendering) is an external collaborator. This crate defines the seam it is
//! reached through: the [`EditorHost`] trait, the [`ContentChanged`]
//! notification it emits after every mutation, and [`BufferEditor`], a
//! minimal in-memory host used by tests and demos.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod buffer;
mod traits;
mod types;

pub use buffer::BufferEditor;
pub use traits::EditorHost;
pub use types::ContentChanged;
