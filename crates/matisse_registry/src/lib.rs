//! Session-scoped local asset registry for Matisse.
//!
//! This crate owns the lifetime of local references minted during an editing
//! session. [`AssetStore`] is the handle table from reference id to binary
//! payload; [`Reconciler`] prunes entries no longer reachable from the live
//! document so the registry never grows without bound across a session.
//!
//! # Ownership
//!
//! The store is the exclusive owner of every payload. A reference is valid
//! from `create` until `revoke`; revocation is idempotent, and the payload is
//! unreachable afterwards. Clones of the store share one underlying table, so
//! the reconciler and an in-flight commit observe the same registry.
//!
//! # Example
//!
//! ```rust
//! use matisse_core::AssetPayload;
//! use matisse_registry::{AssetStore, RegistryConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = AssetStore::new(RegistryConfig::default());
//!
//! let payload = AssetPayload::image(vec![0u8; 1024], "image/png");
//! let reference = store.create(payload).await?;
//! assert!(store.contains(reference.id()).await);
//!
//! store.revoke(reference.id()).await;
//! assert!(!store.contains(reference.id()).await);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod reconcile;
mod store;

pub use config::RegistryConfig;
pub use reconcile::Reconciler;
pub use store::AssetStore;
