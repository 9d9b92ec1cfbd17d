//! Core types for the catalog service.
//!
//! Defines the user and product records, the payloads that create and patch
//! them, and the lock-guarded in-memory [`Catalog`] that owns both
//! collections.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod id;
pub mod record;
pub mod seed;
pub mod store;

pub use error::CoreError;
pub use id::RecordId;
pub use record::{
    Product, ProductDraft, ProductPatch, Record, RecordKind, Removable, User, UserDraft, UserPatch,
};
pub use store::{Catalog, Collection};
