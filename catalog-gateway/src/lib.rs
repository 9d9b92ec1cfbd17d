//! HTTP API for the in-memory catalog service.
//!
//! Exposes CRUD endpoints for users and products over a shared
//! [`catalog_core::Catalog`], plus health and fault-injection endpoints
//! used by external test harnesses.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod routes;
pub mod state;
