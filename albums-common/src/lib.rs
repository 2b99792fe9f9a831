//! # Albums Common Library
//!
//! Shared code for the album catalog service:
//! - Album model and seed catalog
//! - In-memory record store with exact-match lookups
//! - Bootstrap configuration loading
//! - Common error types

pub mod config;
pub mod error;
pub mod model;
pub mod store;

pub use error::{Error, Result};
pub use model::Album;
pub use store::AlbumStore;
