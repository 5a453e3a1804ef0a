//! In-memory record store for the show tracker API.
//!
//! Provides the show record type, the `ShowStore` interface the HTTP
//! layer is written against, and a fixture-seeded in-memory implementation.

pub mod config;
pub mod error;
pub mod fixture;
pub mod show;
pub mod store;

pub use config::{StoreConfig, SHOWS_COLLECTION};
pub use error::StoreError;
pub use show::{EpisodesSeen, Show};
pub use store::{MemoryStore, ShowStore};
