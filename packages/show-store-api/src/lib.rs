//! REST API server for the show tracker.
//!
//! Provides the response envelope, the `/shows` CRUD endpoints,
//! request routing and the hyper server loop.

pub mod handlers;
pub mod router;
pub mod server;
