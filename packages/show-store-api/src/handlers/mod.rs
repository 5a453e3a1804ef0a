//! HTTP endpoint implementations.

pub mod index_handlers;
pub mod request_utils;
pub mod response;
pub mod show_handlers;

pub use index_handlers::{hello_world, mirror};
pub use response::{create_response, status_response, Envelope, EnvelopeError};
pub use show_handlers::{create_show, delete_show, get_show, list_shows, update_show};
