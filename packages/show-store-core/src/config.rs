//! Store configuration.

use std::path::PathBuf;

/// Collection served by the show routes.
pub const SHOWS_COLLECTION: &str = "shows";

/// Store configuration.
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    /// JSON fixture used to seed the store (built-in fixture when `None`)
    pub fixture_path: Option<PathBuf>,
}

impl StoreConfig {
    /// Creates a configuration that seeds from the given fixture file.
    pub fn with_fixture(path: impl Into<PathBuf>) -> Self {
        Self {
            fixture_path: Some(path.into()),
        }
    }
}
