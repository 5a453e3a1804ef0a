//! Store error types.

use thiserror::Error;

/// Store operation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Collection not found
    #[error("Collection '{collection}' not found")]
    CollectionNotFound { collection: String },

    /// Record not found
    #[error("Record {id} not found in collection '{collection}'")]
    RecordNotFound { collection: String, id: i64 },

    /// Two seeded records share an id
    #[error("Duplicate id {id} in collection '{collection}'")]
    DuplicateId { collection: String, id: i64 },

    /// Id counter exhausted
    #[error("Id space exhausted in collection '{collection}'")]
    IdOverflow { collection: String },

    /// Lock poisoned (RwLock poisoned)
    #[error("Lock poisoned")]
    LockPoisoned,

    /// Fixture could not be parsed
    #[error("Invalid fixture: {0}")]
    Fixture(String),

    /// I/O error while reading a fixture
    #[error("I/O error: {0}")]
    Io(String),
}
