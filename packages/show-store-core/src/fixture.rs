//! JSON fixtures used to seed the store at startup.
//!
//! A fixture is a JSON object mapping collection names to record arrays:
//!
//! ```json
//! { "shows": [ { "id": 1, "name": "Game of Thrones", "episodes_seen": 0 } ] }
//! ```

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use crate::error::StoreError;
use crate::show::Show;

const BUILTIN_FIXTURE: &str = include_str!("../fixtures/shows.json");

/// Seed data keyed by collection name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fixture {
    collections: BTreeMap<String, Vec<Show>>,
}

impl Fixture {
    /// Returns the fixture compiled into the crate.
    pub fn builtin() -> Result<Self, StoreError> {
        Self::from_json(BUILTIN_FIXTURE)
    }

    /// Parses and validates a fixture from JSON text.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let collections: BTreeMap<String, Vec<Show>> =
            serde_json::from_str(json).map_err(|e| StoreError::Fixture(e.to_string()))?;
        let fixture = Self { collections };
        fixture.validate()?;
        Ok(fixture)
    }

    /// Reads a fixture file from disk.
    ///
    /// # Arguments
    /// * `path` - Path to a JSON fixture file
    ///
    /// # Returns
    /// `Result<Fixture, StoreError>` with the parsed seed data.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let json = fs::read_to_string(path)
            .map_err(|e| StoreError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    /// Adds (or replaces) a collection.
    pub fn with_collection(mut self, name: impl Into<String>, records: Vec<Show>) -> Self {
        self.collections.insert(name.into(), records);
        self
    }

    /// Returns the seeded collection names in sorted order.
    pub fn collection_names(&self) -> Vec<&str> {
        self.collections.keys().map(String::as_str).collect()
    }

    /// Consumes the fixture, yielding each collection and its records.
    pub fn into_collections(self) -> impl Iterator<Item = (String, Vec<Show>)> {
        self.collections.into_iter()
    }

    fn validate(&self) -> Result<(), StoreError> {
        for (name, records) in &self.collections {
            let mut seen = HashSet::with_capacity(records.len());
            for record in records {
                if !seen.insert(record.id) {
                    return Err(StoreError::DuplicateId {
                        collection: name.clone(),
                        id: record.id,
                    });
                }
            }
        }
        Ok(())
    }
}
