//! Store interface and the in-memory implementation behind it.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::config::{StoreConfig, SHOWS_COLLECTION};
use crate::error::StoreError;
use crate::fixture::Fixture;
use crate::show::Show;

/// CRUD primitives the HTTP layer is written against.
///
/// Every call is synchronous and expected to complete immediately. Calls are
/// independent: nothing here spans two primitives, so a read followed by a
/// write can interleave with another caller's write.
pub trait ShowStore: Send + Sync {
    /// Returns every record in a collection, in insertion order.
    fn get(&self, collection: &str) -> Result<Vec<Show>, StoreError>;

    /// Returns the record with the given id, if any.
    fn get_by_id(&self, collection: &str, id: i64) -> Result<Option<Show>, StoreError>;

    /// Stores a new record, replacing its id with a freshly assigned one.
    fn create(&self, collection: &str, record: Show) -> Result<Show, StoreError>;

    /// Overwrites every field of an existing record except its id.
    fn update_by_id(&self, collection: &str, id: i64, record: Show) -> Result<Show, StoreError>;

    /// Removes a record. Removing an id that is not present is a no-op.
    fn delete_by_id(&self, collection: &str, id: i64) -> Result<(), StoreError>;
}

/// One named collection.
#[derive(Debug, Default)]
struct Collection {
    records: Vec<Show>,
    /// Highest id handed out so far; never decreases
    last_id: i64,
}

impl Collection {
    fn seeded(records: Vec<Show>) -> Self {
        let last_id = records.iter().map(|r| r.id).max().unwrap_or(0).max(0);
        Self { records, last_id }
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }
}

/// Process-local store holding all collections in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Collection>>,
}

impl MemoryStore {
    /// Creates a store with no collections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded from fixture data.
    ///
    /// Id assignment in each collection continues after the largest seeded id.
    pub fn from_fixture(fixture: Fixture) -> Self {
        let collections = fixture
            .into_collections()
            .map(|(name, records)| (name, Collection::seeded(records)))
            .collect();
        Self {
            collections: RwLock::new(collections),
        }
    }

    /// Opens a store according to configuration.
    ///
    /// The fixture must seed a `shows` collection, since every endpoint
    /// reads it.
    ///
    /// # Arguments
    /// * `config` - Store configuration; the built-in fixture is used when no
    ///   fixture path is set
    ///
    /// # Returns
    /// `Result<MemoryStore, StoreError>` with the seeded store.
    pub fn open(config: &StoreConfig) -> Result<Self, StoreError> {
        let fixture = match &config.fixture_path {
            Some(path) => {
                tracing::info!("Seeding store from {}", path.display());
                Fixture::load(path)?
            }
            None => {
                tracing::info!("Seeding store from built-in fixture");
                Fixture::builtin()?
            }
        };
        if !fixture.collection_names().contains(&SHOWS_COLLECTION) {
            return Err(StoreError::CollectionNotFound {
                collection: SHOWS_COLLECTION.to_string(),
            });
        }
        let store = Self::from_fixture(fixture);
        for name in store.collection_names()? {
            tracing::debug!("Collection '{}' holds {} records", name, store.len(&name)?);
        }
        Ok(store)
    }

    /// Returns the names of all collections.
    pub fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        let collections = self.collections.read().map_err(|_| StoreError::LockPoisoned)?;
        let names = collections.keys().cloned().collect();
        Ok(names)
    }

    /// Returns the number of records in a collection.
    pub fn len(&self, collection: &str) -> Result<usize, StoreError> {
        let collections = self.collections.read().map_err(|_| StoreError::LockPoisoned)?;
        let len = lookup(&collections, collection)?.records.len();
        Ok(len)
    }
}

fn lookup<'a>(
    collections: &'a HashMap<String, Collection>,
    name: &str,
) -> Result<&'a Collection, StoreError> {
    collections
        .get(name)
        .ok_or_else(|| StoreError::CollectionNotFound {
            collection: name.to_string(),
        })
}

fn lookup_mut<'a>(
    collections: &'a mut HashMap<String, Collection>,
    name: &str,
) -> Result<&'a mut Collection, StoreError> {
    collections
        .get_mut(name)
        .ok_or_else(|| StoreError::CollectionNotFound {
            collection: name.to_string(),
        })
}

impl ShowStore for MemoryStore {
    fn get(&self, collection: &str) -> Result<Vec<Show>, StoreError> {
        let collections = self.collections.read().map_err(|_| StoreError::LockPoisoned)?;
        let records = lookup(&collections, collection)?.records.clone();
        Ok(records)
    }

    fn get_by_id(&self, collection: &str, id: i64) -> Result<Option<Show>, StoreError> {
        let collections = self.collections.read().map_err(|_| StoreError::LockPoisoned)?;
        let target = lookup(&collections, collection)?;
        let found = target.records.iter().find(|r| r.id == id).cloned();
        Ok(found)
    }

    fn create(&self, collection: &str, mut record: Show) -> Result<Show, StoreError> {
        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        let target = lookup_mut(&mut collections, collection)?;

        let id = target
            .last_id
            .checked_add(1)
            .ok_or_else(|| StoreError::IdOverflow {
                collection: collection.to_string(),
            })?;
        target.last_id = id;
        record.id = id;
        target.records.push(record.clone());

        tracing::debug!("Created record {} in '{}'", id, collection);
        Ok(record)
    }

    fn update_by_id(&self, collection: &str, id: i64, record: Show) -> Result<Show, StoreError> {
        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        let target = lookup_mut(&mut collections, collection)?;
        let index = target
            .position(id)
            .ok_or_else(|| StoreError::RecordNotFound {
                collection: collection.to_string(),
                id,
            })?;

        let stored = &mut target.records[index];
        stored.name = record.name;
        stored.episodes_seen = record.episodes_seen;
        Ok(stored.clone())
    }

    fn delete_by_id(&self, collection: &str, id: i64) -> Result<(), StoreError> {
        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        let target = lookup_mut(&mut collections, collection)?;
        if let Some(index) = target.position(id) {
            target.records.remove(index);
            tracing::debug!("Deleted record {} from '{}'", id, collection);
        }
        Ok(())
    }
}
