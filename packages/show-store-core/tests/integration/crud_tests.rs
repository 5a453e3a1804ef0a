//! Full record lifecycle through the `ShowStore` trait object.

use std::sync::Arc;

use show_store_core::fixture::Fixture;
use show_store_core::{EpisodesSeen, MemoryStore, Show, ShowStore, SHOWS_COLLECTION};

fn empty_store() -> Arc<dyn ShowStore> {
    Arc::new(MemoryStore::from_fixture(
        Fixture::default().with_collection(SHOWS_COLLECTION, Vec::new()),
    ))
}

/// create → read → update → delete → read
#[test]
fn test_full_crud_lifecycle() {
    let store = empty_store();

    let created = store
        .create(SHOWS_COLLECTION, Show::new("Foo", "3"))
        .unwrap();
    assert_eq!(created.id, 1);

    let fetched = store.get_by_id(SHOWS_COLLECTION, created.id).unwrap();
    assert_eq!(fetched.as_ref(), Some(&created));

    let mut changed = fetched.unwrap();
    changed.name = "Bar".to_string();
    let updated = store
        .update_by_id(SHOWS_COLLECTION, created.id, changed)
        .unwrap();
    assert_eq!(updated.name, "Bar");
    assert_eq!(updated.episodes_seen, EpisodesSeen::Text("3".to_string()));

    store.delete_by_id(SHOWS_COLLECTION, created.id).unwrap();
    assert_eq!(store.get_by_id(SHOWS_COLLECTION, created.id).unwrap(), None);
    assert!(store.get(SHOWS_COLLECTION).unwrap().is_empty());
}

#[test]
fn test_get_returns_copies() {
    let store = empty_store();
    store
        .create(SHOWS_COLLECTION, Show::new("Foo", 1i64))
        .unwrap();

    let mut snapshot = store.get(SHOWS_COLLECTION).unwrap();
    snapshot[0].name = "Changed locally".to_string();

    assert_eq!(
        store.get_by_id(SHOWS_COLLECTION, 1).unwrap().unwrap().name,
        "Foo"
    );
}
