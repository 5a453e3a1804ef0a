//! Several threads sharing one store.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use ntest::timeout;

use show_store_core::fixture::Fixture;
use show_store_core::{MemoryStore, Show, ShowStore, SHOWS_COLLECTION};

#[timeout(5000)]
#[test]
fn test_concurrent_creates_get_distinct_ids() {
    let store = Arc::new(MemoryStore::from_fixture(
        Fixture::default().with_collection(SHOWS_COLLECTION, Vec::new()),
    ));

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                (0..50i64)
                    .map(|i| {
                        store
                            .create(SHOWS_COLLECTION, Show::new(format!("{}-{}", t, i), i))
                            .unwrap()
                            .id
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(ids.insert(id), "id {} handed out twice", id);
        }
    }
    assert_eq!(ids.len(), 400);
    assert_eq!(store.len(SHOWS_COLLECTION).unwrap(), 400);
}
