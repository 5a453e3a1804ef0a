//! Seeding the store from fixture files.

use std::fs;

use tempfile::tempdir;

use show_store_core::fixture::Fixture;
use show_store_core::{EpisodesSeen, MemoryStore, ShowStore, StoreConfig, StoreError};

#[test]
fn test_open_with_builtin_fixture() {
    let store = MemoryStore::open(&StoreConfig::default()).unwrap();

    assert_eq!(store.collection_names().unwrap(), vec!["shows".to_string()]);
    let naruto = store.get_by_id("shows", 2).unwrap().unwrap();
    assert_eq!(naruto.name, "Naruto");
    assert_eq!(naruto.episodes_seen, EpisodesSeen::Count(220));
}

#[test]
fn test_open_with_fixture_file() -> anyhow::Result<()> {
    let temp_dir = tempdir()?;
    let path = temp_dir.path().join("seed.json");
    fs::write(
        &path,
        r#"{
            "shows": [{"id": 10, "name": "Severance", "episodes_seen": 9}],
            "movies": []
        }"#,
    )?;

    let store = MemoryStore::open(&StoreConfig::with_fixture(&path))?;

    let mut names = store.collection_names()?;
    names.sort();
    assert_eq!(names, vec!["movies".to_string(), "shows".to_string()]);
    assert_eq!(store.len("movies")?, 0);

    // Ids continue after the largest seeded id
    let created = store.create("shows", show_store_core::Show::new("Dark", "26"))?;
    assert_eq!(created.id, 11);
    Ok(())
}

#[test]
fn test_open_with_missing_fixture_file() {
    let temp_dir = tempdir().unwrap();
    let config = StoreConfig::with_fixture(temp_dir.path().join("absent.json"));

    match MemoryStore::open(&config) {
        Err(StoreError::Io(msg)) => assert!(msg.contains("absent.json")),
        other => panic!("Expected Io error, got {:?}", other),
    }
}

#[test]
fn test_load_rejects_duplicate_ids() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("dupes.json");
    fs::write(
        &path,
        r#"{"shows": [
            {"id": 4, "name": "A", "episodes_seen": 1},
            {"id": 4, "name": "B", "episodes_seen": 2}
        ]}"#,
    )
    .unwrap();

    assert!(matches!(
        Fixture::load(&path),
        Err(StoreError::DuplicateId { id: 4, .. })
    ));
}

#[test]
fn test_open_requires_shows_collection() -> anyhow::Result<()> {
    let temp_dir = tempdir()?;
    let path = temp_dir.path().join("movies.json");
    fs::write(
        &path,
        r#"{"movies": [{"id": 1, "name": "Heat", "episodes_seen": 1}]}"#,
    )?;

    assert_eq!(
        MemoryStore::open(&StoreConfig::with_fixture(&path)).err(),
        Some(StoreError::CollectionNotFound {
            collection: "shows".to_string()
        })
    );
    Ok(())
}
