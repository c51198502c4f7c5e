//! File-backed store tests against a real temporary directory.

use std::sync::Arc;

use venuefeed_core::{RawVenue, StatusMap, VenueStatus};
use venuefeed_store::{CacheStore, FileKeyValueStore, KeyValueStore, StatusStore};

fn venue(name: &str) -> RawVenue {
    RawVenue {
        name: name.to_owned(),
        building: "Sherrington Building".to_owned(),
        latitude: "53.4088".to_owned(),
        longitude: "-2.9677".to_owned(),
        description: "Salads and wraps.".to_owned(),
        opening_times: vec!["Mon-Fri 08:30-15:00".to_owned()],
        amenities: None,
        photos: Some(vec!["sherrington.jpg".to_owned()]),
        website: Some("https://example.ac.uk/sherrington".to_owned()),
        last_modified: Some("2023-10-01 09:00:00".to_owned()),
    }
}

#[test]
fn get_before_any_write_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileKeyValueStore::new(dir.path().join("not-yet-created"));
    assert!(store.get("venues").unwrap().is_none());
}

#[test]
fn set_creates_directory_and_file() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().join("data");
    let store = FileKeyValueStore::new(&data_dir);

    store.set("venue_status", "{}").unwrap();

    assert!(data_dir.join("venue_status.json").is_file());
    let entries: Vec<_> = std::fs::read_dir(&data_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("venue_status.json")]);
    assert_eq!(store.get("venue_status").unwrap().as_deref(), Some("{}"));
}

#[test]
fn set_replaces_previous_value() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileKeyValueStore::new(dir.path());
    store.set("k", "first").unwrap();
    store.set("k", "second").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("second"));
}

#[test]
fn cache_survives_a_new_store_instance() {
    let dir = tempfile::tempdir().unwrap();
    let venues = vec![venue("Sherrington Cafe"), venue("Harold Cohen Deli")];

    CacheStore::new(Arc::new(FileKeyValueStore::new(dir.path())))
        .save(&venues)
        .unwrap();

    let reopened = CacheStore::new(Arc::new(FileKeyValueStore::new(dir.path())));
    assert_eq!(reopened.load().unwrap(), venues);
}

#[test]
fn cache_and_statuses_use_separate_files() {
    let dir = tempfile::tempdir().unwrap();
    let kv: Arc<dyn KeyValueStore> = Arc::new(FileKeyValueStore::new(dir.path()));
    let cache = CacheStore::new(Arc::clone(&kv));
    let statuses = StatusStore::new(kv);

    cache.save(&[venue("A")]).unwrap();
    let mut map = StatusMap::new();
    map.insert("A".to_owned(), VenueStatus::Favorite);
    statuses.save_all(&map).unwrap();

    assert!(dir.path().join("venues.json").is_file());
    assert!(dir.path().join("venue_status.json").is_file());
    assert_eq!(cache.load().unwrap().len(), 1);
    assert_eq!(statuses.load_all(), map);
}

#[test]
fn status_file_holds_plain_string_literals() {
    let dir = tempfile::tempdir().unwrap();
    let statuses = StatusStore::new(Arc::new(FileKeyValueStore::new(dir.path())));
    let mut map = StatusMap::new();
    map.insert("A".to_owned(), VenueStatus::Disliked);
    statuses.save_all(&map).unwrap();

    let on_disk = std::fs::read_to_string(dir.path().join("venue_status.json")).unwrap();
    assert_eq!(on_disk, r#"{"A":"disliked"}"#);
}

#[test]
fn corrupt_cache_file_is_treated_as_absent() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("venues.json"), "not json").unwrap();
    let cache = CacheStore::new(Arc::new(FileKeyValueStore::new(dir.path())));
    assert!(cache.load().is_none());
}

#[test]
fn concurrent_writers_of_one_key_all_succeed() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileKeyValueStore::new(dir.path()));

    let handles: Vec<_> = (0..4)
        .map(|writer| {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                for round in 0..50 {
                    store
                        .set("venues", &format!("[\"writer {writer} round {round}\"]"))
                        .unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let last: Vec<String> = serde_json::from_str(&store.get("venues").unwrap().unwrap()).unwrap();
    assert_eq!(last.len(), 1);
    assert!(last[0].ends_with("round 49"), "unexpected final value {last:?}");

    let leftovers = std::fs::read_dir(dir.path())
        .unwrap()
        .filter(|e| e.as_ref().unwrap().file_name() != "venues.json")
        .count();
    assert_eq!(leftovers, 0);
}
