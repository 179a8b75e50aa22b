/*
[INPUT]:  Snapshots saved through FileStore and MemoryStore
[OUTPUT]: Test results for round-trips and error taxonomy
[POS]:    Integration tests - persistence
[UPDATE]: When the store contract or file layout changes
*/

mod common;

use common::{scratch_store, snapshot_of};
use rstest::rstest;
use todo_list_core::{
    DEFAULT_KEY, MemoryStore, PersistError, PersistenceStore, Snapshot, TaskList,
};

#[rstest]
#[case::empty(&[])]
#[case::empty_string(&[""])]
#[case::duplicates(&["same", "same", "other", "same"])]
#[case::unicode(&["café", "日本語", "emoji 🚀", "tab\tand\nnewline", "\"quoted\""])]
fn test_file_round_trip(#[case] items: &[&str]) {
    let (_dir, store) = scratch_store();
    let snapshot = snapshot_of(items);

    store.save(&snapshot, DEFAULT_KEY).unwrap();
    assert_eq!(store.load(DEFAULT_KEY).unwrap(), snapshot);
}

#[test]
fn test_save_then_load_scenario() {
    let (_dir, store) = scratch_store();
    store.save(&snapshot_of(&["x", "y"]), "ToDoList").unwrap();

    let loaded = store.load("ToDoList").unwrap();
    assert_eq!(loaded.items(), ["x", "y"]);
}

#[test]
fn test_save_overwrites_previous_value() {
    let (_dir, store) = scratch_store();
    store.save(&snapshot_of(&["old", "older"]), DEFAULT_KEY).unwrap();
    store.save(&snapshot_of(&["new"]), DEFAULT_KEY).unwrap();
    assert_eq!(store.load(DEFAULT_KEY).unwrap(), snapshot_of(&["new"]));
}

#[test]
fn test_load_never_saved_is_not_found() {
    let (_dir, store) = scratch_store();
    let err = store.load(DEFAULT_KEY).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.key(), DEFAULT_KEY);
    assert!(!store.exists(DEFAULT_KEY).unwrap());
}

#[test]
fn test_malformed_file_is_corrupt() {
    let (dir, store) = scratch_store();
    std::fs::write(dir.path().join("ToDoList.json"), "invalid json").unwrap();

    let err = store.load(DEFAULT_KEY).unwrap_err();
    assert!(err.is_corrupt());
}

#[test]
fn test_keys_are_independent() {
    let (_dir, store) = scratch_store();
    store.save(&snapshot_of(&["home"]), "home").unwrap();
    store.save(&snapshot_of(&["work"]), "work").unwrap();

    assert_eq!(store.load("home").unwrap(), snapshot_of(&["home"]));
    assert_eq!(store.load("work").unwrap(), snapshot_of(&["work"]));
}

#[test]
fn test_delete() {
    let (_dir, store) = scratch_store();
    store.save(&Snapshot::default(), DEFAULT_KEY).unwrap();
    store.delete(DEFAULT_KEY).unwrap();

    assert!(!store.exists(DEFAULT_KEY).unwrap());
    assert!(store.delete(DEFAULT_KEY).unwrap_err().is_not_found());
}

#[test]
fn test_invalid_key_rejected() {
    let (_dir, store) = scratch_store();
    let err = store.save(&Snapshot::default(), "../outside").unwrap_err();
    assert!(matches!(err, PersistError::InvalidKey(_)));
}

#[test]
fn test_memory_store_contract() {
    let store: Box<dyn PersistenceStore> = Box::new(MemoryStore::new());
    assert!(!store.is_persistent());
    assert!(store.load(DEFAULT_KEY).unwrap_err().is_not_found());

    let list: TaskList = ["b", "a"].into_iter().collect();
    store.save(&list.snapshot(), DEFAULT_KEY).unwrap();
    assert!(store.exists(DEFAULT_KEY).unwrap());
    assert_eq!(store.load(DEFAULT_KEY).unwrap(), snapshot_of(&["b", "a"]));
}

#[test]
fn test_memory_store_corrupt_payload() {
    let store = MemoryStore::new();
    store.put_raw("broken", "{not json");
    assert!(store.load("broken").unwrap_err().is_corrupt());
}
