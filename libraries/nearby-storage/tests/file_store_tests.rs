//! Integration tests for the file-backed store
//!
//! These use REAL files in a temporary directory so reopening a store
//! exercises the same load path as a restarted application.

use nearby_storage::{keys, FileStore, KeyValueStore, StorageError};
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> FileStore {
    FileStore::open(dir.path().join("state").join("store.json")).expect("Failed to open store")
}

#[test]
fn test_missing_file_is_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    assert!(store.get(keys::AUTH_TOKEN).unwrap().is_none());
    // Nothing written until the first mutation
    assert!(!store.path().exists());
}

#[test]
fn test_values_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = store_in(&dir);
        store.set(keys::AUTH_TOKEN, "token-123").unwrap();
        store.set(keys::CURRENT_USER, r#"{"id":"1"}"#).unwrap();
    }

    let reopened = store_in(&dir);
    assert_eq!(reopened.get(keys::AUTH_TOKEN).unwrap().as_deref(), Some("token-123"));
    assert_eq!(
        reopened.get(keys::CURRENT_USER).unwrap().as_deref(),
        Some(r#"{"id":"1"}"#)
    );
}

#[test]
fn test_remove_is_persisted() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = store_in(&dir);
        store.set(keys::AUTH_TOKEN, "token-123").unwrap();
        store.remove(keys::AUTH_TOKEN).unwrap();
        store.remove("never-set").unwrap();
    }

    let reopened = store_in(&dir);
    assert!(reopened.get(keys::AUTH_TOKEN).unwrap().is_none());
}

#[test]
fn test_no_temp_file_left_behind() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.set("k", "v").unwrap();

    let names: Vec<_> = std::fs::read_dir(store.path().parent().unwrap())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(names, vec!["store.json".to_string()]);
}

#[test]
fn test_corrupt_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, "{ not json").unwrap();

    match FileStore::open(&path) {
        Err(StorageError::Malformed { .. }) => {}
        other => panic!("Expected Malformed error, got: {:?}", other),
    }
}

#[test]
fn test_failed_write_keeps_previous_state() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.set(keys::AUTH_TOKEN, "tok").unwrap();

    // A directory where the temporary file goes makes every write fail
    let tmp = store.path().with_extension("tmp");
    std::fs::create_dir(&tmp).unwrap();

    assert!(store.remove(keys::AUTH_TOKEN).is_err());
    assert!(store.set(keys::CURRENT_USER, "{}").is_err());

    assert_eq!(store.get(keys::AUTH_TOKEN).unwrap().as_deref(), Some("tok"));
    assert!(store.get(keys::CURRENT_USER).unwrap().is_none());

    std::fs::remove_dir(&tmp).unwrap();
    let reopened = store_in(&dir);
    assert_eq!(reopened.get(keys::AUTH_TOKEN).unwrap().as_deref(), Some("tok"));
    assert!(reopened.get(keys::CURRENT_USER).unwrap().is_none());
}
