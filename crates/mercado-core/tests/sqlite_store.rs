use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use mercado_core::{KvStore, SqliteStore};

struct TempFile {
    path: PathBuf,
}

impl TempFile {
    fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be available")
            .as_nanos();
        let filename = format!("{}_{}_{}.db", prefix, std::process::id(), nanos);
        let path = std::env::temp_dir().join(filename);
        Self { path }
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

#[test]
fn test_open_creates_file_and_schema() {
    let temp = TempFile::new("mercado_store_create");
    assert!(!temp.path.exists());

    let store = SqliteStore::open(&temp.path).expect("open should succeed");
    assert!(temp.path.exists());
    assert_eq!(store.path(), temp.path.as_path());
    assert_eq!(store.get("anything").expect("get should succeed"), None);
}

#[test]
fn test_open_creates_parent_directories() {
    let dir = tempfile::tempdir().expect("tempdir should be available");
    let nested = dir.path().join("deeply/nested/mercado.db");

    SqliteStore::open(&nested).expect("open should succeed");
    assert!(nested.exists());
}

#[test]
fn test_set_get_round_trip() {
    let temp = TempFile::new("mercado_store_round_trip");
    let mut store = SqliteStore::open(&temp.path).expect("open should succeed");

    store.set("k", "first").expect("set should succeed");
    assert_eq!(
        store.get("k").expect("get should succeed").as_deref(),
        Some("first")
    );

    store.set("k", "second").expect("set should succeed");
    assert_eq!(
        store.get("k").expect("get should succeed").as_deref(),
        Some("second")
    );

    store.set("blank", "").expect("set should succeed");
    assert_eq!(
        store.get("blank").expect("get should succeed").as_deref(),
        Some("")
    );
}

#[test]
fn test_reopen_preserves_contents() {
    let temp = TempFile::new("mercado_store_reopen");

    {
        let mut store = SqliteStore::open(&temp.path).expect("open should succeed");
        store
            .set("groceryItems", r#"[{"id":1,"name":"Milk","quantity":2,"price":1.5,"currency":"USD"}]"#)
            .expect("set should succeed");
        store.set("exchangeRate", "40").expect("set should succeed");
    }

    let store = SqliteStore::open(&temp.path).expect("reopen should succeed");
    let items = store
        .get("groceryItems")
        .expect("get should succeed")
        .expect("items should persist");
    assert!(items.contains("Milk"));
    assert_eq!(
        store.get("exchangeRate").expect("get should succeed").as_deref(),
        Some("40")
    );
}

#[test]
fn test_metadata_seeded_on_create() {
    let temp = TempFile::new("mercado_store_metadata");
    let store = SqliteStore::open(&temp.path).expect("open should succeed");

    let meta = store.metadata().expect("metadata should be readable");
    assert_eq!(meta.format_version, "1");
    assert!(meta.last_modified >= meta.created_at);
}

#[test]
fn test_metadata_survives_reopen_and_tracks_writes() {
    let temp = TempFile::new("mercado_store_metadata_reopen");

    let created_at = {
        let store = SqliteStore::open(&temp.path).expect("open should succeed");
        store.metadata().expect("metadata should be readable").created_at
    };

    let mut store = SqliteStore::open(&temp.path).expect("reopen should succeed");
    store.set("k", "v").expect("set should succeed");

    let meta = store.metadata().expect("metadata should be readable");
    assert_eq!(meta.created_at, created_at);
    assert!(meta.last_modified >= meta.created_at);
}
