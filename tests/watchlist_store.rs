use stockwatch::store::{
    FileStorage, MemoryStorage, Storage, StoreError, WATCHLIST_KEY, WatchlistEntry, WatchlistStore,
};

fn entry(symbol: &str, name: &str) -> WatchlistEntry {
    WatchlistEntry::new(symbol, name).unwrap()
}

fn symbols<S: Storage>(store: &WatchlistStore<S>) -> Vec<&str> {
    store.list().iter().map(|e| e.symbol.as_str()).collect()
}

#[test]
fn add_to_empty_store_lists_entry() {
    let mut store = WatchlistStore::load(MemoryStorage::new());
    store.add(entry("ACME", "Acme Co")).unwrap();
    assert_eq!(store.list(), &[entry("ACME", "Acme Co")]);
}

#[test]
fn duplicate_add_reports_conflict_and_leaves_store_unchanged() {
    let mut store = WatchlistStore::load(MemoryStorage::new());
    store.add(entry("ACME", "Acme Co")).unwrap();

    let err = store.add(entry("ACME", "Acme Co")).unwrap_err();
    assert!(matches!(err, StoreError::AlreadyExists(ref s) if s == "ACME"));
    assert_eq!(store.list(), &[entry("ACME", "Acme Co")]);
}

#[test]
fn duplicate_check_uses_normalized_symbol() {
    let mut store = WatchlistStore::load(MemoryStorage::new());
    store.add(entry("acme", "Acme Co")).unwrap();
    assert!(store.add(entry(" ACME ", "Other")).is_err());
    assert_eq!(store.len(), 1);
}

#[test]
fn add_preserves_insertion_order() {
    let mut store = WatchlistStore::load(MemoryStorage::new());
    for sym in ["ZED", "ACME", "MID"] {
        store.add(entry(sym, sym)).unwrap();
    }
    assert_eq!(symbols(&store), vec!["ZED", "ACME", "MID"]);
}

#[test]
fn remove_absent_symbol_is_noop() {
    let mut store = WatchlistStore::load(MemoryStorage::new());
    store.add(entry("ACME", "Acme Co")).unwrap();
    store.remove("NOPE").unwrap();
    assert_eq!(symbols(&store), vec!["ACME"]);
}

#[test]
fn remove_deletes_entry_and_keeps_order() {
    let mut store = WatchlistStore::load(MemoryStorage::new());
    for sym in ["A", "B", "C"] {
        store.add(entry(sym, sym)).unwrap();
    }
    store.remove("b").unwrap();
    assert_eq!(symbols(&store), vec!["A", "C"]);
}

#[test]
fn mixed_operations_never_produce_duplicates() {
    let mut store = WatchlistStore::load(MemoryStorage::new());
    let ops: &[(&str, bool)] = &[
        ("A", true),
        ("B", true),
        ("A", true),
        ("A", false),
        ("A", true),
        ("C", true),
        ("B", true),
        ("C", false),
        ("C", false),
        ("B", true),
    ];
    for (sym, add) in ops {
        if *add {
            let _ = store.add(entry(sym, sym));
        } else {
            store.remove(sym).unwrap();
        }
        let mut seen = symbols(&store);
        let len = seen.len();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), len, "duplicate symbol after {:?}", (sym, add));
    }
    assert_eq!(symbols(&store), vec!["B", "A"]);
}

#[test]
fn reload_returns_last_persisted_state() {
    let storage = MemoryStorage::new();
    let mut store = WatchlistStore::load(storage.clone());
    store.add(entry("ACME", "Acme Co")).unwrap();
    store.add(entry("INIT", "Initech")).unwrap();
    store.remove("ACME").unwrap();

    let reloaded = WatchlistStore::load(storage);
    assert_eq!(reloaded.list(), store.list());
}

#[test]
fn file_storage_round_trip_across_restart() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut store = WatchlistStore::load(FileStorage::new(dir.path()).unwrap());
        store.add(entry("ACME", "Acme Co")).unwrap();
        store.add(entry("GLBX", "Globex, \"the\" company")).unwrap();
    }
    let store = WatchlistStore::load(FileStorage::new(dir.path()).unwrap());
    assert_eq!(
        store.list(),
        &[entry("ACME", "Acme Co"), entry("GLBX", "Globex, \"the\" company")]
    );
}

#[test]
fn missing_state_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = WatchlistStore::load(FileStorage::new(dir.path()).unwrap());
    assert!(store.is_empty());
}

#[test]
fn corrupt_state_loads_empty() {
    let mut storage = MemoryStorage::new();
    storage.write(WATCHLIST_KEY, "{not json").unwrap();
    let store = WatchlistStore::load(storage);
    assert!(store.is_empty());
}

#[test]
fn wrong_shape_state_loads_empty() {
    let mut storage = MemoryStorage::new();
    storage.write(WATCHLIST_KEY, r#"{"symbol":"ACME"}"#).unwrap();
    let store = WatchlistStore::load(storage);
    assert!(store.is_empty());
}

#[test]
fn persisted_format_is_list_of_objects() {
    let storage = MemoryStorage::new();
    let mut store = WatchlistStore::load(storage.clone());
    store.add(entry("ACME", "Acme Co")).unwrap();

    let raw = storage.read(WATCHLIST_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value, serde_json::json!([{"symbol": "ACME", "name": "Acme Co"}]));
}

#[test]
fn blank_symbol_cannot_become_an_entry() {
    assert!(WatchlistEntry::new("  ", "Nothing").is_none());
}

// --- state written by older clients ---

fn store_with_state(raw: &str) -> WatchlistStore<MemoryStorage> {
    let mut storage = MemoryStorage::new();
    storage.write(WATCHLIST_KEY, raw).unwrap();
    WatchlistStore::load(storage)
}

#[test]
fn lowercase_state_symbol_is_normalized_and_removable() {
    let mut store = store_with_state(r#"[{"symbol":"acme","name":"Acme Co"}]"#);
    assert_eq!(symbols(&store), vec!["ACME"]);

    store.remove("acme").unwrap();
    assert!(store.is_empty());
}

#[test]
fn blank_state_symbol_is_dropped_on_load() {
    let store = store_with_state(
        r#"[{"symbol":"","name":"Ghost"},{"symbol":"  ","name":"Ghost"},{"symbol":"BBB","name":"B"}]"#,
    );
    assert_eq!(symbols(&store), vec!["BBB"]);
}

#[test]
fn case_variants_in_state_collapse_to_one_entry() {
    let store = store_with_state(
        r#"[{"symbol":"acme","name":"first"},{"symbol":"ACME","name":"second"}]"#,
    );
    assert_eq!(store.len(), 1);
    assert_eq!(store.list()[0].name, "first");
}

#[test]
fn add_after_loading_lowercase_state_is_a_conflict() {
    let mut store = store_with_state(r#"[{"symbol":"acme","name":"Acme Co"}]"#);
    let err = store.add(entry("ACME", "Acme Co")).unwrap_err();
    assert!(matches!(err, StoreError::AlreadyExists(_)));
}
