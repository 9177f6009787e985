use super::*;

#[test]
fn memory_store_missing_key_is_none() {
    let store = MemoryStore::new();
    assert_eq!(store.get("site-theme"), None);
}

#[test]
fn memory_store_set_then_get() {
    let store = MemoryStore::new();
    store.set("site-theme", "light");
    assert_eq!(store.get("site-theme").as_deref(), Some("light"));
}

#[test]
fn memory_store_overwrites_previous_value() {
    let store = MemoryStore::new();
    store.set("k", "one");
    store.set("k", "two");
    assert_eq!(store.get("k").as_deref(), Some("two"));
}

#[test]
fn reference_forwards_to_inner_store() {
    let store = MemoryStore::new();
    let by_ref = &store;
    by_ref.set("k", "v");
    assert_eq!(store.get("k").as_deref(), Some("v"));
    assert_eq!(KeyValueStore::get(&by_ref, "k").as_deref(), Some("v"));
}
