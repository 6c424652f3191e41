use super::*;

#[test]
fn memory_store_starts_empty() {
    assert_eq!(MemoryTokenStore::default().get(), None);
}

#[test]
fn memory_store_set_then_clear() {
    let store = MemoryTokenStore::default();
    store.set("tok-1");
    assert_eq!(store.get().as_deref(), Some("tok-1"));
    store.set("tok-2");
    assert_eq!(store.get().as_deref(), Some("tok-2"));
    store.clear();
    assert_eq!(store.get(), None);
}

#[test]
fn memory_store_with_token_is_populated() {
    assert_eq!(MemoryTokenStore::with_token("abc").get().as_deref(), Some("abc"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_storage_store_is_inert_off_browser() {
    let store = LocalStorageTokenStore::new("fb_auth_token");
    store.set("ignored");
    assert_eq!(store.get(), None);
    store.clear();
}
