use super::*;

#[test]
fn memory_storage_starts_empty() {
    assert_eq!(MemoryStorage::default().load(), None);
}

#[test]
fn memory_storage_save_then_clear() {
    let storage = MemoryStorage::default();
    storage.save("abc.def.ghi");
    assert_eq!(storage.load().as_deref(), Some("abc.def.ghi"));
    storage.clear();
    assert_eq!(storage.load(), None);
}

#[test]
fn browser_storage_uses_news_token_key() {
    assert_eq!(BrowserStorage::default().key, "newsToken");
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_storage_is_inert_outside_browser() {
    let storage = BrowserStorage::default();
    storage.save("t");
    assert_eq!(storage.load(), None);
}
