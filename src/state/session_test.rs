use super::*;
use crate::state::test_support::{NOW, fixed_now, session_from, token_for};
use crate::util::nav::{SectionKind, visible_sections};
use crate::util::token_storage::MemoryStorage;

fn store_with(storage: &Arc<MemoryStorage>) -> SessionStore {
    SessionStore::open(storage.clone(), fixed_now)
}

fn sports() -> Category {
    Category { id: "1".to_owned(), name: "Sports".to_owned(), article_count: 3 }
}

// =============================================================
// Reducer
// =============================================================

#[test]
fn login_success_decodes_user() {
    let session = reduce(&Session::default(), SessionAction::LoginSuccess { token: token_for("writer", NOW + 60) }, NOW);
    assert_eq!(session.user.as_ref().map(|u| u.role.clone()), Some(Role::Writer));
    assert!(!session.token.is_empty());
}

#[test]
fn login_success_with_expired_token_keeps_no_user() {
    let session = reduce(&Session::default(), SessionAction::LoginSuccess { token: token_for("admin", NOW) }, NOW);
    assert_eq!(session.user, None);
}

#[test]
fn logout_clears_everything() {
    let mut session = session_from(&token_for("admin", NOW + 60));
    session.apply(SessionAction::SetCategories(vec![sports()]), NOW);
    session.apply(SessionAction::Logout, NOW);
    assert_eq!(session, Session::default());
}

#[test]
fn logout_twice_equals_logout_once() {
    let start = session_from(&token_for("writer", NOW + 60));
    let once = reduce(&start, SessionAction::Logout, NOW);
    let twice = reduce(&once, SessionAction::Logout, NOW);
    assert_eq!(once, twice);
}

#[test]
fn set_categories_replaces_cache() {
    let mut session = Session::default();
    session.apply(SessionAction::SetCategories(vec![sports(), sports()]), NOW);
    session.apply(SessionAction::SetCategories(vec![sports()]), NOW);
    assert_eq!(session.categories.len(), 1);
    assert_eq!(session.categories[0].name, "Sports");
    assert_eq!(session.categories[0].article_count, 3);
}

#[test]
fn reduce_leaves_input_untouched() {
    let start = session_from(&token_for("writer", NOW + 60));
    let _ = reduce(&start, SessionAction::Logout, NOW);
    assert!(start.user.is_some());
}

// =============================================================
// Store
// =============================================================

#[test]
fn open_without_token_is_signed_out() {
    let storage = Arc::new(MemoryStorage::default());
    let store = store_with(&storage);
    assert!(!store.is_authenticated());
    assert_eq!(store.bearer(), None);
    assert_eq!(store.role(), None);
}

#[test]
fn open_with_admin_token_exposes_all_sections() {
    let storage = Arc::new(MemoryStorage::with_token(token_for("admin", NOW + 3600)));
    let store = store_with(&storage);
    assert_eq!(store.role(), Some(Role::Admin));
    let kinds: Vec<SectionKind> = visible_sections(store.role().as_ref()).iter().map(|s| s.kind).collect();
    assert_eq!(kinds, vec![SectionKind::Admin, SectionKind::Writer, SectionKind::General]);
}

#[test]
fn open_with_expired_token_clears_storage() {
    let storage = Arc::new(MemoryStorage::with_token(token_for("admin", NOW - 1)));
    let store = store_with(&storage);
    assert_eq!(store.session().user, None);
    assert_eq!(storage.load(), None);
}

#[test]
fn open_with_garbage_token_clears_storage() {
    let storage = Arc::new(MemoryStorage::with_token("not-a-token"));
    let store = store_with(&storage);
    assert!(!store.is_authenticated());
    assert_eq!(storage.load(), None);
}

#[test]
fn login_persists_token_and_signs_in() {
    let storage = Arc::new(MemoryStorage::default());
    let mut store = store_with(&storage);
    let token = token_for("writer", NOW + 3600);
    let user = store.login(&token).cloned();
    assert_eq!(user.map(|u| u.name), Some("writer user".to_owned()));
    assert_eq!(storage.load(), Some(token.clone()));
    assert_eq!(store.bearer(), Some(token));
}

#[test]
fn login_with_expired_token_leaves_nothing_persisted() {
    let storage = Arc::new(MemoryStorage::default());
    let mut store = store_with(&storage);
    assert!(store.login(&token_for("writer", NOW - 10)).is_none());
    assert_eq!(storage.load(), None);
}

#[test]
fn logout_removes_persisted_token() {
    let storage = Arc::new(MemoryStorage::with_token(token_for("admin", NOW + 3600)));
    let mut store = store_with(&storage);
    store.logout();
    store.logout();
    assert_eq!(storage.load(), None);
    assert_eq!(store.session(), &Session::default());
}

#[test]
fn set_categories_through_store() {
    let storage = Arc::new(MemoryStorage::default());
    let mut store = store_with(&storage);
    store.dispatch(SessionAction::SetCategories(vec![sports()]));
    assert_eq!(store.categories().len(), 1);
    assert_eq!(store.categories()[0].name, "Sports");
}

#[test]
fn expire_if_stale_drops_session_once_clock_passes_exp() {
    fn later() -> i64 {
        NOW + 7200
    }
    let storage = Arc::new(MemoryStorage::with_token(token_for("writer", NOW + 3600)));
    let mut store = store_with(&storage);
    assert!(!store.expire_if_stale());

    store.clock = later;
    assert!(!store.is_authenticated());
    assert!(store.expire_if_stale());
    assert_eq!(storage.load(), None);
    assert_eq!(store.session().user, None);
    assert!(!store.expire_if_stale());
}
