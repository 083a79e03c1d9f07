use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use super::*;
use crate::config::AppConfig;
use crate::state::test_support::{NOW, fixed_now, token_for};
use crate::util::token_storage::MemoryStorage;

fn with_ctx(storage: MemoryStorage, check: impl FnOnce(PageCtx)) {
    let owner = Owner::new();
    owner.with(|| {
        provide_context(RwSignal::new(SessionStore::open(Arc::new(storage), fixed_now)));
        provide_context(RwSignal::new(NoticeState::default()));
        provide_context(ApiClient::new(&AppConfig::default()));
        check(PageCtx::current());
    });
}

#[test]
fn authed_without_session_finishes_with_none() {
    with_ctx(MemoryStorage::default(), |ctx| {
        let finished = Rc::new(Cell::new(false));
        let seen = Rc::clone(&finished);
        ctx.authed(
            |api, token| api.writer_news_counts(token),
            "Failed to load writer stats",
            move |value| seen.set(value.is_none()),
        );
        assert!(finished.get());
    });
}

#[test]
fn bearer_reflects_stored_token() {
    let token = token_for("writer", NOW + 600);
    with_ctx(MemoryStorage::with_token(token.clone()), |ctx| {
        assert_eq!(ctx.bearer(), Some(token));
    });
}

#[test]
fn unauthorized_failure_logs_out_and_reports() {
    with_ctx(MemoryStorage::with_token(token_for("admin", NOW + 600)), |ctx| {
        ctx.fail(&ApiError::Status { status: 401, message: None }, "Session expired");
        assert!(!ctx.store.with_untracked(SessionStore::is_authenticated));
        let text = ctx.notices.with_untracked(|n| n.current.as_ref().map(|n| n.text.clone()));
        assert_eq!(text.as_deref(), Some("Session expired"));
    });
}

#[test]
fn other_failures_keep_the_session() {
    with_ctx(MemoryStorage::with_token(token_for("admin", NOW + 600)), |ctx| {
        ctx.fail(&ApiError::Status { status: 500, message: Some("boom".into()) }, "Failed");
        assert!(ctx.store.with_untracked(SessionStore::is_authenticated));
    });
}
