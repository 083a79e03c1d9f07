//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped orchestration: it builds `ApiCall`s from
//! the session's bearer token, sends them through `PageCtx::authed`, and
//! keeps the results in local signals. Rendering stays deliberately plain.

pub mod categories;
pub mod dashboard_index;
pub mod login;
pub mod news;
pub mod news_editor;
pub mod overview;
pub mod profile;
pub mod signup;
pub mod unable_access;
pub mod writer_form;
pub mod writers;

#[cfg(test)]
#[path = "pages_test.rs"]
mod pages_test;

use std::future::Future;

use leptos::prelude::*;
use serde::de::DeserializeOwned;

use crate::net::api::ApiClient;
use crate::net::cancel::CancelToken;
use crate::net::error::ApiError;
use crate::net::request::ApiCall;
use crate::state::notice::{NoticeState, use_notices};
use crate::state::session::{SessionStore, use_session};

/// Context handles every page needs, bundled so closures can copy them.
#[derive(Clone, Copy)]
pub(crate) struct PageCtx {
    pub store: RwSignal<SessionStore>,
    pub notices: RwSignal<NoticeState>,
    api: StoredValue<ApiClient>,
    cancel: StoredValue<CancelToken>,
}

impl PageCtx {
    /// Must be called from a component body; the cancel token is tied to
    /// that component's lifetime.
    pub fn current() -> Self {
        Self {
            store: use_session(),
            notices: use_notices(),
            api: StoredValue::new(expect_context::<ApiClient>()),
            cancel: StoredValue::new(CancelToken::for_view()),
        }
    }

    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    pub fn bearer(&self) -> Option<String> {
        self.store.with_untracked(SessionStore::bearer)
    }

    /// Send `call` and hand the result to `done`.
    ///
    /// `done` receives `None` after a failure has been reported. It is not
    /// called at all when the page unmounted first.
    pub fn request<E, T>(&self, call: ApiCall<E, T>, fallback: &'static str, done: impl FnOnce(Option<T>) + 'static)
    where
        E: DeserializeOwned + 'static,
        T: 'static,
    {
        let ctx = *self;
        let cancel = self.cancel.get_value();
        spawn(async move {
            match call.send(&cancel).await {
                Ok(value) => done(Some(value)),
                Err(err) if err.is_cancelled() => {}
                Err(err) => {
                    ctx.fail(&err, fallback);
                    done(None);
                }
            }
        });
    }

    /// `request` with the call built from the session's bearer token.
    /// Signed out, `done` gets `None` right away so loading flags clear.
    pub fn authed<E, T>(
        &self,
        build: impl FnOnce(&ApiClient, &str) -> ApiCall<E, T>,
        fallback: &'static str,
        done: impl FnOnce(Option<T>) + 'static,
    ) where
        E: DeserializeOwned + 'static,
        T: 'static,
    {
        match self.bearer() {
            Some(token) => self.request(build(&self.api(), &token), fallback, done),
            None => {
                log::debug!("no session for authenticated call");
                done(None);
            }
        }
    }

    /// Report `err`; a rejected token also ends the session.
    pub fn fail(&self, err: &ApiError, fallback: &str) {
        self.notices.update(|n| {
            n.report_error(err, fallback);
        });
        if err.is_unauthorized() {
            self.store.update(SessionStore::logout);
        }
    }

    pub fn notify(&self, text: impl Into<String>) {
        let text = text.into();
        self.notices.update(|n| {
            n.success(text);
        });
    }

    pub fn warn(&self, text: impl Into<String>) {
        let text = text.into();
        self.notices.update(|n| {
            n.error(text);
        });
    }
}

/// Run `task` on the browser event loop. Native builds have no event loop
/// and drop it.
fn spawn(task: impl Future<Output = ()> + 'static) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(task);
    #[cfg(not(feature = "csr"))]
    drop(task);
}

/// Message to show after a mutation, falling back when the server sent none.
pub(crate) fn or_default(message: String, fallback: &str) -> String {
    if message.trim().is_empty() { fallback.to_owned() } else { message }
}
