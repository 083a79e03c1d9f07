//! Session store: raw token, decoded claims, and the category cache.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is the only state shared across views. It is created once at
//! startup from the persisted token and provided through context as
//! `RwSignal<SessionStore>`. Route guards, the sidebar, and every page that
//! calls an authenticated endpoint read it.
//!
//! DESIGN
//! ======
//! `Session` changes only through `SessionAction`, applied by a pure reducer.
//! `SessionStore` wraps the reducer with the two side effects it needs: the
//! injected `TokenStorage` and `Clock`. Whenever the store sees a token that
//! does not decode to live claims, it deletes the persisted copy.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::*;

use super::claims::{Claims, Role, TokenStatus, decode_token, inspect_token};
use crate::net::types::Category;
use crate::util::clock::Clock;
use crate::util::token_storage::TokenStorage;

/// Snapshot of the signed-in user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: Option<Claims>,
    pub categories: Vec<Category>,
}

/// Every mutation the session accepts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionAction {
    LoginSuccess { token: String },
    Logout,
    SetCategories(Vec<Category>),
}

impl Session {
    pub fn apply(&mut self, action: SessionAction, now_secs: i64) {
        match action {
            SessionAction::LoginSuccess { token } => {
                self.user = decode_token(&token, now_secs);
                self.token = token;
            }
            SessionAction::Logout => {
                self.token.clear();
                self.user = None;
                self.categories.clear();
            }
            SessionAction::SetCategories(categories) => self.categories = categories,
        }
    }

    /// Claims that are present and unexpired at `now_secs`.
    pub fn live_user(&self, now_secs: i64) -> Option<&Claims> {
        self.user.as_ref().filter(|u| !u.is_expired(now_secs))
    }
}

/// Pure form of `Session::apply`.
pub fn reduce(session: &Session, action: SessionAction, now_secs: i64) -> Session {
    let mut next = session.clone();
    next.apply(action, now_secs);
    next
}

#[derive(Clone, Debug)]
pub struct SessionStore {
    session: Session,
    storage: Arc<dyn TokenStorage>,
    clock: Clock,
}

impl SessionStore {
    /// Load the persisted token and seed the session from it.
    pub fn open(storage: Arc<dyn TokenStorage>, clock: Clock) -> Self {
        let now = clock();
        let session = match storage.load() {
            None => Session::default(),
            Some(token) => match inspect_token(&token, now) {
                TokenStatus::Valid(claims) => {
                    log::info!("session restored for {} ({})", claims.name, claims.role.as_str());
                    Session { token, user: Some(claims), categories: Vec::new() }
                }
                TokenStatus::Expired(_) => {
                    log::info!("persisted token expired; clearing");
                    storage.clear();
                    Session::default()
                }
                TokenStatus::Empty | TokenStatus::Malformed => {
                    log::warn!("persisted token unreadable; clearing");
                    storage.clear();
                    Session::default()
                }
            },
        };
        Self { session, storage, clock }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn now(&self) -> i64 {
        (self.clock)()
    }

    pub fn dispatch(&mut self, action: SessionAction) {
        let now = self.now();
        let is_login = matches!(action, SessionAction::LoginSuccess { .. });
        self.session = reduce(&self.session, action, now);
        if is_login && self.session.user.is_none() {
            log::warn!("login token rejected; clearing persisted copy");
            self.storage.clear();
        }
    }

    /// Persist `token`, then sign in with it. Returns the decoded claims.
    pub fn login(&mut self, token: &str) -> Option<&Claims> {
        self.storage.save(token);
        self.dispatch(SessionAction::LoginSuccess { token: token.to_owned() });
        if let Some(user) = &self.session.user {
            log::info!("signed in as {} ({})", user.name, user.role.as_str());
        }
        self.session.user.as_ref()
    }

    pub fn logout(&mut self) {
        if self.session.user.is_some() {
            log::info!("signed out");
        }
        self.storage.clear();
        self.dispatch(SessionAction::Logout);
    }

    /// Drop the session if its claims expired since they were decoded.
    /// Returns whether anything was cleared.
    pub fn expire_if_stale(&mut self) -> bool {
        let now = self.now();
        let Some(name) = self.session.user.as_ref().filter(|u| u.is_expired(now)).map(|u| u.name.clone()) else {
            return false;
        };
        log::info!("session expired for {name}");
        self.storage.clear();
        self.dispatch(SessionAction::Logout);
        true
    }

    /// Token to send as `Authorization: Bearer`, when signed in.
    pub fn bearer(&self) -> Option<String> {
        self.is_authenticated().then(|| self.session.token.clone())
    }

    pub fn user(&self) -> Option<&Claims> {
        self.session.live_user(self.now())
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(|u| u.role.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.user().is_some()
    }

    pub fn categories(&self) -> &[Category] {
        &self.session.categories
    }
}

/// The session store provided by `App`.
pub fn use_session() -> RwSignal<SessionStore> {
    expect_context::<RwSignal<SessionStore>>()
}
