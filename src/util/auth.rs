//! Route authorization decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected views are wrapped by `AuthGuard` / `RoleGuard`. Those
//! components only perform the redirect; whether to redirect, and where to,
//! is decided here from the session snapshot and the current time.
//!
//! Decisions are recomputed on every navigation and session change and are
//! never cached.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::routes::AppRoute;
use crate::state::claims::Role;
use crate::state::session::Session;

/// What a route requires of the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    Role(Role),
}

/// Per-navigation access state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteState {
    Unauthenticated,
    WrongRole,
    Authorized,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    Redirect(AppRoute),
}

pub fn route_state(session: &Session, access: &Access, now_secs: i64) -> RouteState {
    if *access == Access::Public {
        return RouteState::Authorized;
    }
    let Some(user) = session.live_user(now_secs) else {
        return RouteState::Unauthenticated;
    };
    match access {
        Access::Role(required) if user.role != *required => RouteState::WrongRole,
        _ => RouteState::Authorized,
    }
}

pub fn authorize(session: &Session, access: &Access, now_secs: i64) -> AccessDecision {
    match route_state(session, access, now_secs) {
        RouteState::Unauthenticated => AccessDecision::Redirect(AppRoute::Login),
        RouteState::WrongRole => AccessDecision::Redirect(AppRoute::UnableAccess),
        RouteState::Authorized => AccessDecision::Allow,
    }
}

/// Decision for a concrete pathname; unknown dashboard paths still need a
/// signed-in user.
pub fn authorize_path(session: &Session, pathname: &str, now_secs: i64) -> AccessDecision {
    let access = AppRoute::parse(pathname).map_or(Access::Authenticated, |route| route.access());
    authorize(session, &access, now_secs)
}
