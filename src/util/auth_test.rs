use super::*;
use crate::state::session::SessionAction;
use crate::state::test_support::{NOW, session_from, token_for};

fn signed_in(role: &str) -> Session {
    session_from(&token_for(role, NOW + 600))
}

// =============================================================
// AuthGuard
// =============================================================

#[test]
fn absent_user_is_sent_to_login() {
    let decision = authorize(&Session::default(), &Access::Authenticated, NOW);
    assert_eq!(decision, AccessDecision::Redirect(AppRoute::Login));
}

#[test]
fn valid_user_is_allowed() {
    assert_eq!(authorize(&signed_in("writer"), &Access::Authenticated, NOW), AccessDecision::Allow);
}

#[test]
fn user_expiring_now_is_unauthenticated() {
    let session = signed_in("admin");
    assert_eq!(route_state(&session, &Access::Authenticated, NOW + 600), RouteState::Unauthenticated);
}

#[test]
fn logout_revokes_access() {
    let mut session = signed_in("admin");
    session.apply(SessionAction::Logout, NOW);
    assert_eq!(route_state(&session, &Access::Authenticated, NOW), RouteState::Unauthenticated);
}

// =============================================================
// RoleGuard
// =============================================================

#[test]
fn writer_on_admin_route_is_sent_to_unable_access() {
    let decision = authorize(&signed_in("writer"), &Access::Role(Role::Admin), NOW);
    assert_eq!(decision, AccessDecision::Redirect(AppRoute::UnableAccess));
}

#[test]
fn admin_on_admin_route_is_allowed() {
    assert_eq!(authorize(&signed_in("admin"), &Access::Role(Role::Admin), NOW), AccessDecision::Allow);
}

#[test]
fn role_check_requires_authentication_first() {
    assert_eq!(route_state(&Session::default(), &Access::Role(Role::Admin), NOW), RouteState::Unauthenticated);
}

#[test]
fn unknown_role_is_wrong_role_for_admin_routes() {
    assert_eq!(route_state(&signed_in("editor"), &Access::Role(Role::Admin), NOW), RouteState::WrongRole);
}

// =============================================================
// Paths
// =============================================================

#[test]
fn public_paths_never_redirect() {
    assert_eq!(authorize_path(&Session::default(), "/signup", NOW), AccessDecision::Allow);
}

#[test]
fn writer_cannot_reach_writer_management() {
    assert_eq!(
        authorize_path(&signed_in("writer"), "/dashboard/writers/manage/w1", NOW),
        AccessDecision::Redirect(AppRoute::UnableAccess)
    );
    assert_eq!(authorize_path(&signed_in("writer"), "/dashboard/news/create", NOW), AccessDecision::Allow);
}

#[test]
fn unknown_dashboard_path_requires_login() {
    assert_eq!(
        authorize_path(&Session::default(), "/dashboard/nowhere", NOW),
        AccessDecision::Redirect(AppRoute::Login)
    );
}
