use std::sync::Arc;

use super::*;
use crate::state::test_support::{NOW, fixed_now, token_for};
use crate::util::routes::AppRoute;
use crate::util::token_storage::MemoryStorage;

fn store_for(role: &str) -> SessionStore {
    SessionStore::open(Arc::new(MemoryStorage::with_token(token_for(role, NOW + 600))), fixed_now)
}

const ADMIN_PATHS: [&str; 4] =
    ["/dashboard/admin", "/dashboard/writer/add", "/dashboard/writers", "/dashboard/writers/manage/w1"];

#[test]
fn route_gate_denies_writers_every_admin_path() {
    let store = store_for("writer");
    for path in ADMIN_PATHS {
        assert_eq!(route_gate(&store, path), AccessDecision::Redirect(AppRoute::UnableAccess), "{path}");
    }
}

#[test]
fn route_gate_admits_admins_to_admin_paths() {
    let store = store_for("admin");
    for path in ADMIN_PATHS {
        assert_eq!(route_gate(&store, path), AccessDecision::Allow, "{path}");
    }
}

#[test]
fn route_gate_admits_writers_to_shared_paths() {
    let store = store_for("writer");
    for path in ["/dashboard/news", "/dashboard/news/edit/n1", "/dashboard/categories", "/dashboard/profile"] {
        assert_eq!(route_gate(&store, path), AccessDecision::Allow, "{path}");
    }
}

#[test]
fn route_gate_sends_signed_out_users_to_login() {
    let store = SessionStore::open(Arc::new(MemoryStorage::default()), fixed_now);
    assert_eq!(route_gate(&store, "/dashboard/writers/manage/w1"), AccessDecision::Redirect(AppRoute::Login));
}
