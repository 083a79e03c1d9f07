//! Route guard components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used as `ParentRoute` views around the dashboard subtree. The allow or
//! redirect decision comes from `util::auth`; these components only act on
//! it. `AuthGuard` looks the current pathname up in the route table, so a
//! route's required role holds wherever it sits in the router tree.
//! Wrapped content is either explicit children or the nested route
//! `<Outlet/>`.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::components::{Outlet, Redirect};
use leptos_router::hooks::use_location;

use crate::state::claims::Role;
use crate::state::session::{SessionStore, use_session};
use crate::util::auth::{Access, AccessDecision, authorize, authorize_path};

/// Requires a signed-in, unexpired user, plus whatever role the route table
/// demands for the current path.
#[component]
pub fn AuthGuard(#[prop(optional)] children: Option<ChildrenFn>) -> impl IntoView {
    let store = use_session();

    // Drop a session whose token expired while the app was open, so the
    // persisted copy goes with it.
    Effect::new(move || {
        let stale = store.with(|s| s.session().user.as_ref().is_some_and(|u| u.is_expired(s.now())));
        if stale {
            store.update(|s| {
                s.expire_if_stale();
            });
        }
    });

    guarded(route_gate, children)
}

/// Requires `role`; a signed-in user with another role lands on the
/// unable-access page.
#[component]
pub fn RoleGuard(role: Role, #[prop(optional)] children: Option<ChildrenFn>) -> impl IntoView {
    let access = Access::Role(role);
    guarded(move |store, _| authorize(store.session(), &access, store.now()), children)
}

/// Decision for `pathname` from the route table.
pub(crate) fn route_gate(store: &SessionStore, pathname: &str) -> AccessDecision {
    authorize_path(store.session(), pathname, store.now())
}

fn guarded<D>(decide: D, children: Option<ChildrenFn>) -> impl IntoView
where
    D: Fn(&SessionStore, &str) -> AccessDecision + Send + Sync + 'static,
{
    let store = use_session();
    let location = use_location();

    let decision = Memo::new(move |_| {
        let pathname = location.pathname.get();
        store.with(|s| decide(s, &pathname))
    });

    move || match decision.get() {
        AccessDecision::Allow => match children.clone() {
            Some(children) => children().into_any(),
            None => view! { <Outlet/> }.into_any(),
        },
        AccessDecision::Redirect(route) => {
            log::info!("access denied at {}; redirecting to {route}", location.pathname.get_untracked());
            view! { <Redirect path=route.path()/> }.into_any()
        }
    }
}
