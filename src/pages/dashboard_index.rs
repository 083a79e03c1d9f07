//! `/dashboard` itself: forward to the role's overview page.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::session::use_session;
use crate::util::routes::landing_route;

#[component]
pub fn DashboardIndex() -> impl IntoView {
    let store = use_session();
    let target = store.with_untracked(|s| landing_route(s.role().as_ref()));
    view! { <Redirect path=target.path()/> }
}
