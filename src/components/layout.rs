//! Authenticated dashboard shell: sidebar, header, and routed content.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use super::sidebar::Sidebar;
use crate::state::session::use_session;

#[component]
pub fn DashboardLayout() -> impl IntoView {
    let store = use_session();
    let identity = move || {
        store.with(|s| s.user().map(|u| (u.name.clone(), u.role.as_str())).unwrap_or_default())
    };

    view! {
        <div class="dashboard">
            <Sidebar/>
            <div class="dashboard__main">
                <header class="dashboard__header">
                    <span class="dashboard__user">{move || identity().0}</span>
                    <span class="dashboard__role">{move || identity().1}</span>
                </header>
                <main class="dashboard__content">
                    <Outlet/>
                </main>
            </div>
        </div>
    }
}
