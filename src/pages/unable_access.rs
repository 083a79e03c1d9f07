//! Terminal view for signed-in users who lack the role a route requires.

use leptos::prelude::*;

use crate::state::session::use_session;
use crate::util::routes::landing_route;

#[component]
pub fn UnableAccessPage() -> impl IntoView {
    let store = use_session();
    let home = move || landing_route(store.with(|s| s.role()).as_ref()).path();

    view! {
        <div class="unable-access">
            <h2>"Access denied"</h2>
            <p>"Your account does not have permission to view this page."</p>
            <a class="btn" href=home>"Back to your dashboard"</a>
        </div>
    }
}
