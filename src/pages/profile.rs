//! Read-only view of the signed-in user's claims.

use leptos::prelude::*;

use crate::state::session::use_session;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let store = use_session();
    let user = move || store.with(|s| s.user().cloned());

    view! {
        <section class="profile">
            <h2>"Profile"</h2>
            {move || {
                user()
                    .map(|u| {
                        view! {
                            <dl class="profile__details">
                                <dt>"Name"</dt>
                                <dd>{u.name}</dd>
                                <dt>"Email"</dt>
                                <dd>{u.email.unwrap_or_else(|| "-".to_owned())}</dd>
                                <dt>"Role"</dt>
                                <dd>{u.role.as_str()}</dd>
                                <dt>"Category"</dt>
                                <dd>{u.category.unwrap_or_else(|| "-".to_owned())}</dd>
                                <dt>"User ID"</dt>
                                <dd>{u.id}</dd>
                            </dl>
                        }
                    })
            }}
        </section>
    }
}
