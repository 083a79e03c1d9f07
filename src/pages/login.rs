//! Email + password login.
//!
//! A successful response carries a bearer token; the session store persists
//! it and decodes the claims, and the user lands on their role's overview.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::{PageCtx, or_default};
use crate::net::types::LoginForm;
use crate::util::routes::{AppRoute, landing_route};

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = PageCtx::current();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = LoginForm { email: email.get().trim().to_owned(), password: password.get() };
        if let Err(err) = form.validate() {
            ctx.warn(err.to_string());
            return;
        }
        busy.set(true);
        let navigate = navigate.clone();
        ctx.request(ctx.api().login(&form), "Login failed", move |resp| {
            busy.set(false);
            let Some(resp) = resp else { return };
            let role = ctx.store.try_update(|s| s.login(&resp.token).map(|u| u.role.clone())).flatten();
            match role {
                Some(role) => {
                    ctx.notify(or_default(resp.message, "Login successful"));
                    navigate(&landing_route(Some(&role)).path(), NavigateOptions::default());
                }
                None => ctx.warn("The server returned an unusable token"),
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Newsroom"</h1>
                <p class="login-card__subtitle">"Sign in to the dashboard"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="login-card__footer">
                    "No account? " <a href=AppRoute::Signup.path()>"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
