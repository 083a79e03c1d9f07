//! Writer self-registration. Shares the login path once a token arrives.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::{PageCtx, or_default};
use crate::net::types::{Category, SignupForm};
use crate::util::routes::{AppRoute, landing_route};

#[component]
pub fn SignupPage() -> impl IntoView {
    let ctx = PageCtx::current();
    let navigate = use_navigate();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let categories = RwSignal::new(Vec::<Category>::new());
    let busy = RwSignal::new(false);

    ctx.request(ctx.api().list_category_names(), "Failed to load categories", move |list| {
        if let Some(list) = list {
            categories.set(list);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = SignupForm {
            name: name.get().trim().to_owned(),
            email: email.get().trim().to_owned(),
            password: password.get(),
            category: category.get(),
        };
        if let Err(err) = form.validate() {
            ctx.warn(err.to_string());
            return;
        }
        busy.set(true);
        let navigate = navigate.clone();
        ctx.request(ctx.api().signup(&form), "Signup failed", move |resp| {
            busy.set(false);
            let Some(resp) = resp else { return };
            let role = ctx.store.try_update(|s| s.login(&resp.token).map(|u| u.role.clone())).flatten();
            if role.is_some() {
                ctx.notify(or_default(resp.message, "Account created"));
                navigate(&landing_route(role.as_ref()).path(), NavigateOptions::default());
            } else {
                ctx.warn("The server returned an unusable token");
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create an account"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                    <select
                        class="login-input"
                        prop:value=move || category.get()
                        on:change=move |ev| category.set(event_target_value(&ev))
                    >
                        <option value="">"Choose a category"</option>
                        {move || {
                            categories
                                .get()
                                .into_iter()
                                .map(|c| view! { <option value=c.id.clone()>{c.name}</option> })
                                .collect_view()
                        }}
                    </select>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign Up"
                    </button>
                </form>
                <p class="login-card__footer">
                    "Already registered? " <a href=AppRoute::Login.path()>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
