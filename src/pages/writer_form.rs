//! Add-writer and manage-writer forms (admin only).

#[cfg(test)]
#[path = "writer_form_test.rs"]
mod writer_form_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::{PageCtx, or_default};
use crate::net::types::{NewWriter, WriterUpdate};
use crate::state::claims::Role;
use crate::util::routes::AppRoute;

#[component]
pub fn AddWriterPage() -> impl IntoView {
    let ctx = PageCtx::current();
    let navigate = use_navigate();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Writer);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let writer = NewWriter {
            name: name.get().trim().to_owned(),
            email: email.get().trim().to_owned(),
            password: password.get(),
            role: role.get(),
        };
        if let Err(err) = writer.validate() {
            ctx.warn(err.to_string());
            return;
        }
        busy.set(true);
        let navigate = navigate.clone();
        ctx.authed(|api, token| api.add_writer(token, &writer), "Failed to add writer", move |msg| {
            busy.set(false);
            if let Some(msg) = msg {
                ctx.notify(or_default(msg, "Writer added"));
                navigate(&AppRoute::Writers.path(), NavigateOptions::default());
            }
        });
    };

    view! {
        <section class="writer-form">
            <h2>"Add Writer"</h2>
            <form on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <RoleSelect role/>
                <button class="btn" type="submit" disabled=move || busy.get()>"Add Writer"</button>
            </form>
        </section>
    }
}

#[component]
pub fn ManageWriterPage() -> impl IntoView {
    let ctx = PageCtx::current();
    let navigate = use_navigate();
    let writer_id = use_params_map().with_untracked(|p| p.get("writer_id")).unwrap_or_default();
    let name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Writer);
    let is_active = RwSignal::new(true);
    let loading = RwSignal::new(true);
    let busy = RwSignal::new(false);

    ctx.authed(|api, token| api.get_writer(token, &writer_id), "Failed to load writer", move |writer| {
        loading.set(false);
        let Some(writer) = writer else { return };
        name.set(writer.name);
        role.set(writer.role);
        is_active.set(writer.is_active);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        if name.get().trim().is_empty() {
            ctx.warn("name is required");
            return;
        }
        let update = WriterUpdate::from_form(&name.get(), &password.get(), role.get(), is_active.get());
        busy.set(true);
        let navigate = navigate.clone();
        ctx.authed(|api, token| api.update_writer(token, &writer_id, &update), "Failed to update writer", move |msg| {
            busy.set(false);
            if let Some(msg) = msg {
                ctx.notify(or_default(msg, "Writer updated"));
                navigate(&AppRoute::Writers.path(), NavigateOptions::default());
            }
        });
    };

    view! {
        <section class="writer-form">
            <h2>"Edit Writer"</h2>
            <Show when=move || loading.get()>
                <p>"Loading writer info..."</p>
            </Show>
            <form on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="New password (leave blank to keep)"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <RoleSelect role/>
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || is_active.get()
                        on:change=move |ev| is_active.set(event_target_checked(&ev))
                    />
                    "Active"
                </label>
                <button class="btn" type="submit" disabled=move || busy.get()>"Save"</button>
            </form>
        </section>
    }
}

#[component]
fn RoleSelect(role: RwSignal<Role>) -> impl IntoView {
    view! {
        <select
            prop:value=move || role.get().as_str()
            on:change=move |ev| role.set(role_from_value(&event_target_value(&ev)))
        >
            <option value=Role::Writer.as_str()>"Writer"</option>
            <option value=Role::Admin.as_str()>"Admin"</option>
        </select>
    }
}

/// Only admin and writer accounts can be created from the dashboard.
fn role_from_value(value: &str) -> Role {
    if value == Role::Admin.as_str() { Role::Admin } else { Role::Writer }
}
