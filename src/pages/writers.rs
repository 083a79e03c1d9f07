//! Writer roster with article counts and the activate/deactivate toggle.
//!
//! The toggle waits for the server before reloading the roster; nothing is
//! flipped locally ahead of the response.

use std::collections::HashMap;

use leptos::prelude::*;

use super::{PageCtx, or_default};
use crate::net::types::Writer;
use crate::util::routes::AppRoute;

#[component]
pub fn WritersPage() -> impl IntoView {
    let ctx = PageCtx::current();
    let writers = RwSignal::new(Vec::<Writer>::new());
    let counts = RwSignal::new(HashMap::<String, u64>::new());
    let loading = RwSignal::new(true);
    let reload = RwSignal::new(0_u32);

    Effect::new(move || {
        reload.track();
        loading.set(true);
        ctx.authed(|api, token| api.list_writers(token), "Failed to load writers", move |list| {
            loading.set(false);
            if let Some(list) = list {
                writers.set(list);
            }
        });
        ctx.authed(|api, token| api.writer_news_counts(token), "Failed to load writer stats", move |stats| {
            if let Some(stats) = stats {
                counts.set(stats.into_iter().map(|s| (s.id, s.count)).collect());
            }
        });
    });

    let toggle = move |writer: Writer| {
        let next = !writer.is_active;
        ctx.authed(|api, token| api.set_writer_active(token, &writer.id, next), "Failed to update writer", move |msg| {
            if let Some(msg) = msg {
                let fallback = if next { "Writer activated" } else { "Writer deactivated" };
                ctx.notify(or_default(msg, fallback));
                reload.update(|n| *n += 1);
            }
        });
    };

    let row = move |writer: Writer| {
        let count = counts.with(|c| c.get(&writer.id).copied().unwrap_or(0));
        let manage = AppRoute::ManageWriter(writer.id.clone()).path();
        let status = if writer.is_active { "Active" } else { "Inactive" };
        let action = if writer.is_active { "Deactivate" } else { "Activate" };
        let target = writer.clone();
        view! {
            <tr>
                <td>{writer.name}</td>
                <td>{writer.email}</td>
                <td>{writer.category.unwrap_or_default()}</td>
                <td>{writer.role.as_str()}</td>
                <td>{count}</td>
                <td>{status}</td>
                <td>
                    <button class="btn" on:click=move |_| toggle(target.clone())>{action}</button>
                    <a class="btn" href=manage>"Manage"</a>
                </td>
            </tr>
        }
    };

    view! {
        <section class="writers">
            <header class="writers__header">
                <h2>"Writers"</h2>
                <a class="btn" href=AppRoute::AddWriter.path()>"Add Writer"</a>
            </header>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading writers..."</p> }>
                <table class="writers__table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Category"</th>
                            <th>"Role"</th>
                            <th>"Articles"</th>
                            <th>"Status"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>{move || writers.get().into_iter().map(row).collect_view()}</tbody>
                </table>
            </Show>
        </section>
    }
}
