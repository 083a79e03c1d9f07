//! Category management: list with article counts, add, delete.
//!
//! Every successful load refreshes the session's category cache through
//! `SessionAction::SetCategories`, so pickers elsewhere see the same list.

use leptos::prelude::*;

use super::{PageCtx, or_default};
use crate::net::types::Category;
use crate::state::claims::Role;
use crate::state::session::SessionAction;

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let ctx = PageCtx::current();
    let name = RwSignal::new(String::new());
    let loading = RwSignal::new(true);
    let reload = RwSignal::new(0_u32);
    let is_admin = move || ctx.store.with(|s| s.role() == Some(Role::Admin));
    let categories = move || ctx.store.with(|s| s.categories().to_vec());

    Effect::new(move || {
        reload.track();
        loading.set(true);
        ctx.request(ctx.api().list_categories(), "Failed to load categories", move |list| {
            loading.set(false);
            if let Some(list) = list {
                ctx.store.update(|s| s.dispatch(SessionAction::SetCategories(list)));
            }
        });
    });

    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let value = name.get();
        if value.trim().is_empty() {
            ctx.warn("Category name is required");
            return;
        }
        ctx.authed(|api, token| api.create_category(token, &value), "Failed to add category", move |msg| {
            if let Some(msg) = msg {
                name.set(String::new());
                ctx.notify(or_default(msg, "Category added"));
                reload.update(|n| *n += 1);
            }
        });
    };

    let delete = move |category: Category| {
        let id = category.id.clone();
        ctx.authed(|api, token| api.delete_category(token, &id), "Failed to delete category", move |msg| {
            if let Some(msg) = msg {
                ctx.notify(or_default(msg, &format!("Deleted {}", category.name)));
                reload.update(|n| *n += 1);
            }
        });
    };

    view! {
        <section class="categories">
            <h2>"Categories"</h2>
            <Show when=is_admin>
                <form class="categories__add" on:submit=on_add>
                    <input
                        type="text"
                        placeholder="New category"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <button class="btn" type="submit">"Add"</button>
                </form>
            </Show>
            <Show when=move || !loading.get() || !categories().is_empty() fallback=|| view! { <p>"Loading categories..."</p> }>
                <ul class="categories__list">
                    {move || {
                        categories()
                            .into_iter()
                            .map(|category| {
                                let label = format!("{} ({})", category.name, category.article_count);
                                view! {
                                    <li>
                                        <span>{label}</span>
                                        <Show when=is_admin>
                                            <button class="btn btn--danger" on:click={
                                                let category = category.clone();
                                                move |_| delete(category.clone())
                                            }>
                                                "Delete"
                                            </button>
                                        </Show>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </section>
    }
}
