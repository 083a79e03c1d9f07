//! News list with search, status filter, pagination, and row actions.
//!
//! `DraftsPage` is the same list pinned to pending articles. Status changes
//! are admin-only and edit/delete are writer-only; the table reloads after every successful mutation, so
//! the server's answer is what gets shown.

#[cfg(test)]
#[path = "news_test.rs"]
mod news_test;

use leptos::prelude::*;

use super::{PageCtx, or_default};
use crate::net::types::{NewsArticle, NewsPage, NewsQuery, NewsStatus};
use crate::state::claims::Role;
use crate::util::routes::AppRoute;

#[component]
pub fn NewsListPage() -> impl IntoView {
    view! { <NewsList title="News" preset=None/> }
}

#[component]
pub fn DraftsPage() -> impl IntoView {
    view! { <NewsList title="My Drafts" preset=Some(NewsStatus::Pending)/> }
}

#[component]
fn NewsList(title: &'static str, preset: Option<NewsStatus>) -> impl IntoView {
    let ctx = PageCtx::current();
    let query = RwSignal::new(preset.map_or_else(NewsQuery::default, NewsQuery::with_status));
    let search = RwSignal::new(String::new());
    let results = RwSignal::new(NewsPage::default());
    let loading = RwSignal::new(true);
    let reload = RwSignal::new(0_u32);
    let is_admin = move || ctx.store.with(|s| can_set_status(s.role().as_ref()));
    let is_writer = move || ctx.store.with(|s| can_edit(s.role().as_ref()));

    Effect::new(move || {
        let q = query.get();
        reload.track();
        loading.set(true);
        ctx.authed(|api, token| api.list_news(token, &q), "Failed to load news", move |page| {
            loading.set(false);
            if let Some(page) = page {
                results.set(page);
            }
        });
    });

    let set_status = move |id: String, status: NewsStatus| {
        ctx.authed(|api, token| api.update_news_status(token, &id, status), "Failed to update status", move |msg| {
            if let Some(msg) = msg {
                ctx.notify(or_default(msg, "Status updated"));
                reload.update(|n| *n += 1);
            }
        });
    };

    let delete = move |id: String| {
        ctx.authed(|api, token| api.delete_news(token, &id), "Failed to delete news", move |msg| {
            if let Some(msg) = msg {
                ctx.notify(or_default(msg, "News deleted"));
                reload.update(|n| *n += 1);
            }
        });
    };

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        query.update(|q| {
            q.search = Some(search.get_untracked());
            q.page = 1;
        });
    };

    let row = move |article: NewsArticle| {
        let id = article.id.clone();
        let status_id = article.id.clone();
        let current = article.status;
        view! {
            <tr>
                <td>{article.title}</td>
                <td>{article.category}</td>
                <td>{article.writer_name.unwrap_or_default()}</td>
                <td>{article.date}</td>
                <td>
                    <Show when=is_admin fallback=move || current.as_str()>
                        <select on:change={
                            let status_id = status_id.clone();
                            move |ev| {
                                if let Some(status) = NewsStatus::parse(&event_target_value(&ev)) {
                                    set_status(status_id.clone(), status);
                                }
                            }
                        }>
                            {NewsStatus::ALL
                                .into_iter()
                                .map(|s| view! { <option value=s.as_str() selected={s == current}>{s.as_str()}</option> })
                                .collect_view()}
                        </select>
                    </Show>
                </td>
                <td>
                    <Show when=is_writer>
                        <a class="btn" href=AppRoute::EditNews(id.clone()).path()>"Edit"</a>
                        <button class="btn btn--danger" on:click={
                            let id = id.clone();
                            move |_| delete(id.clone())
                        }>"Delete"</button>
                    </Show>
                </td>
            </tr>
        }
    };

    view! {
        <section class="news-list">
            <header class="news-list__header">
                <h2>{title}</h2>
                <a class="btn" href=AppRoute::CreateNews.path()>"Add News"</a>
            </header>
            <div class="news-list__filters">
                <form on:submit=on_search>
                    <input
                        type="search"
                        placeholder="Search titles"
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <button class="btn" type="submit">"Search"</button>
                </form>
                <Show when=move || preset.is_none()>
                    <select on:change=move |ev| {
                        let status = NewsStatus::parse(&event_target_value(&ev));
                        query.update(|q| {
                            q.status = status;
                            q.page = 1;
                        });
                    }>
                        <option value="">"All statuses"</option>
                        {NewsStatus::ALL
                            .into_iter()
                            .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                            .collect_view()}
                    </select>
                </Show>
            </div>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading news..."</p> }>
                <Show
                    when=move || results.with(|r| !r.news.is_empty())
                    fallback=|| view! { <p class="news-list__empty">"No news found."</p> }
                >
                    <table class="news-list__table">
                        <thead>
                            <tr>
                                <th>"Title"</th>
                                <th>"Category"</th>
                                <th>"Writer"</th>
                                <th>"Date"</th>
                                <th>"Status"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>{move || results.get().news.into_iter().map(row).collect_view()}</tbody>
                    </table>
                </Show>
            </Show>
            <footer class="news-list__pager">
                <button
                    class="btn"
                    disabled=move || query.with(|q| q.page <= 1)
                    on:click=move |_| query.update(|q| q.page = q.page.saturating_sub(1).max(1))
                >
                    "Previous"
                </button>
                <span>
                    {move || {
                        query.with(|q| results.with(|r| page_label(q, r)))
                    }}
                </span>
                <button
                    class="btn"
                    disabled=move || !query.with(|q| results.with(|r| has_next_page(q, r)))
                    on:click=move |_| query.update(|q| q.page += 1)
                >
                    "Next"
                </button>
            </footer>
        </section>
    }
}

/// Writers manage their own articles.
fn can_edit(role: Option<&Role>) -> bool {
    matches!(role, Some(Role::Writer))
}

/// Admins moderate by status.
fn can_set_status(role: Option<&Role>) -> bool {
    matches!(role, Some(Role::Admin))
}

fn has_next_page(query: &NewsQuery, results: &NewsPage) -> bool {
    u64::from(query.page) < results.total_pages
}

fn page_label(query: &NewsQuery, results: &NewsPage) -> String {
    format!("Page {} of {}", query.page, results.total_pages.max(1))
}
