//! Role landing pages with article counts by status.
//!
//! Both overviews count the articles the server returns for the bearer
//! token: everything for an admin, the writer's own work for a writer.

use leptos::prelude::*;

use super::PageCtx;
use crate::net::types::{NewsArticle, NewsQuery, NewsStats, WriterNewsCount};
use crate::util::routes::AppRoute;

/// Articles fetched for the counters; the table shows the first few.
const OVERVIEW_LIMIT: u32 = 100;
const RECENT_ROWS: usize = 5;

#[component]
pub fn AdminOverviewPage() -> impl IntoView {
    let ctx = PageCtx::current();
    let top_writers = RwSignal::new(Vec::<WriterNewsCount>::new());

    ctx.authed(|api, token| api.writer_news_counts(token), "Failed to load writer stats", move |stats| {
        if let Some(mut stats) = stats {
            stats.sort_by(|a, b| b.count.cmp(&a.count));
            top_writers.set(stats);
        }
    });

    view! {
        <section class="overview">
            <h2>"Admin Dashboard"</h2>
            <Overview ctx/>
            <h3>"Writers by articles"</h3>
            <ul class="overview__writers">
                {move || {
                    top_writers
                        .get()
                        .into_iter()
                        .map(|w| {
                            let name = w.name.unwrap_or(w.id);
                            view! { <li>{format!("{name}: {}", w.count)}</li> }
                        })
                        .collect_view()
                }}
            </ul>
        </section>
    }
}

#[component]
pub fn WriterOverviewPage() -> impl IntoView {
    let ctx = PageCtx::current();
    view! {
        <section class="overview">
            <h2>"Writer Dashboard"</h2>
            <a class="btn" href=AppRoute::CreateNews.path()>"Add News"</a>
            <Overview ctx/>
        </section>
    }
}

#[component]
fn Overview(ctx: PageCtx) -> impl IntoView {
    let articles = RwSignal::new(Vec::<NewsArticle>::new());
    let loading = RwSignal::new(true);

    let query = NewsQuery { limit: OVERVIEW_LIMIT, ..NewsQuery::default() };
    ctx.authed(|api, token| api.list_news(token, &query), "Failed to load news", move |page| {
        loading.set(false);
        if let Some(page) = page {
            articles.set(page.news);
        }
    });

    let stats = move || articles.with(|a| NewsStats::from_articles(a));

    view! {
        <div class="overview__stats">
            <Stat label="Total" value=Signal::derive(move || stats().total)/>
            <Stat label="Pending" value=Signal::derive(move || stats().pending)/>
            <Stat label="Active" value=Signal::derive(move || stats().active)/>
            <Stat label="Deactive" value=Signal::derive(move || stats().deactive)/>
        </div>
        <Show when=move || !loading.get() fallback=|| view! { <p>"Loading news..."</p> }>
            <table class="overview__recent">
                <thead>
                    <tr>
                        <th>"Title"</th>
                        <th>"Status"</th>
                        <th>"Date"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        articles
                            .get()
                            .into_iter()
                            .take(RECENT_ROWS)
                            .map(|a| {
                                view! {
                                    <tr>
                                        <td>{a.title}</td>
                                        <td>{a.status.as_str()}</td>
                                        <td>{a.date}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </Show>
    }
}

#[component]
fn Stat(label: &'static str, value: Signal<usize>) -> impl IntoView {
    view! {
        <div class="overview__stat">
            <span class="overview__stat-label">{label}</span>
            <span class="overview__stat-value">{move || value.get()}</span>
        </div>
    }
}
