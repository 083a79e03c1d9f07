//! Role-aware sidebar navigation with the logout action.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::use_session;
use crate::util::nav::visible_sections;
use crate::util::routes::AppRoute;

#[component]
pub fn Sidebar() -> impl IntoView {
    let store = use_session();
    let location = use_location();
    let navigate = use_navigate();

    let on_logout = move |_| {
        store.update(|s| s.logout());
        navigate(&AppRoute::Login.path(), NavigateOptions::default());
    };

    view! {
        <nav class="sidebar">
            {move || {
                let pathname = location.pathname.get();
                visible_sections(store.with(|s| s.role()).as_ref())
                    .into_iter()
                    .map(|section| {
                        let items = section
                            .items
                            .into_iter()
                            .map(|item| {
                                let class = if item.is_active(&pathname) {
                                    "sidebar__item sidebar__item--active"
                                } else {
                                    "sidebar__item"
                                };
                                view! {
                                    <li class=class>
                                        <a href=item.route.path()>{item.label}</a>
                                    </li>
                                }
                            })
                            .collect_view();
                        view! {
                            <div class="sidebar__section">
                                <p class="sidebar__title">{section.kind.title()}</p>
                                <ul>{items}</ul>
                            </div>
                        }
                    })
                    .collect_view()
            }}
            <button class="btn sidebar__logout" on:click=on_logout>
                "Logout"
            </button>
        </nav>
    }
}
