//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::layout::DashboardLayout;
use crate::components::notice_bar::NoticeBar;
use crate::components::route_guard::{AuthGuard, RoleGuard};
use crate::config::AppConfig;
use crate::net::api::ApiClient;
use crate::pages::{
    categories::CategoriesPage,
    dashboard_index::DashboardIndex,
    login::LoginPage,
    news::{DraftsPage, NewsListPage},
    news_editor::NewsEditorPage,
    overview::{AdminOverviewPage, WriterOverviewPage},
    profile::ProfilePage,
    signup::SignupPage,
    unable_access::UnableAccessPage,
    writer_form::{AddWriterPage, ManageWriterPage},
    writers::WritersPage,
};
use crate::state::claims::Role;
use crate::state::notice::NoticeState;
use crate::state::session::SessionStore;
use crate::util::clock::now_secs;
use crate::util::token_storage::BrowserStorage;

/// Root application component.
///
/// Opens the session from the persisted token, provides shared contexts,
/// and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_build_env();
    let store = RwSignal::new(SessionStore::open(Arc::new(BrowserStorage::default()), now_secs));
    let notices = RwSignal::new(NoticeState::default());

    provide_context(store);
    provide_context(notices);
    provide_context(ApiClient::new(&config));

    view! {
        <Title text="Newsroom Dashboard"/>

        <Router>
            <NoticeBar/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/dashboard"/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <ParentRoute path=StaticSegment("dashboard") view=DashboardShell>
                    <Route path=StaticSegment("") view=DashboardIndex/>
                    <ParentRoute path=StaticSegment("") view=AdminOnly>
                        <Route path=StaticSegment("admin") view=AdminOverviewPage/>
                        <Route path=(StaticSegment("writer"), StaticSegment("add")) view=AddWriterPage/>
                        <Route path=StaticSegment("writers") view=WritersPage/>
                        <Route
                            path=(StaticSegment("writers"), StaticSegment("manage"), ParamSegment("writer_id"))
                            view=ManageWriterPage
                        />
                    </ParentRoute>
                    <Route path=StaticSegment("writer") view=WriterOverviewPage/>
                    <Route path=(StaticSegment("news"), StaticSegment("create")) view=NewsEditorPage/>
                    <Route path=(StaticSegment("news"), StaticSegment("drafts")) view=DraftsPage/>
                    <Route path=StaticSegment("news") view=NewsListPage/>
                    <Route path=(StaticSegment("news"), StaticSegment("edit"), ParamSegment("news_id")) view=NewsEditorPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=StaticSegment("categories") view=CategoriesPage/>
                    <Route path=StaticSegment("unable-access") view=UnableAccessPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Signed-in users only; renders the sidebar layout around the child route.
#[component]
fn DashboardShell() -> impl IntoView {
    view! {
        <AuthGuard>
            <DashboardLayout/>
        </AuthGuard>
    }
}

#[component]
fn AdminOnly() -> impl IntoView {
    view! { <RoleGuard role=Role::Admin/> }
}
