//! Typed route table.
//!
//! Every navigable path is an `AppRoute`. The router tree in `app` mirrors
//! these paths; `access` states what each one requires.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::fmt;

use super::auth::Access;
use crate::state::claims::Role;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Home,
    Login,
    Signup,
    Dashboard,
    AdminOverview,
    AddWriter,
    Writers,
    ManageWriter(String),
    WriterOverview,
    CreateNews,
    Drafts,
    News,
    EditNews(String),
    Profile,
    Categories,
    UnableAccess,
}

impl AppRoute {
    pub fn path(&self) -> String {
        match self {
            AppRoute::Home => "/".to_owned(),
            AppRoute::Login => "/login".to_owned(),
            AppRoute::Signup => "/signup".to_owned(),
            AppRoute::Dashboard => "/dashboard".to_owned(),
            AppRoute::AdminOverview => "/dashboard/admin".to_owned(),
            AppRoute::AddWriter => "/dashboard/writer/add".to_owned(),
            AppRoute::Writers => "/dashboard/writers".to_owned(),
            AppRoute::ManageWriter(id) => format!("/dashboard/writers/manage/{}", urlencoding::encode(id)),
            AppRoute::WriterOverview => "/dashboard/writer".to_owned(),
            AppRoute::CreateNews => "/dashboard/news/create".to_owned(),
            AppRoute::Drafts => "/dashboard/news/drafts".to_owned(),
            AppRoute::News => "/dashboard/news".to_owned(),
            AppRoute::EditNews(id) => format!("/dashboard/news/edit/{}", urlencoding::encode(id)),
            AppRoute::Profile => "/dashboard/profile".to_owned(),
            AppRoute::Categories => "/dashboard/categories".to_owned(),
            AppRoute::UnableAccess => "/dashboard/unable-access".to_owned(),
        }
    }

    /// Resolve a location pathname. Trailing slashes are ignored.
    pub fn parse(pathname: &str) -> Option<Self> {
        let segments: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).collect();
        let route = match segments.as_slice() {
            [] => AppRoute::Home,
            ["login"] => AppRoute::Login,
            ["signup"] => AppRoute::Signup,
            ["dashboard"] => AppRoute::Dashboard,
            ["dashboard", "admin"] => AppRoute::AdminOverview,
            ["dashboard", "writer"] => AppRoute::WriterOverview,
            ["dashboard", "writer", "add"] => AppRoute::AddWriter,
            ["dashboard", "writers"] => AppRoute::Writers,
            ["dashboard", "writers", "manage", id] => AppRoute::ManageWriter(decode(id)?),
            ["dashboard", "news"] => AppRoute::News,
            ["dashboard", "news", "create"] => AppRoute::CreateNews,
            ["dashboard", "news", "drafts"] => AppRoute::Drafts,
            ["dashboard", "news", "edit", id] => AppRoute::EditNews(decode(id)?),
            ["dashboard", "profile"] => AppRoute::Profile,
            ["dashboard", "categories"] => AppRoute::Categories,
            ["dashboard", "unable-access"] => AppRoute::UnableAccess,
            _ => return None,
        };
        Some(route)
    }

    pub fn access(&self) -> Access {
        match self {
            AppRoute::Home | AppRoute::Login | AppRoute::Signup => Access::Public,
            AppRoute::AdminOverview | AppRoute::AddWriter | AppRoute::Writers | AppRoute::ManageWriter(_) => {
                Access::Role(Role::Admin)
            }
            _ => Access::Authenticated,
        }
    }
}

impl fmt::Display for AppRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Where `/dashboard` sends a signed-in user.
pub fn landing_route(role: Option<&Role>) -> AppRoute {
    match role {
        Some(Role::Admin) => AppRoute::AdminOverview,
        _ => AppRoute::WriterOverview,
    }
}

fn decode(segment: &str) -> Option<String> {
    urlencoding::decode(segment).ok().map(std::borrow::Cow::into_owned)
}
