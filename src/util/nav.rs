//! Sidebar navigation model.
//!
//! `visible_sections` is recomputed from the current role on every render.
//! Each section is a fixed list of items; the role only decides which
//! sections appear, in the order admin, writer, general.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use super::routes::AppRoute;
use crate::state::claims::Role;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Admin,
    Writer,
    General,
}

impl SectionKind {
    pub fn title(self) -> &'static str {
        match self {
            SectionKind::Admin => "Admin",
            SectionKind::Writer => "Writer",
            SectionKind::General => "General",
        }
    }

    fn items(self) -> Vec<NavItem> {
        match self {
            SectionKind::Admin => vec![
                NavItem::new("Dashboard", AppRoute::AdminOverview),
                NavItem::new("Add Writer", AppRoute::AddWriter),
                NavItem::new("Writers", AppRoute::Writers),
            ],
            SectionKind::Writer => vec![
                NavItem::new("Writer Dashboard", AppRoute::WriterOverview),
                NavItem::new("Add News", AppRoute::CreateNews),
                NavItem::new("My Drafts", AppRoute::Drafts),
            ],
            SectionKind::General => vec![
                NavItem::new("News", AppRoute::News),
                NavItem::new("Profile", AppRoute::Profile),
                NavItem::new("Categories", AppRoute::Categories),
            ],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub route: AppRoute,
}

impl NavItem {
    fn new(label: &'static str, route: AppRoute) -> Self {
        Self { label, route }
    }

    /// Whether `pathname` is this item's own route.
    pub fn is_active(&self, pathname: &str) -> bool {
        let trimmed = pathname.trim_end_matches('/');
        let current = if trimmed.is_empty() { "/" } else { trimmed };
        current == self.route.path()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavSection {
    pub kind: SectionKind,
    pub items: Vec<NavItem>,
}

pub fn visible_sections(role: Option<&Role>) -> Vec<NavSection> {
    let kinds: &[SectionKind] = match role {
        Some(Role::Admin) => &[SectionKind::Admin, SectionKind::Writer, SectionKind::General],
        Some(Role::Writer) => &[SectionKind::Writer, SectionKind::General],
        _ => &[SectionKind::General],
    };
    kinds.iter().map(|&kind| NavSection { kind, items: kind.items() }).collect()
}
