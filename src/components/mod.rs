//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome (guards, sidebar, notices) and read
//! shared state from Leptos context providers.

pub mod layout;
pub mod notice_bar;
pub mod route_guard;
pub mod sidebar;
