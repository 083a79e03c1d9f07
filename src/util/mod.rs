//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Routing, authorization, and navigation decisions live here as plain
//! functions so pages and components stay thin and the rules can be tested
//! without a browser.

pub mod auth;
pub mod clock;
pub mod nav;
pub mod routes;
pub mod token_storage;
