//! Client-side state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! State here is shared through Leptos context as `RwSignal`s: the session
//! store (token, decoded claims, category cache) and transient notices.

pub mod claims;
pub mod notice;
pub mod session;

#[cfg(test)]
pub(crate) mod test_support;
