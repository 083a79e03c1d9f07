//! Networking modules for the news REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages build typed `ApiCall`s through `api::ApiClient` and send them with a
//! view-scoped `cancel::CancelToken`. Wire shapes live in `types`; failures
//! surface as `error::ApiError`.

pub mod api;
pub mod cancel;
pub mod error;
pub mod request;
pub mod types;
