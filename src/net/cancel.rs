//! View-scoped request cancellation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages fire requests from `spawn_local` tasks. When the user navigates
//! away, the page's reactive owner is disposed but its tasks keep running;
//! without a guard a late response would write into signals that no longer
//! back anything on screen. Each page takes one `CancelToken` tied to its
//! cleanup, and `ApiCall::send` refuses to hand back results once it flips.

#[cfg(test)]
#[path = "cancel_test.rs"]
mod cancel_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::error::ApiError;

#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token cancelled automatically when the current reactive owner (the
    /// calling component) is cleaned up.
    pub fn for_view() -> Self {
        let token = Self::new();
        let on_drop = token.clone();
        leptos::prelude::on_cleanup(move || on_drop.cancel());
        token
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// # Errors
    ///
    /// Returns `ApiError::Cancelled` once the token has been cancelled.
    pub fn check(&self) -> Result<(), ApiError> {
        if self.is_cancelled() { Err(ApiError::Cancelled) } else { Ok(()) }
    }
}
