//! Transient user notifications.
//!
//! Pages report outcomes here instead of rendering their own banners. A
//! request abandoned because its view unmounted is not a failure the user
//! needs to see, so `report_error` drops `ApiError::Cancelled`.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use leptos::prelude::*;

use crate::net::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

/// At most one notice is visible; a newer one replaces it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    pub current: Option<Notice>,
    next_id: u64,
}

impl NoticeState {
    pub fn success(&mut self, text: impl Into<String>) -> u64 {
        self.push(NoticeKind::Success, text.into())
    }

    pub fn error(&mut self, text: impl Into<String>) -> u64 {
        self.push(NoticeKind::Error, text.into())
    }

    /// Show `err` to the user, preferring the server's message over
    /// `fallback`. Returns the notice id, or `None` when nothing was shown.
    pub fn report_error(&mut self, err: &ApiError, fallback: &str) -> Option<u64> {
        if err.is_cancelled() {
            return None;
        }
        log::warn!("{fallback}: {err}");
        Some(self.error(err.user_message(fallback)))
    }

    /// Dismiss notice `id` if it is still the one showing.
    pub fn dismiss(&mut self, id: u64) {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
        }
    }

    fn push(&mut self, kind: NoticeKind, text: String) -> u64 {
        self.next_id += 1;
        self.current = Some(Notice { id: self.next_id, kind, text });
        self.next_id
    }
}

pub fn use_notices() -> RwSignal<NoticeState> {
    expect_context::<RwSignal<NoticeState>>()
}
