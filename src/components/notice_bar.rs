//! Renders the current notice and dismisses it after a few seconds.

use leptos::prelude::*;

use crate::state::notice::{NoticeKind, use_notices};

#[cfg(feature = "csr")]
const AUTO_DISMISS: std::time::Duration = std::time::Duration::from_secs(4);

#[component]
pub fn NoticeBar() -> impl IntoView {
    let notices = use_notices();

    Effect::new(move || {
        let Some(id) = notices.with(|n| n.current.as_ref().map(|c| c.id)) else {
            return;
        };
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(AUTO_DISMISS).await;
            let _ = notices.try_update(|n| n.dismiss(id));
        });
        #[cfg(not(feature = "csr"))]
        let _ = id;
    });

    move || {
        notices.with(|n| n.current.clone()).map(|notice| {
            let class = match notice.kind {
                NoticeKind::Success => "notice notice--success",
                NoticeKind::Error => "notice notice--error",
            };
            let id = notice.id;
            view! {
                <div class=class role="status" on:click=move |_| notices.update(|n| n.dismiss(id))>
                    {notice.text}
                </div>
            }
        })
    }
}
