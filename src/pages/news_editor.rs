//! Create and edit form for a news article.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted at `/dashboard/news/create` and `/dashboard/news/edit/:news_id`.
//! In edit mode the article is fetched first and the form is seeded from
//! it. The cover image is uploaded on selection (to the asset host when it
//! is configured, otherwise through the backend) and only its URL is sent
//! with the article. Inline body images go through the editor upload
//! endpoint and are appended to the HTML body.

use askama::Template;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::{PageCtx, or_default};
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::request::UploadFile;
use crate::net::types::{Category, NewsDraft};
use crate::util::routes::AppRoute;

#[cfg(test)]
#[path = "news_editor_test.rs"]
mod news_editor_test;

/// `<img>` tag appended to the article body for an uploaded inline image.
#[derive(Template)]
#[template(source = r#"<img src="{{ url }}"/>"#, ext = "html")]
struct InlineImage<'a> {
    url: &'a str,
}

fn inline_image_html(url: &str) -> Result<String, askama::Error> {
    InlineImage { url }.render()
}

#[component]
pub fn NewsEditorPage() -> impl IntoView {
    let ctx = PageCtx::current();
    let navigate = use_navigate();
    let news_id = use_params_map().with_untracked(|p| p.get("news_id"));
    let editing = news_id.is_some();

    let title = RwSignal::new(String::new());
    let sub_title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let image = RwSignal::new(None::<String>);
    let categories = RwSignal::new(Vec::<Category>::new());
    let uploading = RwSignal::new(false);
    let busy = RwSignal::new(false);

    ctx.request(ctx.api().list_category_names(), "Failed to load categories", move |list| {
        if let Some(list) = list {
            categories.set(list);
        }
    });

    if let Some(id) = news_id.clone() {
        ctx.authed(|api, token| api.get_news(token, &id), "Failed to load article", move |article| {
            let Some(article) = article else { return };
            title.set(article.title);
            sub_title.set(article.sub_title);
            description.set(article.description);
            category.set(article.category);
            image.set(Some(article.image).filter(|url| !url.is_empty()));
        });
    }

    let upload_cover = move |file: UploadFile| {
        uploading.set(true);
        let done = move |url: Option<String>| {
            uploading.set(false);
            if let Some(url) = url {
                image.set(Some(url));
                ctx.notify("Image uploaded");
            }
        };
        match ctx.api().upload_to_asset_host(file.clone()) {
            Ok(call) => ctx.request(call, "Image upload failed", done),
            Err(ApiError::AssetHostUnconfigured) => {
                ctx.authed(|api, token| api.upload_image(token, file), "Image upload failed", done);
            }
            Err(err) => {
                uploading.set(false);
                ctx.fail(&err, "Image upload failed");
            }
        }
    };

    let upload_inline = move |file: UploadFile| {
        ctx.authed(|api, token| api.upload_editor_image(token, file), "Image upload failed", move |resp| {
            let Some(resp) = resp else { return };
            if !resp.is_success() {
                ctx.warn(resp.error.clone().unwrap_or_else(|| "Upload failed".to_owned()));
                return;
            }
            for url in &resp.files {
                match inline_image_html(url) {
                    Ok(tag) => description.update(|html| html.push_str(&tag)),
                    Err(err) => {
                        log::warn!("inline image render failed: {err}");
                        ctx.warn("Upload failed");
                        return;
                    }
                }
            }
            ctx.notify(resp.message().to_owned());
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() || uploading.get() {
            return;
        }
        let draft = NewsDraft {
            title: title.get(),
            sub_title: sub_title.get(),
            description: description.get(),
            category: category.get(),
            image: image.get(),
        };
        if let Err(err) = draft.validate() {
            ctx.warn(err.to_string());
            return;
        }
        busy.set(true);
        let navigate = navigate.clone();
        let build = |api: &ApiClient, token: &str| match &news_id {
            Some(id) => api.update_news(token, id, &draft),
            None => api.create_news(token, &draft),
        };
        ctx.authed(build, "Failed to save news", move |msg| {
            busy.set(false);
            if let Some(msg) = msg {
                ctx.notify(or_default(msg, "News saved"));
                navigate(&AppRoute::News.path(), NavigateOptions::default());
            }
        });
    };

    view! {
        <section class="news-editor">
            <h2>{if editing { "Edit News" } else { "Add News" }}</h2>
            <form class="news-editor__form" on:submit=on_submit>
                <label>
                    "Title"
                    <input
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Subtitle"
                    <input
                        type="text"
                        prop:value=move || sub_title.get()
                        on:input=move |ev| sub_title.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Category"
                    <select
                        prop:value=move || category.get()
                        on:change=move |ev| category.set(event_target_value(&ev))
                    >
                        <option value="">"Choose a category"</option>
                        {move || {
                            categories
                                .get()
                                .into_iter()
                                .map(|c| view! { <option value=c.id.clone()>{c.name}</option> })
                                .collect_view()
                        }}
                    </select>
                </label>
                <label>
                    "Cover image"
                    <input type="file" accept="image/*" on:change=move |ev| with_picked_file(&ev, upload_cover)/>
                </label>
                <Show when=move || image.with(Option::is_some)>
                    <img class="news-editor__preview" src=move || image.get().unwrap_or_default()/>
                </Show>
                <label>
                    "Body (HTML)"
                    <textarea
                        rows="12"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label>
                    "Insert image into body"
                    <input type="file" accept="image/*" on:change=move |ev| with_picked_file(&ev, upload_inline)/>
                </label>
                <button class="btn" type="submit" disabled=move || busy.get() || uploading.get()>
                    {move || if uploading.get() { "Uploading..." } else if editing { "Update News" } else { "Publish" }}
                </button>
            </form>
        </section>
    }
}

/// Hand the first file chosen in a file input to `use_file`.
fn with_picked_file(ev: &leptos::ev::Event, use_file: impl FnOnce(UploadFile)) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
            return;
        };
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            use_file(UploadFile::new(file));
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (ev, use_file);
    }
}
