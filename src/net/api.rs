//! REST API calls for the news backend and the image host.
//!
//! Each method returns an `ApiCall` describing one request; pages `send` it
//! with their view's `CancelToken`. Authenticated endpoints take the raw
//! bearer token from the session store.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` instead of panics, so an unexpected
//! response shape surfaces as `ApiError::Decode` rather than breaking the
//! view. Pages decide how to present failures (see `state::notice`).

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Deserialize;

use super::error::ApiError;
use super::request::{ApiCall, ApiRequest, FormValue, Method, UploadFile};
use super::types::{
    AuthResponse, Category, EditorUploadResponse, LoginForm, MessageResponse, NewWriter, NewsArticle, NewsDraft,
    NewsPage, NewsQuery, NewsStatus, SignupForm, Writer, WriterNewsCount, WriterUpdate,
};
use crate::config::{AppConfig, AssetHostConfig};

const ASSET_HOST_ORIGIN: &str = "https://api.cloudinary.com/v1_1";

// Response envelopes. Their fields are unwrapped by each call's extractor.

#[derive(Deserialize)]
pub struct NewsEnvelope {
    news: NewsArticle,
}

#[derive(Deserialize)]
pub struct CategoriesEnvelope {
    #[serde(default)]
    categories: Vec<Category>,
}

#[derive(Deserialize)]
pub struct WritersEnvelope {
    #[serde(default)]
    writers: Vec<Writer>,
}

#[derive(Deserialize)]
pub struct WriterEnvelope {
    writer: Writer,
}

#[derive(Deserialize)]
pub struct WriterStatsEnvelope {
    #[serde(default)]
    stats: Vec<WriterNewsCount>,
}

#[derive(Deserialize)]
pub struct ImageEnvelope {
    url: String,
}

#[derive(Deserialize)]
pub struct AssetEnvelope {
    secure_url: String,
}

/// Request factory bound to one API origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
    asset_host: Option<AssetHostConfig>,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self { base_url: config.api_base_url.clone(), asset_host: config.asset_host.clone() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authed(&self, method: Method, path: &str, token: &str) -> ApiRequest {
        ApiRequest::new(method, self.url(path)).bearer(token)
    }

    // ---- session -----------------------------------------------------------

    pub fn login(&self, form: &LoginForm) -> ApiCall<AuthResponse> {
        ApiCall::new(ApiRequest::new(Method::Post, self.url("/api/login")).json(to_json(form)))
    }

    pub fn signup(&self, form: &SignupForm) -> ApiCall<AuthResponse> {
        ApiCall::new(ApiRequest::new(Method::Post, self.url("/api/signup")).json(to_json(form)))
    }

    // ---- news --------------------------------------------------------------

    pub fn list_news(&self, token: &str, query: &NewsQuery) -> ApiCall<NewsPage> {
        ApiCall::mapped(self.authed(Method::Get, "/api/news", token).query(&query.to_pairs()), NewsPage::normalized)
    }

    pub fn get_news(&self, token: &str, news_id: &str) -> ApiCall<NewsEnvelope, NewsArticle> {
        ApiCall::mapped(self.authed(Method::Get, &news_path(news_id), token), |e: NewsEnvelope| e.news)
    }

    pub fn create_news(&self, token: &str, draft: &NewsDraft) -> ApiCall<MessageResponse, String> {
        let req = self.authed(Method::Post, "/api/news/add", token).form(text_fields(draft.form_fields()));
        ApiCall::mapped(req, message)
    }

    pub fn update_news(&self, token: &str, news_id: &str, draft: &NewsDraft) -> ApiCall<MessageResponse, String> {
        let path = format!("/api/news/update/{}", segment(news_id));
        let req = self.authed(Method::Put, &path, token).form(text_fields(draft.form_fields()));
        ApiCall::mapped(req, message)
    }

    pub fn delete_news(&self, token: &str, news_id: &str) -> ApiCall<MessageResponse, String> {
        let path = format!("/api/news/delete/{}", segment(news_id));
        ApiCall::mapped(self.authed(Method::Delete, &path, token), message)
    }

    pub fn update_news_status(&self, token: &str, news_id: &str, status: NewsStatus) -> ApiCall<MessageResponse, String> {
        let path = format!("/api/news/status-update/{}", segment(news_id));
        let req = self.authed(Method::Put, &path, token).json(serde_json::json!({ "status": status }));
        ApiCall::mapped(req, message)
    }

    // ---- categories --------------------------------------------------------

    /// Category names for pickers.
    pub fn list_category_names(&self) -> ApiCall<CategoriesEnvelope, Vec<Category>> {
        ApiCall::mapped(ApiRequest::new(Method::Get, self.url("/api/category/all-name")), categories)
    }

    /// Categories with article counts.
    pub fn list_categories(&self) -> ApiCall<CategoriesEnvelope, Vec<Category>> {
        ApiCall::mapped(ApiRequest::new(Method::Get, self.url("/api/category/all")), categories)
    }

    pub fn create_category(&self, token: &str, name: &str) -> ApiCall<MessageResponse, String> {
        let req = self
            .authed(Method::Post, "/api/category/add", token)
            .json(serde_json::json!({ "name": name.trim() }));
        ApiCall::mapped(req, message)
    }

    pub fn delete_category(&self, token: &str, category_id: &str) -> ApiCall<MessageResponse, String> {
        let path = format!("/api/category/delete/{}", segment(category_id));
        ApiCall::mapped(self.authed(Method::Delete, &path, token), message)
    }

    // ---- writers -----------------------------------------------------------

    pub fn list_writers(&self, token: &str) -> ApiCall<WritersEnvelope, Vec<Writer>> {
        ApiCall::mapped(self.authed(Method::Get, "/api/news/writers", token), |e: WritersEnvelope| e.writers)
    }

    pub fn writer_news_counts(&self, token: &str) -> ApiCall<WriterStatsEnvelope, Vec<WriterNewsCount>> {
        ApiCall::mapped(
            self.authed(Method::Get, "/api/news/writers/news-count", token),
            |e: WriterStatsEnvelope| e.stats,
        )
    }

    pub fn get_writer(&self, token: &str, writer_id: &str) -> ApiCall<WriterEnvelope, Writer> {
        let path = format!("/api/news/writers/{}", segment(writer_id));
        ApiCall::mapped(self.authed(Method::Get, &path, token), |e: WriterEnvelope| e.writer)
    }

    pub fn add_writer(&self, token: &str, writer: &NewWriter) -> ApiCall<MessageResponse, String> {
        let req = self.authed(Method::Post, "/api/news/writer/add", token).json(to_json(writer));
        ApiCall::mapped(req, message)
    }

    pub fn update_writer(&self, token: &str, writer_id: &str, update: &WriterUpdate) -> ApiCall<MessageResponse, String> {
        let path = format!("/api/news/writers/edit/{}", segment(writer_id));
        ApiCall::mapped(self.authed(Method::Put, &path, token).json(to_json(update)), message)
    }

    pub fn set_writer_active(&self, token: &str, writer_id: &str, is_active: bool) -> ApiCall<MessageResponse, String> {
        self.update_writer(token, writer_id, &WriterUpdate::active(is_active))
    }

    // ---- images ------------------------------------------------------------

    /// Upload through the backend; resolves to the stored image URL.
    pub fn upload_image(&self, token: &str, file: UploadFile) -> ApiCall<ImageEnvelope, String> {
        let req = self
            .authed(Method::Post, "/api/images/add", token)
            .form(vec![("file".to_owned(), FormValue::File(file))]);
        ApiCall::mapped(req, |e: ImageEnvelope| e.url)
    }

    /// Upload used by the rich-text editor's image button.
    pub fn upload_editor_image(&self, token: &str, file: UploadFile) -> ApiCall<EditorUploadResponse> {
        let req = self
            .authed(Method::Post, "/api/images/jodit/add", token)
            .form(vec![("files[0]".to_owned(), FormValue::File(file))]);
        ApiCall::new(req)
    }

    /// Unauthenticated direct upload to the third-party asset host.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::AssetHostUnconfigured` when no credentials were
    /// provided at build time.
    pub fn upload_to_asset_host(&self, file: UploadFile) -> Result<ApiCall<AssetEnvelope, String>, ApiError> {
        let host = self.asset_host.as_ref().ok_or(ApiError::AssetHostUnconfigured)?;
        let url = format!("{ASSET_HOST_ORIGIN}/{}/image/upload", segment(&host.cloud_name));
        let req = ApiRequest::new(Method::Post, url).form(vec![
            ("file".to_owned(), FormValue::File(file)),
            ("upload_preset".to_owned(), FormValue::Text(host.upload_preset.clone())),
            ("cloud_name".to_owned(), FormValue::Text(host.cloud_name.clone())),
        ]);
        Ok(ApiCall::mapped(req, |e: AssetEnvelope| e.secure_url))
    }
}

fn news_path(news_id: &str) -> String {
    format!("/api/news/{}", segment(news_id))
}

fn segment(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

fn message(resp: MessageResponse) -> String {
    resp.message
}

fn categories(envelope: CategoriesEnvelope) -> Vec<Category> {
    envelope.categories
}

fn text_fields(fields: Vec<(&'static str, String)>) -> Vec<(String, FormValue)> {
    fields
        .into_iter()
        .map(|(name, value)| (name.to_owned(), FormValue::Text(value)))
        .collect()
}

fn to_json<T: serde::Serialize>(value: &T) -> serde_json::Value {
    // Plain derive(Serialize) structs with string keys cannot fail.
    serde_json::to_value(value).unwrap_or(serde_json::Value::Null)
}
