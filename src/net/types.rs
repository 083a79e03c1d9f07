//! Wire DTOs for the news REST API.
//!
//! DESIGN
//! ======
//! The API is backed by a document store, so identifiers arrive as `_id` and
//! field names are camelCase. Every struct here accepts that shape and
//! exposes snake_case Rust fields. Envelope types (`{ "news": ... }`) live
//! in `api` and are unwrapped by each call's extractor.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use super::error::FormError;
use crate::state::claims::Role;

/// A news category. The session keeps a read-through cache of these.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, alias = "count")]
    pub article_count: u64,
}

/// Publication state of an article.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsStatus {
    Pending,
    Active,
    Deactive,
}

impl NewsStatus {
    pub const ALL: [NewsStatus; 3] = [NewsStatus::Pending, NewsStatus::Active, NewsStatus::Deactive];

    pub fn as_str(self) -> &'static str {
        match self {
            NewsStatus::Pending => "pending",
            NewsStatus::Active => "active",
            NewsStatus::Deactive => "deactive",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub sub_title: String,
    /// Article body as HTML.
    #[serde(default)]
    pub description: String,
    /// Cover image URL.
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
    pub status: NewsStatus,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub writer_name: Option<String>,
}

/// One page of articles plus pagination metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsPage {
    #[serde(default)]
    pub news: Vec<NewsArticle>,
    #[serde(default)]
    pub total_items: u64,
    #[serde(default)]
    pub total_pages: u64,
}

impl NewsPage {
    /// Fill in metadata for servers that return a bare, unpaginated list.
    pub fn normalized(mut self) -> Self {
        if self.total_items == 0 && !self.news.is_empty() {
            self.total_items = self.news.len() as u64;
        }
        if self.total_pages == 0 && self.total_items > 0 {
            self.total_pages = 1;
        }
        self
    }
}

/// Counts by status, shown on the overview pages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NewsStats {
    pub total: usize,
    pub pending: usize,
    pub active: usize,
    pub deactive: usize,
}

impl NewsStats {
    pub fn from_articles(articles: &[NewsArticle]) -> Self {
        articles.iter().fold(Self { total: articles.len(), ..Self::default() }, |mut acc, a| {
            match a.status {
                NewsStatus::Pending => acc.pending += 1,
                NewsStatus::Active => acc.active += 1,
                NewsStatus::Deactive => acc.deactive += 1,
            }
            acc
        })
    }
}

/// Query parameters accepted by the paginated news list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewsQuery {
    pub page: u32,
    pub limit: u32,
    pub search: Option<String>,
    pub status: Option<NewsStatus>,
}

impl Default for NewsQuery {
    fn default() -> Self {
        Self { page: 1, limit: 5, search: None, status: None }
    }
}

impl NewsQuery {
    pub fn with_status(status: NewsStatus) -> Self {
        Self { status: Some(status), ..Self::default() }
    }

    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", self.page.max(1).to_string()), ("limit", self.limit.max(1).to_string())];
        if let Some(search) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            pairs.push(("search", search.to_owned()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_owned()));
        }
        pairs
    }
}

/// Fields submitted when creating or updating an article.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewsDraft {
    pub title: String,
    pub sub_title: String,
    pub description: String,
    /// Category identifier.
    pub category: String,
    /// Cover image URL, already uploaded.
    pub image: Option<String>,
}

impl NewsDraft {
    /// # Errors
    ///
    /// Returns the first missing required field.
    pub fn validate(&self) -> Result<(), FormError> {
        require("title", &self.title)?;
        require("description", &self.description)?;
        require("category", &self.category)
    }

    pub(crate) fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("title", self.title.trim().to_owned()),
            ("subTitle", self.sub_title.trim().to_owned()),
            ("description", self.description.clone()),
            ("category", self.category.clone()),
        ];
        if let Some(image) = self.image.as_deref().filter(|i| !i.is_empty()) {
            fields.push(("image", image.to_owned()));
        }
        fields
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Writer {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub role: Role,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub category: Option<String>,
}

fn default_active() -> bool {
    true
}

/// Article count per writer.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WriterNewsCount {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "newsCount")]
    pub count: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// # Errors
    ///
    /// Returns the first missing required field.
    pub fn validate(&self) -> Result<(), FormError> {
        require("email", &self.email)?;
        require("password", &self.password)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub category: String,
}

impl SignupForm {
    /// # Errors
    ///
    /// Returns the first missing required field.
    pub fn validate(&self) -> Result<(), FormError> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        require("password", &self.password)?;
        require("category", &self.category)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewWriter {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl Default for NewWriter {
    fn default() -> Self {
        Self { name: String::new(), email: String::new(), password: String::new(), role: Role::Writer }
    }
}

impl NewWriter {
    /// # Errors
    ///
    /// Returns the first missing required field.
    pub fn validate(&self) -> Result<(), FormError> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        require("password", &self.password)
    }
}

/// Partial writer update; absent fields are left unchanged server-side.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WriterUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl WriterUpdate {
    /// Update built from the manage-writer form. A blank password means
    /// "keep the current one" and is omitted.
    pub fn from_form(name: &str, password: &str, role: Role, is_active: bool) -> Self {
        Self {
            name: Some(name.trim().to_owned()),
            password: Some(password.to_owned()).filter(|p| !p.is_empty()),
            role: Some(role),
            is_active: Some(is_active),
        }
    }

    pub fn active(is_active: bool) -> Self {
        Self { is_active: Some(is_active), ..Self::default() }
    }
}

/// `{ message, token }` returned by login and signup.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub message: String,
    pub token: String,
}

/// `{ message }` returned by mutations.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Response contract of the editor's image uploader.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct EditorUploadResponse {
    #[serde(default)]
    pub files: Vec<String>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl EditorUploadResponse {
    pub fn is_success(&self) -> bool {
        !self.files.is_empty()
    }

    pub fn message(&self) -> &str {
        self.msg
            .as_deref()
            .or(self.message.as_deref())
            .unwrap_or("Upload completed")
    }
}

fn require(field: &'static str, value: &str) -> Result<(), FormError> {
    if value.trim().is_empty() { Err(FormError::Missing(field)) } else { Ok(()) }
}
