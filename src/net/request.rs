//! Request description and the single transport path.
//!
//! DESIGN
//! ======
//! Every endpoint is described as data (`ApiRequest`) paired with a typed
//! extractor (`ApiCall`). Building a call is pure and unit-tested; only
//! `ApiCall::send` touches the network, and only in the `csr` build. Calls
//! are fire-once: no retries, no backoff, no deduplication.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use super::cancel::CancelToken;
use super::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// A file picked in the browser, ready for multipart upload.
#[derive(Clone, Debug)]
pub struct UploadFile {
    pub name: String,
    #[cfg(feature = "csr")]
    file: web_sys::File,
}

impl UploadFile {
    #[cfg(feature = "csr")]
    pub fn new(file: web_sys::File) -> Self {
        Self { name: file.name(), file }
    }

    #[cfg(all(test, not(feature = "csr")))]
    pub(crate) fn named(name: &str) -> Self {
        Self { name: name.to_owned() }
    }
}

impl PartialEq for UploadFile {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormValue {
    Text(String),
    File(UploadFile),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Body {
    Empty,
    Json(serde_json::Value),
    Form(Vec<(String, FormValue)>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// Raw bearer token; sent as `Authorization: Bearer <token>`.
    pub bearer: Option<String>,
    pub body: Body,
}

impl ApiRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self { method, url: url.into(), bearer: None, body: Body::Empty }
    }

    #[must_use]
    pub fn bearer(mut self, token: &str) -> Self {
        self.bearer = Some(token.to_owned());
        self
    }

    #[must_use]
    pub fn query(mut self, pairs: &[(&str, String)]) -> Self {
        if pairs.is_empty() {
            return self;
        }
        let encoded: Vec<String> = pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect();
        let sep = if self.url.contains('?') { '&' } else { '?' };
        self.url = format!("{}{sep}{}", self.url, encoded.join("&"));
        self
    }

    #[must_use]
    pub fn json(mut self, value: serde_json::Value) -> Self {
        self.body = Body::Json(value);
        self
    }

    #[must_use]
    pub fn form(mut self, fields: Vec<(String, FormValue)>) -> Self {
        self.body = Body::Form(fields);
        self
    }

    pub fn authorization_header(&self) -> Option<String> {
        self.bearer.as_deref().map(|token| format!("Bearer {token}"))
    }
}

/// A request plus the mapping from its response envelope `E` to `T`.
pub struct ApiCall<E, T = E> {
    request: ApiRequest,
    extract: fn(E) -> T,
    _envelope: PhantomData<fn() -> E>,
}

impl<E, T> fmt::Debug for ApiCall<E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCall").field("request", &self.request).finish_non_exhaustive()
    }
}

impl<E: DeserializeOwned> ApiCall<E, E> {
    pub fn new(request: ApiRequest) -> Self {
        Self { request, extract: std::convert::identity, _envelope: PhantomData }
    }
}

impl<E: DeserializeOwned, T> ApiCall<E, T> {
    pub fn mapped(request: ApiRequest, extract: fn(E) -> T) -> Self {
        Self { request, extract, _envelope: PhantomData }
    }

    pub fn request(&self) -> &ApiRequest {
        &self.request
    }

    /// Decode a response body into the caller-facing value.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Decode` when the body does not match the envelope.
    pub fn parse(&self, body: serde_json::Value) -> Result<T, ApiError> {
        let envelope = serde_json::from_value::<E>(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok((self.extract)(envelope))
    }

    /// Execute the request once.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Cancelled` if `cancel` fired while the request was in
    /// flight, `ApiError::Status` for non-2xx responses, and `Network`/`Decode`
    /// for transport and shape failures.
    pub async fn send(self, cancel: &CancelToken) -> Result<T, ApiError> {
        cancel.check()?;
        #[cfg(feature = "csr")]
        {
            let method = self.request.method;
            let url = self.request.url.clone();
            log::debug!("api {method:?} {url}");
            let result = async {
                let body = transport::execute(&self.request, cancel).await?;
                cancel.check()?;
                self.parse(body)
            }
            .await;
            if let Err(err) = &result {
                if !err.is_cancelled() {
                    log::warn!("api {method:?} {url} failed: {err}");
                }
            }
            result
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "csr")]
mod transport {
    use gloo_net::http::{Request, RequestBuilder, Response};
    use serde::Deserialize;

    use super::{ApiRequest, Body, FormValue, Method};
    use crate::net::cancel::CancelToken;
    use crate::net::error::ApiError;

    #[derive(Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }

    pub(super) async fn execute(request: &ApiRequest, cancel: &CancelToken) -> Result<serde_json::Value, ApiError> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        if let Some(header) = request.authorization_header() {
            builder = builder.header("Authorization", &header);
        }
        let response = dispatch(builder, &request.body).await?;
        cancel.check()?;

        if !response.ok() {
            let message = response.json::<ErrorBody>().await.ok().and_then(|b| b.message);
            return Err(ApiError::Status { status: response.status(), message });
        }
        let text = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        if text.trim().is_empty() {
            return Ok(serde_json::Value::Object(serde_json::Map::new()));
        }
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn dispatch(builder: RequestBuilder, body: &Body) -> Result<Response, ApiError> {
        let sent = match body {
            Body::Empty => builder.send().await,
            Body::Json(value) => builder
                .json(value)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await,
            Body::Form(fields) => builder
                .body(form_data(fields)?)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await,
        };
        sent.map_err(|e| ApiError::Network(e.to_string()))
    }

    fn form_data(fields: &[(String, FormValue)]) -> Result<web_sys::FormData, ApiError> {
        let js_err = |e: wasm_bindgen::JsValue| ApiError::Network(format!("{e:?}"));
        let form = web_sys::FormData::new().map_err(js_err)?;
        for (name, value) in fields {
            match value {
                FormValue::Text(text) => form.append_with_str(name, text).map_err(js_err)?,
                FormValue::File(upload) => form
                    .append_with_blob_and_filename(name, &upload.file, &upload.name)
                    .map_err(js_err)?,
            }
        }
        Ok(form)
    }
}
