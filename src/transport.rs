//! HTTP transport seam
//!
//! [`ApiClient`](crate::ApiClient) builds an [`ApiRequest`] per operation and
//! hands it to a [`Transport`]. [`HttpTransport`] is the real one; tests
//! substitute their own.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, Url};

use crate::config::ApiConfig;
use crate::error::{ClientError, ClientResult};

/// One request against the service, relative to the base URL
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Unencoded path segments, e.g. `["books", "category", "웹개발"]`
    pub segments: Vec<String>,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn new(method: Method, segments: &[&str]) -> Self {
        Self {
            method,
            segments: segments.iter().map(|s| s.to_string()).collect(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(segments: &[&str]) -> Self {
        Self::new(Method::GET, segments)
    }

    pub fn post(segments: &[&str]) -> Self {
        Self::new(Method::POST, segments)
    }

    pub fn put(segments: &[&str]) -> Self {
        Self::new(Method::PUT, segments)
    }

    pub fn delete(segments: &[&str]) -> Self {
        Self::new(Method::DELETE, segments)
    }

    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Path relative to the base URL, for logs and matching
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }
}

/// Raw response as seen by the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        let status_text = reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or_default()
            .to_string();
        Self {
            status,
            status_text,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_no_content(&self) -> bool {
        self.status == 204
    }
}

/// Sends one request, returns the raw response. Non-success statuses are
/// not errors at this level.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> ClientResult<ApiResponse>;
}

/// `reqwest`-backed transport against a fixed base URL
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(config: &ApiConfig) -> ClientResult<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(config.base_url.clone()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    /// Base URL with the request's segments appended, each percent-encoded
    pub fn url_for(&self, request: &ApiRequest) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(&request.segments);
        Ok(url)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> ClientResult<ApiResponse> {
        let url = self.url_for(&request)?;

        let mut builder = self.client.request(request.method.clone(), url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        Ok(ApiResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport(base: &str) -> HttpTransport {
        HttpTransport::new(&ApiConfig {
            base_url: base.to_string(),
            timeout_secs: None,
        })
        .unwrap()
    }

    #[test]
    fn url_keeps_base_path_prefix() {
        let t = transport("http://localhost:8080/api");
        let url = t.url_for(&ApiRequest::get(&["books", "7"])).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/books/7");

        let trailing = transport("http://localhost:8080/api/");
        let url = trailing.url_for(&ApiRequest::get(&["users"])).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/users");
    }

    #[test]
    fn url_segments_are_percent_encoded() {
        let t = transport("http://localhost:8080/api");
        let url = t
            .url_for(&ApiRequest::get(&["books", "category", "C/C++ 기초"]))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/api/books/category/C%2FC++%20%EA%B8%B0%EC%B4%88"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = HttpTransport::new(&ApiConfig {
            base_url: "not a url".to_string(),
            timeout_secs: None,
        })
        .unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }

    #[test]
    fn response_status_ranges() {
        assert!(ApiResponse::new(200, "{}").is_success());
        assert!(ApiResponse::new(204, "").is_no_content());
        assert!(!ApiResponse::new(302, "").is_success());
        assert_eq!(ApiResponse::new(404, "").status_text, "Not Found");
    }

    #[test]
    fn request_path_joins_segments() {
        let req = ApiRequest::get(&["books", "search", "title"]).with_query("title", "rust");
        assert_eq!(req.path(), "/books/search/title");
        assert_eq!(req.query, vec![("title".to_string(), "rust".to_string())]);
    }
}
