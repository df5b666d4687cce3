//! HTTP request type for the Deliverit API.
//!
//! This module provides the [`HttpRequest`] type and its builder. Every
//! Deliverit operation is a GET without a body, so a request is fully
//! described by its endpoint, path, query parameters and headers.

use std::collections::BTreeMap;

use reqwest::Url;

use crate::config::{BaseUrl, Endpoint};

/// A GET request to be sent to the Deliverit API.
///
/// Query parameters are kept sorted by key, so the encoded query string is
/// deterministic for a given set of parameters.
///
/// # Example
///
/// ```rust
/// use deliverit_api::{Endpoint, HttpRequest};
///
/// let request = HttpRequest::builder(Endpoint::Stores, "reports/v1.1/api/web/v1/stores")
///     .query_param("key", "1")
///     .query_param("token", "t")
///     .build();
///
/// assert_eq!(request.query.len(), 2);
/// assert_eq!(request.headers.get("Accept").map(String::as_str), Some("application/json"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    /// The logical endpoint this request addresses.
    pub endpoint: Endpoint,
    /// The resource path, replacing the base URL's path.
    pub path: String,
    /// Query parameters appended to the URL.
    pub query: BTreeMap<String, String>,
    /// Headers sent with the request.
    pub headers: BTreeMap<String, String>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(endpoint: Endpoint, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(endpoint, path)
    }

    /// Resolves the full URL of this request against `base`.
    #[must_use]
    pub fn url(&self, base: &BaseUrl) -> Url {
        let mut url = base.with_path(&self.path);
        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &self.query {
                pairs.append_pair(key, value);
            }
        }
        url
    }
}

/// Builder for constructing [`HttpRequest`] instances.
///
/// `Accept: application/json` is set on every request.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    endpoint: Endpoint,
    path: String,
    query: BTreeMap<String, String>,
    headers: BTreeMap<String, String>,
}

impl HttpRequestBuilder {
    fn new(endpoint: Endpoint, path: impl Into<String>) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Accept".to_string(), "application/json".to_string());

        Self {
            endpoint,
            path: path.into(),
            query: BTreeMap::new(),
            headers,
        }
    }

    /// Adds a single query parameter, replacing any earlier value for `key`.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Adds a single header, replacing any earlier value for `key`.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Builds the [`HttpRequest`].
    #[must_use]
    pub fn build(self) -> HttpRequest {
        HttpRequest {
            endpoint: self.endpoint,
            path: self.path,
            query: self.query,
            headers: self.headers,
        }
    }
}
