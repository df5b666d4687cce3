//! HTTP transport for Deliverit API communication.
//!
//! This module provides the [`HttpClient`] type, which sends a single
//! [`HttpRequest`] and follows its redirects with authorization
//! reattachment. It never retries.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Response, Url};

use crate::clients::errors::{DeliveritError, TransportError};
use crate::clients::http_request::HttpRequest;
use crate::clients::redirect;
use crate::config::{BaseUrl, DeliveritConfig};
use crate::error::ConfigError;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP transport for the Deliverit API.
///
/// One `HttpClient` owns one connection pool. Cloning it is cheap and the
/// clones share that pool.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`; each call builds its own request state, so
/// concurrent calls never observe each other.
#[derive(Clone, Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Scheme, host and port every request is sent to.
    base_url: BaseUrl,
    /// Upper bound on a whole call, redirect hops included.
    timeout: Duration,
    /// Maximum number of redirect hops followed per call.
    max_redirects: usize,
    /// Headers included in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new transport from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the underlying reqwest client
    /// cannot be created (e.g., TLS initialization failure).
    pub fn new(config: &DeliveritConfig) -> Result<Self, ConfigError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Deliverit API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);

        // Redirects are followed by hand so Authorization can be reattached.
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .redirect(reqwest::redirect::Policy::none())
            .timeout(config.timeout())
            .build()
            .map_err(|e| ConfigError::HttpClient {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url().clone(),
            timeout: config.timeout(),
            max_redirects: config.max_redirects(),
            default_headers,
        })
    }

    /// Sends `request` and returns the final response of its redirect chain.
    ///
    /// The response status is not inspected beyond redirect handling and
    /// the body is not read.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveritError::Transport`] if no final response is
    /// obtained: network failure, timeout, an invalid header, an invalid
    /// redirect location, or too many redirects.
    pub async fn send(&self, request: &HttpRequest) -> Result<Response, DeliveritError> {
        let endpoint = request.endpoint;
        let transport = |source: TransportError| DeliveritError::Transport { endpoint, source };

        let url = request.url(&self.base_url);
        let headers = self.build_headers(request).map_err(transport)?;

        match tokio::time::timeout(self.timeout, self.follow_redirects(url, headers)).await {
            Ok(result) => result.map_err(transport),
            Err(_) => Err(transport(TransportError::Timeout {
                after: self.timeout,
            })),
        }
    }

    async fn follow_redirects(
        &self,
        mut url: Url,
        mut headers: HeaderMap,
    ) -> Result<Response, TransportError> {
        let original = headers.clone();
        let mut hops = 0;

        loop {
            tracing::debug!(
                "Sending request to Deliverit {}{}",
                url.host_str().unwrap_or_default(),
                url.path()
            );

            let response = self
                .client
                .get(url.clone())
                .headers(headers.clone())
                .send()
                .await?;

            let Some(next) = redirect::next_hop(&url, &response)? else {
                return Ok(response);
            };

            hops += 1;
            if hops > self.max_redirects {
                tracing::warn!(
                    "Abandoning Deliverit request after {} redirects",
                    self.max_redirects
                );
                return Err(TransportError::TooManyRedirects {
                    max: self.max_redirects,
                });
            }

            tracing::debug!(
                "Following {} redirect to {}{}",
                response.status(),
                next.host_str().unwrap_or_default(),
                next.path()
            );

            headers = redirect::headers_for_hop(&url, &next, &headers, &original);
            url = next;
        }
    }

    /// Merges default and request headers into a sendable header map.
    fn build_headers(&self, request: &HttpRequest) -> Result<HeaderMap, TransportError> {
        let mut headers = HeaderMap::new();
        let merged = self.default_headers.iter().chain(request.headers.iter());

        for (name, value) in merged {
            let invalid = || TransportError::InvalidHeader { name: name.clone() };
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
            let header_value = HeaderValue::from_str(value).map_err(|_| invalid())?;
            headers.insert(header_name, header_value);
        }

        Ok(headers)
    }
}
