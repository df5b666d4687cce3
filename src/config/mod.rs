//! Configuration types for the Deliverit API client.
//!
//! # Overview
//!
//! - [`DeliveritConfig`]: The configuration applied to every call a client makes
//! - [`DeliveritConfigBuilder`]: A builder for constructing [`DeliveritConfig`] instances
//! - [`BaseUrl`]: A validated base URL newtype
//! - [`Endpoint`]: The logical identity of each upstream resource
//!
//! Every field has a default matching the production service, so the
//! builder only needs to be touched to point the client somewhere else
//! (for example, at a mock server in tests).
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use deliverit_api::{BaseUrl, DeliveritConfig};
//!
//! let config = DeliveritConfig::builder()
//!     .base_url(BaseUrl::new("https://cloud.deliverit.com.au").unwrap())
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.timeout(), Duration::from_secs(10));
//! ```

mod endpoint;
mod newtypes;

pub use endpoint::Endpoint;
pub use newtypes::BaseUrl;

use std::time::Duration;

use crate::error::ConfigError;

/// Default timeout applied to each call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default number of redirect hops followed before a call is abandoned.
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Configuration for a Deliverit API client.
///
/// # Thread Safety
///
/// `DeliveritConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct DeliveritConfig {
    base_url: BaseUrl,
    auth_path: String,
    stores_path: String,
    orders_path: String,
    timeout: Duration,
    max_redirects: usize,
    user_agent_prefix: Option<String>,
}

impl DeliveritConfig {
    /// Creates a new builder for constructing a `DeliveritConfig`.
    #[must_use]
    pub fn builder() -> DeliveritConfigBuilder {
        DeliveritConfigBuilder::new()
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the resource path configured for `endpoint`.
    #[must_use]
    pub fn path(&self, endpoint: Endpoint) -> &str {
        match endpoint {
            Endpoint::Auths => &self.auth_path,
            Endpoint::Stores => &self.stores_path,
            Endpoint::Orders => &self.orders_path,
        }
    }

    /// Returns the timeout applied to each call.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the maximum number of redirect hops followed per call.
    #[must_use]
    pub const fn max_redirects(&self) -> usize {
        self.max_redirects
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

impl Default for DeliveritConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            auth_path: Endpoint::Auths.default_path().to_string(),
            stores_path: Endpoint::Stores.default_path().to_string(),
            orders_path: Endpoint::Orders.default_path().to_string(),
            timeout: DEFAULT_TIMEOUT,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            user_agent_prefix: None,
        }
    }
}

// The default host constant always parses.
fn default_base_url() -> BaseUrl {
    BaseUrl::new(BaseUrl::DEFAULT).expect("default base URL is valid")
}

// Verify DeliveritConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DeliveritConfig>();
};

/// Builder for constructing [`DeliveritConfig`] instances.
///
/// # Defaults
///
/// - `base_url`: `https://cloud.deliverit.com.au`
/// - `auth_path`, `stores_path`, `orders_path`: the production resource paths
/// - `timeout`: 30 seconds
/// - `max_redirects`: 10
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use deliverit_api::{BaseUrl, DeliveritConfig};
///
/// let config = DeliveritConfig::builder()
///     .base_url(BaseUrl::new("http://127.0.0.1:9000").unwrap())
///     .orders_path("v2/orders")
///     .user_agent_prefix("Reporter/2.1")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct DeliveritConfigBuilder {
    base_url: Option<BaseUrl>,
    auth_path: Option<String>,
    stores_path: Option<String>,
    orders_path: Option<String>,
    timeout: Option<Duration>,
    max_redirects: Option<usize>,
    user_agent_prefix: Option<String>,
}

impl DeliveritConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the path of the login resource.
    #[must_use]
    pub fn auth_path(mut self, path: impl Into<String>) -> Self {
        self.auth_path = Some(path.into());
        self
    }

    /// Sets the path of the stores resource.
    #[must_use]
    pub fn stores_path(mut self, path: impl Into<String>) -> Self {
        self.stores_path = Some(path.into());
        self
    }

    /// Sets the path of the orders resource.
    #[must_use]
    pub fn orders_path(mut self, path: impl Into<String>) -> Self {
        self.orders_path = Some(path.into());
        self
    }

    /// Sets the timeout applied to each call, redirect hops included.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the maximum number of redirect hops followed per call.
    #[must_use]
    pub const fn max_redirects(mut self, max: usize) -> Self {
        self.max_redirects = Some(max);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`DeliveritConfig`], validating every field.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::EmptyResourcePath`] if a resource path is empty
    /// - [`ConfigError::ZeroTimeout`] if the timeout is zero
    pub fn build(self) -> Result<DeliveritConfig, ConfigError> {
        let defaults = DeliveritConfig::default();

        let auth_path = resolve_path(self.auth_path, Endpoint::Auths)?;
        let stores_path = resolve_path(self.stores_path, Endpoint::Stores)?;
        let orders_path = resolve_path(self.orders_path, Endpoint::Orders)?;

        let timeout = self.timeout.unwrap_or(defaults.timeout);
        if timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(DeliveritConfig {
            base_url: self.base_url.unwrap_or(defaults.base_url),
            auth_path,
            stores_path,
            orders_path,
            timeout,
            max_redirects: self.max_redirects.unwrap_or(defaults.max_redirects),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

fn resolve_path(path: Option<String>, endpoint: Endpoint) -> Result<String, ConfigError> {
    match path {
        Some(path) if path.trim().is_empty() => Err(ConfigError::EmptyResourcePath {
            endpoint: endpoint.name(),
        }),
        Some(path) => Ok(path),
        None => Ok(endpoint.default_path().to_string()),
    }
}
