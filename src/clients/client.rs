//! The Deliverit API client.
//!
//! This module provides [`DeliveritClient`], the caller-facing entry point
//! for the three read operations: authenticate, list stores and list orders.

use serde::de::DeserializeOwned;

use crate::auth::{auth_request, SessionCredential};
use crate::clients::errors::DeliveritError;
use crate::clients::http_client::HttpClient;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::decode_response;
use crate::config::DeliveritConfig;
use crate::error::ConfigError;
use crate::resources::{orders_request, stores_request, Orders, Store, Stores};

/// Client for the Deliverit point-of-sale cloud service.
///
/// Each operation sends one request (following redirects), waits for the
/// response within the configured timeout, and returns a fully decoded value
/// or a single [`DeliveritError`]. Nothing is retried or cached.
///
/// # Thread Safety
///
/// `DeliveritClient` is `Clone + Send + Sync`. Clones share one connection
/// pool, and no call mutates shared state, so calls may run concurrently.
///
/// # Example
///
/// ```rust,ignore
/// use deliverit_api::DeliveritClient;
///
/// let client = DeliveritClient::new()?;
///
/// let credential = client.authenticate("user", "secret").await?;
/// let stores = client.list_stores(&credential).await?;
///
/// for store in &stores {
///     let orders = client
///         .list_orders(&credential, store, "2019-07-01", "2019-07-31")
///         .await?;
///     println!("{}: {} orders", store.name, orders.len());
/// }
/// ```
#[derive(Clone, Debug)]
pub struct DeliveritClient {
    /// The transport shared by all calls.
    http_client: HttpClient,
    /// The configuration the client was built with.
    config: DeliveritConfig,
}

// Verify DeliveritClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DeliveritClient>();
};

impl DeliveritClient {
    /// Creates a client for the production service with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the HTTP client cannot be created.
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_config(DeliveritConfig::default())
    }

    /// Creates a client from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the HTTP client cannot be created.
    pub fn with_config(config: DeliveritConfig) -> Result<Self, ConfigError> {
        let http_client = HttpClient::new(&config)?;
        Ok(Self {
            http_client,
            config,
        })
    }

    /// Returns the configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &DeliveritConfig {
        &self.config
    }

    /// Logs in with HTTP Basic auth and returns the issued session credential.
    ///
    /// Empty usernames or passwords are sent as-is; only the upstream decides
    /// whether they are acceptable.
    ///
    /// # Errors
    ///
    /// Returns a [`DeliveritError`] classified per the response policy; a
    /// rejected login is [`DeliveritError::UpstreamStatus`].
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<SessionCredential, DeliveritError> {
        let request = auth_request(&self.config, username, password);
        self.execute(&request).await
    }

    /// Lists the stores reachable with `credential`.
    ///
    /// # Errors
    ///
    /// Returns a [`DeliveritError`] classified per the response policy.
    pub async fn list_stores(
        &self,
        credential: &SessionCredential,
    ) -> Result<Stores, DeliveritError> {
        let request = stores_request(&self.config, credential);
        self.execute(&request).await
    }

    /// Lists the orders of `store` between `start_date` and `end_date`.
    ///
    /// The dates are sent verbatim. The upstream expects `YYYY-MM-DD`, but
    /// the format is not checked here.
    ///
    /// # Errors
    ///
    /// Returns a [`DeliveritError`] classified per the response policy.
    pub async fn list_orders(
        &self,
        credential: &SessionCredential,
        store: &Store,
        start_date: &str,
        end_date: &str,
    ) -> Result<Orders, DeliveritError> {
        let request = orders_request(&self.config, credential, store, start_date, end_date);
        self.execute(&request).await
    }

    async fn execute<T: DeserializeOwned + Default>(
        &self,
        request: &HttpRequest,
    ) -> Result<T, DeliveritError> {
        let response = self.http_client.send(request).await?;
        decode_response(request.endpoint, response).await
    }
}
