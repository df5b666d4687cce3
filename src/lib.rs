//! # Deliverit API Rust Client
//!
//! An async client for the Deliverit point-of-sale cloud reporting service.
//!
//! ## Overview
//!
//! The service exposes three read operations, used in sequence:
//!
//! 1. [`DeliveritClient::authenticate`] exchanges a username and password
//!    (HTTP Basic auth) for a [`SessionCredential`]
//! 2. [`DeliveritClient::list_stores`] lists the [`Store`]s reachable with it
//! 3. [`DeliveritClient::list_orders`] lists a store's [`Order`]s in a date range
//!
//! Each operation makes one attempt and returns either a fully decoded
//! value or exactly one [`DeliveritError`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use deliverit_api::DeliveritClient;
//!
//! let client = DeliveritClient::new()?;
//!
//! let credential = client.authenticate("user", "secret").await?;
//! let stores = client.list_stores(&credential).await?;
//! let orders = client
//!     .list_orders(&credential, &stores[0], "2019-07-01", "2019-07-31")
//!     .await?;
//!
//! for order in &orders {
//!     println!("{} at {}", order.order_id, order.created_at());
//! }
//! ```
//!
//! ## Configuration
//!
//! The base URL, resource paths, timeout (30 seconds by default) and
//! redirect limit are set once through [`DeliveritConfig`]:
//!
//! ```rust
//! use std::time::Duration;
//! use deliverit_api::{BaseUrl, DeliveritClient, DeliveritConfig};
//!
//! let config = DeliveritConfig::builder()
//!     .base_url(BaseUrl::new("http://127.0.0.1:8080").unwrap())
//!     .timeout(Duration::from_secs(5))
//!     .build()
//!     .unwrap();
//!
//! let client = DeliveritClient::with_config(config).unwrap();
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **One connection pool per client**: Clones of a client share it
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Immutable credentials**: The library never mutates or refreshes a credential

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod resources;

// Re-export public types at crate root for convenience
pub use auth::SessionCredential;
pub use config::{BaseUrl, DeliveritConfig, DeliveritConfigBuilder, Endpoint};
pub use error::ConfigError;

pub use clients::{
    DeliveritClient, DeliveritError, HttpClient, HttpRequest, HttpRequestBuilder, TransportError,
};

pub use resources::{Order, OrderDetail, OrderTimestampError, Orders, Store, Stores};
