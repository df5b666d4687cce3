//! Deliverit record types and the list requests that return them.
//!
//! # Overview
//!
//! - [`Store`] and [`stores_request`]: the stores reachable with a credential
//! - [`Order`], [`OrderDetail`] and [`orders_request`]: a store's orders in a date range
//!
//! Records mirror the upstream JSON field names. Numeric-looking text
//! fields such as quantities and prices stay as `String` in their upstream
//! formatting; no conversion is attempted.
//!
//! Both list requests carry the session credential as the `key` and `token`
//! query parameters.

mod order;
mod store;

pub use order::{
    orders_request, Order, OrderDetail, OrderTimestampError, Orders, ORDER_TIMESTAMP_FORMAT,
};
pub use store::{stores_request, Store, Stores};

use serde::{Deserialize, Deserializer};

use crate::auth::SessionCredential;
use crate::clients::HttpRequestBuilder;

/// Adds the credential's `key` and `token` query parameters.
fn with_credential(builder: HttpRequestBuilder, credential: &SessionCredential) -> HttpRequestBuilder {
    builder
        .query_param("key", credential.key.to_string())
        .query_param("token", credential.token.as_str())
}

/// Deserializes `null` as the type's default value.
///
/// Applied to every record field, so an upstream `null` reads as an empty
/// string, zero or an empty list.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
