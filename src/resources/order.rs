//! Order records, order timestamps, and the orders list request.

use std::time::UNIX_EPOCH;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::auth::SessionCredential;
use crate::clients::HttpRequest;
use crate::config::{DeliveritConfig, Endpoint};
use crate::resources::{null_as_default, with_credential, Store};

/// chrono pattern for `"<OrderDate> <InTime>"`, e.g. `18/07/2019 3:04 PM`.
pub const ORDER_TIMESTAMP_FORMAT: &str = "%d/%m/%Y %I:%M %p";

/// Error returned when an order's date and time fields cannot be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Failed to parse order timestamp '{value}': {source}")]
pub struct OrderTimestampError {
    /// The combined `"<OrderDate> <InTime>"` text that failed to parse.
    pub value: String,
    /// The underlying chrono error.
    pub source: chrono::ParseError,
}

/// An order placed at a store.
///
/// All fields are upstream text. `order_date` is `DD/MM/YYYY` and `in_time`
/// a 12-hour clock time such as `3:04 PM`; see [`Order::created_at`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    /// The store the order belongs to.
    #[serde(rename = "StoreID", deserialize_with = "null_as_default")]
    pub store_id: String,

    /// The upstream order identifier.
    #[serde(rename = "OrderID", deserialize_with = "null_as_default")]
    pub order_id: String,

    /// The order date, `DD/MM/YYYY`.
    #[serde(rename = "OrderDate", deserialize_with = "null_as_default")]
    pub order_date: String,

    /// The time the order was taken, `h:mm AM|PM`.
    #[serde(rename = "InTime", deserialize_with = "null_as_default")]
    pub in_time: String,

    /// The amount paid, as formatted upstream.
    #[serde(rename = "AmountPaid", deserialize_with = "null_as_default")]
    pub amount_paid: String,

    /// The order lines. `null` upstream decodes as an empty list.
    #[serde(rename = "OrderDetail", deserialize_with = "null_as_default")]
    pub details: Vec<OrderDetail>,
}

/// A single line of an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderDetail {
    /// Description of the item.
    #[serde(rename = "OrderDetail", deserialize_with = "null_as_default")]
    pub description: String,

    /// Quantity, as formatted upstream.
    #[serde(rename = "Qty", deserialize_with = "null_as_default")]
    pub quantity: String,

    /// Unit sell price, as formatted upstream.
    #[serde(rename = "UnitSell", deserialize_with = "null_as_default")]
    pub unit_price: String,
}

/// The orders returned by one list call, in upstream order.
pub type Orders = Vec<Order>;

impl Order {
    /// Parses the order's date and time into a UTC timestamp.
    ///
    /// The upstream fields carry no zone, so the wall-clock time is taken
    /// as UTC.
    ///
    /// # Errors
    ///
    /// Returns [`OrderTimestampError`] if `"<order_date> <in_time>"` does
    /// not match [`ORDER_TIMESTAMP_FORMAT`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use chrono::{TimeZone, Utc};
    /// use deliverit_api::Order;
    ///
    /// let order = Order {
    ///     order_date: "18/07/2019".to_string(),
    ///     in_time: "3:04 PM".to_string(),
    ///     ..Default::default()
    /// };
    ///
    /// assert_eq!(
    ///     order.try_created_at().unwrap(),
    ///     Utc.with_ymd_and_hms(2019, 7, 18, 15, 4, 0).unwrap()
    /// );
    /// ```
    pub fn try_created_at(&self) -> Result<DateTime<Utc>, OrderTimestampError> {
        let value = format!("{} {}", self.order_date, self.in_time);
        match NaiveDateTime::parse_from_str(&value, ORDER_TIMESTAMP_FORMAT) {
            Ok(naive) => Ok(Utc.from_utc_datetime(&naive)),
            Err(source) => Err(OrderTimestampError { value, source }),
        }
    }

    /// Returns the order timestamp, or the Unix epoch if it cannot be parsed.
    ///
    /// An epoch result is ambiguous: it is also what a genuine
    /// `01/01/1970 12:00 AM` order yields. Use [`Order::try_created_at`] to
    /// tell a parse failure apart.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.try_created_at()
            .unwrap_or_else(|_| DateTime::<Utc>::from(UNIX_EPOCH))
    }
}

/// Builds the orders list request for `store` between two dates.
///
/// `start_date` and `end_date` are passed through verbatim.
#[must_use]
pub fn orders_request(
    config: &DeliveritConfig,
    credential: &SessionCredential,
    store: &Store,
    start_date: &str,
    end_date: &str,
) -> HttpRequest {
    let builder = HttpRequest::builder(Endpoint::Orders, config.path(Endpoint::Orders))
        .query_param("storeid", store.id.to_string())
        .query_param("startdate", start_date)
        .query_param("enddate", end_date);
    with_credential(builder, credential).build()
}
