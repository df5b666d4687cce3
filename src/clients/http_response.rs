//! Response decoding and error classification.
//!
//! The same policy applies to every Deliverit call:
//!
//! 1. A status other than exactly 200 fails with
//!    [`DeliveritError::UpstreamStatus`]; the body is never read.
//! 2. A 200 body that cannot be read in full fails with
//!    [`DeliveritError::BodyRead`].
//! 3. A body that is not the expected JSON shape fails with
//!    [`DeliveritError::Decode`]. A JSON `null` body decodes as the
//!    target's default value, such as an empty list.
//!
//! There is no partial success: the caller gets a fully decoded value or
//! exactly one error.

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::clients::errors::DeliveritError;
use crate::config::Endpoint;

/// Classifies `response` and decodes its body into `T`.
///
/// # Errors
///
/// Returns [`DeliveritError::UpstreamStatus`], [`DeliveritError::BodyRead`]
/// or [`DeliveritError::Decode`] as described in the module documentation.
pub async fn decode_response<T: DeserializeOwned + Default>(
    endpoint: Endpoint,
    response: Response,
) -> Result<T, DeliveritError> {
    check_status(endpoint, response.status())?;

    let body = response
        .bytes()
        .await
        .map_err(|source| DeliveritError::BodyRead { endpoint, source })?;

    decode_body(endpoint, &body)
}

/// Fails with [`DeliveritError::UpstreamStatus`] unless `status` is 200.
///
/// # Errors
///
/// Returns [`DeliveritError::UpstreamStatus`] for any status other than 200,
/// including other 2xx codes.
pub fn check_status(endpoint: Endpoint, status: StatusCode) -> Result<(), DeliveritError> {
    if status == StatusCode::OK {
        return Ok(());
    }

    Err(DeliveritError::UpstreamStatus {
        endpoint,
        code: status.as_u16(),
        status: status.to_string(),
    })
}

/// Decodes a response body read after a 200 status.
///
/// A `null` body yields `T::default()`.
///
/// # Errors
///
/// Returns [`DeliveritError::Decode`] if `body` is not valid JSON of shape `T`.
pub fn decode_body<T: DeserializeOwned + Default>(
    endpoint: Endpoint,
    body: &[u8],
) -> Result<T, DeliveritError> {
    serde_json::from_slice::<Option<T>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|source| DeliveritError::Decode { endpoint, source })
}
