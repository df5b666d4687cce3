//! Redirect handling with authorization reattachment.
//!
//! Automatic redirects are disabled on the underlying HTTP client and
//! followed here instead, so the `Authorization` header can be carried
//! across every hop of a call.
//!
//! For each hop the next request inherits the previous request's headers.
//! When the hop leaves the previous origin the `Authorization` header is
//! dropped, as browsers and most HTTP clients do. Then
//! [`reattach_authorization`] restores the header from the first request of
//! the chain if the hop has none.

use reqwest::header::{HeaderMap, AUTHORIZATION, LOCATION};
use reqwest::{Response, StatusCode, Url};

use crate::clients::errors::TransportError;

/// Copies the original request's `Authorization` header onto `next` when
/// `next` has no non-empty `Authorization` header of its own.
///
/// A header already present on `next` is left untouched.
///
/// # Example
///
/// ```rust
/// use deliverit_api::clients::reattach_authorization;
/// use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
///
/// let mut original = HeaderMap::new();
/// original.insert(AUTHORIZATION, HeaderValue::from_static("Basic X"));
///
/// let mut next = HeaderMap::new();
/// reattach_authorization(&mut next, &original);
/// assert_eq!(next.get(AUTHORIZATION).unwrap(), "Basic X");
/// ```
pub fn reattach_authorization(next: &mut HeaderMap, original: &HeaderMap) {
    let has_own = next
        .get(AUTHORIZATION)
        .is_some_and(|value| !value.is_empty());
    if has_own {
        return;
    }

    if let Some(value) = original.get(AUTHORIZATION) {
        next.insert(AUTHORIZATION, value.clone());
    }
}

/// Returns the URL to follow if `response` is a redirect.
///
/// Only 301, 302, 303, 307 and 308 responses with a `Location` header are
/// followed; any other response is final.
pub(crate) fn next_hop(current: &Url, response: &Response) -> Result<Option<Url>, TransportError> {
    if !is_followed_status(response.status()) {
        return Ok(None);
    }

    let Some(location) = response.headers().get(LOCATION) else {
        return Ok(None);
    };

    let invalid = || TransportError::InvalidRedirect {
        location: String::from_utf8_lossy(location.as_bytes()).into_owned(),
    };
    let location = location.to_str().map_err(|_| invalid())?;
    current.join(location).map(Some).map_err(|_| invalid())
}

/// Computes the headers for the hop from `current` to `next`.
pub(crate) fn headers_for_hop(
    current: &Url,
    next: &Url,
    previous: &HeaderMap,
    original: &HeaderMap,
) -> HeaderMap {
    let mut headers = previous.clone();
    if !same_origin(current, next) {
        headers.remove(AUTHORIZATION);
    }
    reattach_authorization(&mut headers, original);
    headers
}

fn is_followed_status(status: StatusCode) -> bool {
    matches!(status.as_u16(), 301 | 302 | 303 | 307 | 308)
}

fn same_origin(a: &Url, b: &Url) -> bool {
    a.scheme() == b.scheme()
        && a.host_str() == b.host_str()
        && a.port_or_known_default() == b.port_or_known_default()
}
