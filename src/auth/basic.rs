//! HTTP Basic login request construction.

use base64::prelude::*;

use crate::clients::HttpRequest;
use crate::config::{DeliveritConfig, Endpoint};

/// Encodes `"<username>:<password>"` with standard base64.
///
/// Neither value is validated; an empty username or password is encoded
/// as-is and left for the upstream to reject.
///
/// # Example
///
/// ```rust
/// use deliverit_api::auth::basic_auth_value;
///
/// assert_eq!(basic_auth_value("u", "p"), "dTpw");
/// ```
#[must_use]
pub fn basic_auth_value(username: &str, password: &str) -> String {
    BASE64_STANDARD.encode(format!("{username}:{password}"))
}

/// Builds the login request for the configured auth resource.
///
/// The credentials travel only in the `Authorization` header; no query
/// parameters are sent.
#[must_use]
pub fn auth_request(config: &DeliveritConfig, username: &str, password: &str) -> HttpRequest {
    HttpRequest::builder(Endpoint::Auths, config.path(Endpoint::Auths))
        .header(
            "Authorization",
            format!("Basic {}", basic_auth_value(username, password)),
        )
        .build()
}
