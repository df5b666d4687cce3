//! Session credentials issued by the Deliverit login exchange.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::resources::null_as_default;

/// The credential returned by a successful login.
///
/// A credential is immutable once issued and carries no expiry; the caller
/// owns it and decides when to authenticate again. It serializes to the same
/// JSON shape the login resource returns, so callers that want to keep it
/// between runs can store it as-is.
///
/// # Security
///
/// The `Debug` implementation masks the token.
///
/// # Example
///
/// ```rust
/// use deliverit_api::SessionCredential;
///
/// let credential: SessionCredential =
///     serde_json::from_str(r#"{"key":42,"token":"abc","account_name":"Acme"}"#).unwrap();
///
/// assert_eq!(credential.key, 42);
/// assert_eq!(credential.token, "abc");
/// assert_eq!(credential.account_name, "Acme");
/// assert!(!format!("{credential:?}").contains("abc"));
/// ```
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionCredential {
    /// Numeric key sent as the `key` query parameter.
    #[serde(deserialize_with = "null_as_default")]
    pub key: i64,

    /// Token sent as the `token` query parameter.
    #[serde(deserialize_with = "null_as_default")]
    pub token: String,

    /// Name of the account the credential belongs to.
    #[serde(deserialize_with = "null_as_default")]
    pub account_name: String,
}

impl SessionCredential {
    /// Creates a credential from its parts, e.g. when restoring one a caller stored.
    #[must_use]
    pub fn new(key: i64, token: impl Into<String>, account_name: impl Into<String>) -> Self {
        Self {
            key,
            token: token.into(),
            account_name: account_name.into(),
        }
    }
}

impl fmt::Debug for SessionCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionCredential")
            .field("key", &self.key)
            .field("token", &"*****")
            .field("account_name", &self.account_name)
            .finish()
    }
}

// Verify SessionCredential is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SessionCredential>();
};
