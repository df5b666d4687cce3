//! Error types for Deliverit API calls.
//!
//! Every call fails with exactly one [`DeliveritError`], classified by the
//! stage at which it failed:
//!
//! - [`DeliveritError::Transport`]: no HTTP response was obtained
//! - [`DeliveritError::UpstreamStatus`]: a response arrived with a status other than 200
//! - [`DeliveritError::BodyRead`]: a 200 response body could not be read
//! - [`DeliveritError::Decode`]: the body was not the expected JSON shape
//!
//! Each variant names the logical [`Endpoint`] that failed.
//!
//! # Example
//!
//! ```rust,ignore
//! use deliverit_api::DeliveritError;
//!
//! match client.list_stores(&credential).await {
//!     Ok(stores) => println!("{} stores", stores.len()),
//!     Err(DeliveritError::UpstreamStatus { code: 401, .. }) => {
//!         // The credential was rejected; authenticate again.
//!     }
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

use std::time::Duration;

use thiserror::Error;

use crate::config::Endpoint;

/// A failure that prevented any final HTTP response from being obtained.
#[derive(Debug, Error)]
pub enum TransportError {
    /// DNS, connection, TLS, or per-hop timeout failure from the HTTP library.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The redirect chain exceeded the configured maximum.
    #[error("Stopped after {max} redirects")]
    TooManyRedirects {
        /// The configured maximum number of hops.
        max: usize,
    },

    /// A redirect response carried a `Location` that is not a usable URL.
    #[error("Invalid redirect location '{location}'")]
    InvalidRedirect {
        /// The raw `Location` header value.
        location: String,
    },

    /// A header name or value could not be sent over HTTP.
    #[error("Invalid header '{name}'")]
    InvalidHeader {
        /// The offending header name.
        name: String,
    },

    /// The call did not complete within the configured timeout.
    #[error("Request timed out after {after:?}")]
    Timeout {
        /// The timeout that elapsed.
        after: Duration,
    },
}

/// Error returned by every Deliverit API operation.
#[derive(Debug, Error)]
pub enum DeliveritError {
    /// The request could not be completed at the network level.
    #[error("Failed to call Deliverit {endpoint}: {source}")]
    Transport {
        /// The endpoint being called.
        endpoint: Endpoint,
        /// What went wrong.
        #[source]
        source: TransportError,
    },

    /// The upstream answered with a status other than 200.
    ///
    /// The response body is not read in this case.
    #[error("Failed to get Deliverit {endpoint}: {status}")]
    UpstreamStatus {
        /// The endpoint being called.
        endpoint: Endpoint,
        /// The numeric HTTP status code.
        code: u16,
        /// The status text, e.g. `401 Unauthorized`.
        status: String,
    },

    /// The body of a 200 response could not be read in full.
    #[error("Failed to read Deliverit {endpoint}: {source}")]
    BodyRead {
        /// The endpoint being called.
        endpoint: Endpoint,
        /// The underlying read failure.
        #[source]
        source: reqwest::Error,
    },

    /// The body of a 200 response was not the expected JSON shape.
    #[error("Failed to decode Deliverit {endpoint}: {source}")]
    Decode {
        /// The endpoint being called.
        endpoint: Endpoint,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

impl DeliveritError {
    /// Returns the logical endpoint the failed call was addressed to.
    #[must_use]
    pub const fn endpoint(&self) -> Endpoint {
        match self {
            Self::Transport { endpoint, .. }
            | Self::UpstreamStatus { endpoint, .. }
            | Self::BodyRead { endpoint, .. }
            | Self::Decode { endpoint, .. } => *endpoint,
        }
    }
}

// Verify errors are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TransportError>();
    assert_send_sync::<DeliveritError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_upstream_status_message_carries_endpoint_and_status() {
        let error = DeliveritError::UpstreamStatus {
            endpoint: Endpoint::Stores,
            code: 401,
            status: "401 Unauthorized".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Failed to get Deliverit stores: 401 Unauthorized"
        );
        assert_eq!(error.endpoint(), Endpoint::Stores);
    }

    #[test]
    fn test_decode_error_names_endpoint_and_keeps_source() {
        let source = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let error = DeliveritError::Decode {
            endpoint: Endpoint::Orders,
            source,
        };

        assert!(error.to_string().starts_with("Failed to decode Deliverit orders"));
        assert!(error.source().is_some());
        assert_eq!(error.endpoint(), Endpoint::Orders);
    }

    #[test]
    fn test_transport_error_wraps_redirect_failure() {
        let error = DeliveritError::Transport {
            endpoint: Endpoint::Auths,
            source: TransportError::TooManyRedirects { max: 10 },
        };

        assert_eq!(
            error.to_string(),
            "Failed to call Deliverit auths: Stopped after 10 redirects"
        );
        assert!(error.source().is_some());
    }

    #[test]
    fn test_timeout_message_includes_duration() {
        let error = TransportError::Timeout {
            after: Duration::from_secs(30),
        };

        assert_eq!(error.to_string(), "Request timed out after 30s");
    }
}
