//! Configuration error types for the Deliverit API client.
//!
//! All configuration constructors return `Result<T, ConfigError>` so that a
//! misconfigured client is rejected before any request is sent.
//!
//! # Example
//!
//! ```rust
//! use deliverit_api::{BaseUrl, ConfigError};
//!
//! let result = BaseUrl::new("not a url");
//! assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while building a client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The base URL could not be parsed or is not an http(s) URL with a host.
    #[error("Invalid base URL '{url}'. Expected an absolute http or https URL (e.g., 'https://cloud.deliverit.com.au').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A resource path was configured as an empty string.
    #[error("Resource path for '{endpoint}' cannot be empty.")]
    EmptyResourcePath {
        /// The logical endpoint whose path is empty.
        endpoint: &'static str,
    },

    /// The request timeout was configured as zero.
    #[error("Request timeout must be greater than zero.")]
    ZeroTimeout,

    /// The underlying HTTP client could not be created.
    #[error("Failed to create HTTP client: {reason}")]
    HttpClient {
        /// The reason reported by the HTTP library.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_base_url_error_message() {
        let error = ConfigError::InvalidBaseUrl {
            url: "ftp://nowhere".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("ftp://nowhere"));
        assert!(message.contains("http or https"));
    }

    #[test]
    fn test_empty_resource_path_error_names_endpoint() {
        let error = ConfigError::EmptyResourcePath { endpoint: "orders" };
        assert_eq!(error.to_string(), "Resource path for 'orders' cannot be empty.");
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::ZeroTimeout;
        let _: &dyn std::error::Error = &error;
    }
}
