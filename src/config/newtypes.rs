//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers that validate their contents on
//! construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use reqwest::Url;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated base URL for the Deliverit cloud service.
///
/// The URL must be absolute, use the `http` or `https` scheme, and name a
/// host. Only the scheme, host and port are used when building requests;
/// each resource path replaces whatever path the base URL carries.
///
/// # Example
///
/// ```rust
/// use deliverit_api::BaseUrl;
///
/// let url = BaseUrl::new("https://cloud.deliverit.com.au").unwrap();
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), Some("cloud.deliverit.com.au"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(Url);

impl BaseUrl {
    /// The production Deliverit cloud host.
    pub const DEFAULT: &'static str = "https://cloud.deliverit.com.au";

    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL cannot be parsed,
    /// has a scheme other than http/https, or has no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = url.into();
        let trimmed = raw.trim();
        let invalid = || ConfigError::InvalidBaseUrl {
            url: trimmed.to_string(),
        };

        let parsed = Url::parse(trimmed).map_err(|_| invalid())?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(invalid());
        }

        Ok(Self(parsed))
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        self.0.scheme()
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        self.0.host_str()
    }

    /// Returns a URL for `path` on this host, replacing any existing path.
    #[must_use]
    pub fn with_path(&self, path: &str) -> Url {
        let mut url = self.0.clone();
        url.set_path(path);
        url.set_query(None);
        url.set_fragment(None);
        url
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl Serialize for BaseUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for BaseUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_accepts_http_and_https() {
        let url = BaseUrl::new("https://cloud.deliverit.com.au").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_name(), Some("cloud.deliverit.com.au"));

        let url = BaseUrl::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), Some("127.0.0.1"));
    }

    #[test]
    fn test_base_url_rejects_invalid() {
        assert!(BaseUrl::new("").is_err());
        assert!(BaseUrl::new("cloud.deliverit.com.au").is_err());
        assert!(BaseUrl::new("ftp://cloud.deliverit.com.au").is_err());
        assert!(BaseUrl::new("mailto:someone@example.com").is_err());
    }

    #[test]
    fn test_with_path_replaces_existing_path() {
        let url = BaseUrl::new("https://example.com/ignored?x=1").unwrap();
        let full = url.with_path("reports/v1.1/api/web/v1/auths");
        assert_eq!(
            full.as_str(),
            "https://example.com/reports/v1.1/api/web/v1/auths"
        );
    }

    #[test]
    fn test_default_constant_is_valid() {
        let url = BaseUrl::new(BaseUrl::DEFAULT).unwrap();
        assert_eq!(url.host_name(), Some("cloud.deliverit.com.au"));
        assert_eq!(url.scheme(), "https");
    }

    #[test]
    fn test_base_url_serde_round_trip_validates() {
        let url: BaseUrl = serde_json::from_str(r#""https://example.com""#).unwrap();
        assert_eq!(url.host_name(), Some("example.com"));

        let bad: Result<BaseUrl, _> = serde_json::from_str(r#""nope""#);
        assert!(bad.is_err());
    }
}
