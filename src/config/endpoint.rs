//! Logical endpoint identities.

use std::fmt;

/// The logical identity of an upstream resource.
///
/// Endpoints name a resource independently of the literal URL it lives at,
/// so that error messages stay meaningful when the client is pointed at a
/// different host or path layout.
///
/// # Example
///
/// ```rust
/// use deliverit_api::Endpoint;
///
/// assert_eq!(Endpoint::Orders.to_string(), "orders");
/// assert_eq!(Endpoint::Auths.default_path(), "reports/v1.1/api/web/v1/auths");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// The login exchange that issues a session credential.
    Auths,
    /// The list of stores reachable with a session credential.
    Stores,
    /// The list of orders for a store within a date range.
    Orders,
}

impl Endpoint {
    /// Returns the logical name used in error messages and logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Auths => "auths",
            Self::Stores => "stores",
            Self::Orders => "orders",
        }
    }

    /// Returns the resource path used by the production service.
    #[must_use]
    pub const fn default_path(self) -> &'static str {
        match self {
            Self::Auths => "reports/v1.1/api/web/v1/auths",
            Self::Stores => "reports/v1.1/api/web/v1/stores",
            Self::Orders => "reports/v1.1/api/web/v1/orders",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_display_uses_logical_name() {
        assert_eq!(Endpoint::Auths.to_string(), "auths");
        assert_eq!(Endpoint::Stores.to_string(), "stores");
        assert_eq!(Endpoint::Orders.to_string(), "orders");
    }

    #[test]
    fn test_default_paths_share_reports_prefix() {
        for endpoint in [Endpoint::Auths, Endpoint::Stores, Endpoint::Orders] {
            assert!(endpoint
                .default_path()
                .starts_with("reports/v1.1/api/web/v1/"));
            assert!(endpoint.default_path().ends_with(endpoint.name()));
        }
    }
}
