//! Store records and the stores list request.

use serde::{Deserialize, Serialize};

use crate::auth::SessionCredential;
use crate::clients::HttpRequest;
use crate::config::{DeliveritConfig, Endpoint};
use crate::resources::{null_as_default, with_credential};

/// A store reachable with a session credential.
///
/// # Example
///
/// ```rust
/// use deliverit_api::Store;
///
/// let store: Store = serde_json::from_str(r#"{"store_id":7,"store_name":"Glebe"}"#).unwrap();
/// assert_eq!(store.id, 7);
/// assert_eq!(store.name, "Glebe");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Store {
    /// The upstream store identifier.
    #[serde(rename = "store_id", deserialize_with = "null_as_default")]
    pub id: i64,

    /// The display name of the store.
    #[serde(rename = "store_name", deserialize_with = "null_as_default")]
    pub name: String,
}

/// The stores returned by one list call, in upstream order.
pub type Stores = Vec<Store>;

/// Builds the stores list request for `credential`.
#[must_use]
pub fn stores_request(config: &DeliveritConfig, credential: &SessionCredential) -> HttpRequest {
    let builder = HttpRequest::builder(Endpoint::Stores, config.path(Endpoint::Stores));
    with_credential(builder, credential).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stores_request_carries_only_credential_params() {
        let config = DeliveritConfig::default();
        let credential = SessionCredential::new(42, "abc", "Acme");

        let request = stores_request(&config, &credential);

        assert_eq!(request.endpoint, Endpoint::Stores);
        assert_eq!(request.path, "reports/v1.1/api/web/v1/stores");
        assert_eq!(request.query.len(), 2);
        assert_eq!(request.query.get("key"), Some(&"42".to_string()));
        assert_eq!(request.query.get("token"), Some(&"abc".to_string()));
        assert!(request.headers.get("Authorization").is_none());
    }

    #[test]
    fn test_negative_key_is_sent_in_decimal() {
        let config = DeliveritConfig::default();
        let credential = SessionCredential::new(-5, "t", "A");

        let request = stores_request(&config, &credential);

        assert_eq!(request.query.get("key"), Some(&"-5".to_string()));
    }

    #[test]
    fn test_store_list_preserves_duplicates_and_order() {
        let json = r#"[
            {"store_id": 2, "store_name": "Second"},
            {"store_id": 1, "store_name": "First"},
            {"store_id": 2, "store_name": "Second"}
        ]"#;
        let stores: Stores = serde_json::from_str(json).unwrap();

        assert_eq!(stores.len(), 3);
        assert_eq!(stores[0].id, 2);
        assert_eq!(stores[1].name, "First");
        assert_eq!(stores[0], stores[2]);
    }

    #[test]
    fn test_store_with_string_id_is_rejected() {
        let result: Result<Store, _> =
            serde_json::from_str(r#"{"store_id":"7","store_name":"Glebe"}"#);

        assert!(result.is_err());
    }

    #[test]
    fn test_null_store_fields_decode_as_empty() {
        let store: Store =
            serde_json::from_str(r#"{"store_id":null,"store_name":null}"#).unwrap();

        assert_eq!(store, Store::default());
    }
}
