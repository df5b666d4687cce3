//! Integration tests for the login exchange.
//!
//! These tests verify the Basic auth header, the absence of query
//! parameters, credential decoding, and how login failures are classified.

use deliverit_api::{BaseUrl, DeliveritClient, DeliveritConfig, DeliveritError, Endpoint};
use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const AUTH_PATH: &str = "/reports/v1.1/api/web/v1/auths";

/// Creates a client pointed at the given mock server.
fn client_for(server: &MockServer) -> DeliveritClient {
    let config = DeliveritConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    DeliveritClient::with_config(config).unwrap()
}

#[tokio::test]
async fn test_authenticate_decodes_credential() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(AUTH_PATH))
        .and(header("authorization", "Basic dTpw"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "key": 42,
            "token": "abc",
            "account_name": "Acme"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let credential = assert_ok!(client_for(&server).authenticate("u", "p").await);

    assert_eq!(credential.key, 42);
    assert_eq!(credential.token, "abc");
    assert_eq!(credential.account_name, "Acme");
}

#[tokio::test]
async fn test_authenticate_sends_no_query_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(AUTH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "key": 1,
            "token": "t",
            "account_name": "A"
        })))
        .mount(&server)
        .await;

    assert_ok!(client_for(&server).authenticate("user", "pa ss").await);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_authenticate_forwards_empty_credentials() {
    let server = MockServer::start().await;

    // base64(":") == "Og=="
    Mock::given(method("GET"))
        .and(path(AUTH_PATH))
        .and(header("authorization", "Basic Og=="))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let error = assert_err!(client_for(&server).authenticate("", "").await);

    assert!(matches!(
        error,
        DeliveritError::UpstreamStatus {
            endpoint: Endpoint::Auths,
            code: 401,
            ..
        }
    ));
}

#[tokio::test]
async fn test_rejected_login_carries_status_text_and_ignores_body() {
    let server = MockServer::start().await;

    // A well-formed credential body must not be decoded on a non-200 status.
    Mock::given(method("GET"))
        .and(path(AUTH_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "key": 42,
            "token": "abc",
            "account_name": "Acme"
        })))
        .mount(&server)
        .await;

    let error = assert_err!(client_for(&server).authenticate("u", "wrong").await);

    match error {
        DeliveritError::UpstreamStatus {
            endpoint,
            code,
            status,
        } => {
            assert_eq!(endpoint, Endpoint::Auths);
            assert_eq!(code, 403);
            assert_eq!(status, "403 Forbidden");
        }
        other => panic!("expected UpstreamStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_credential_body_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(AUTH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let error = assert_err!(client_for(&server).authenticate("u", "p").await);

    assert!(matches!(
        error,
        DeliveritError::Decode {
            endpoint: Endpoint::Auths,
            ..
        }
    ));
    assert!(error.to_string().contains("auths"));
}

#[tokio::test]
async fn test_custom_auth_path_is_used() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "key": 5,
            "token": "z",
            "account_name": "B"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = DeliveritConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .auth_path("v2/login")
        .build()
        .unwrap();
    let client = DeliveritClient::with_config(config).unwrap();

    let credential = assert_ok!(client.authenticate("u", "p").await);
    assert_eq!(credential.key, 5);
}
