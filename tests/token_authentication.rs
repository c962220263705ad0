//! Integration tests for the token fetch-and-cache client, driven
//! against a mock token endpoint.

use std::sync::Arc;

use speech_auth::{AuthError, AuthenticationClient, Endpoint, SpeechRegion};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEST_KEY: &str = "test-subscription-key";

/// Endpoint template pointing at the mock server, with the region in
/// the request path so per-region URIs stay observable.
fn mock_endpoint(server: &MockServer) -> Arc<Endpoint> {
    Arc::new(Endpoint::new(
        "http",
        "127.0.0.1",
        Some(server.address().port()),
        "/{region}/issueToken",
    ))
}

fn client_for(server: &MockServer) -> AuthenticationClient {
    AuthenticationClient::new(mock_endpoint(server), TEST_KEY, SpeechRegion::EastUS)
        .expect("client construction")
}

#[tokio::test]
async fn fresh_client_fetches_token_on_authenticate() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/eastus/issueToken"))
        .and(header("Ocp-Apim-Subscription-Key", TEST_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_string("T1"))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    assert!(client.token().is_none());

    client.authenticate(false).await.unwrap();

    assert_eq!(client.token(), Some("T1"));
    assert_eq!(
        client.authorization_header_value().as_deref(),
        Some("Bearer T1")
    );
}

#[tokio::test]
async fn authenticate_reuses_cached_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/eastus/issueToken"))
        .respond_with(ResponseTemplate::new(200).set_body_string("T1"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    // A second fetch would observe a different token; the cache must
    // prevent it from ever being issued.
    Mock::given(method("POST"))
        .and(path("/eastus/issueToken"))
        .respond_with(ResponseTemplate::new(200).set_body_string("T2"))
        .expect(0)
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    client.authenticate(false).await.unwrap();
    client.authenticate(false).await.unwrap();

    assert_eq!(client.token(), Some("T1"));
}

#[tokio::test]
async fn force_new_token_fetches_again() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/eastus/issueToken"))
        .respond_with(ResponseTemplate::new(200).set_body_string("T1"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/eastus/issueToken"))
        .respond_with(ResponseTemplate::new(200).set_body_string("T2"))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    client.authenticate(false).await.unwrap();
    assert_eq!(client.token(), Some("T1"));

    client.authenticate(true).await.unwrap();
    assert_eq!(client.token(), Some("T2"));
}

#[tokio::test]
async fn non_success_status_surfaces_service_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/eastus/issueToken"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    let err = client.authenticate(false).await.unwrap_err();

    assert!(matches!(err, AuthError::ServiceError(_, _)));
    let message = err.to_string();
    assert!(message.contains("401"), "message was: {message}");
    assert!(message.contains("Unauthorized"), "message was: {message}");
    assert!(client.token().is_none());
}

#[tokio::test]
async fn clear_token_triggers_exactly_one_refetch() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/eastus/issueToken"))
        .respond_with(ResponseTemplate::new(200).set_body_string("T1"))
        .expect(2)
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    client.authenticate(false).await.unwrap();
    assert_eq!(client.token(), Some("T1"));

    client.clear_token();
    assert!(client.token().is_none());

    client.authenticate(false).await.unwrap();
    assert_eq!(client.token(), Some("T1"));
}

#[tokio::test]
async fn region_change_targets_distinct_uris() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/eastus/issueToken"))
        .respond_with(ResponseTemplate::new(200).set_body_string("T1"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/westeurope/issueToken"))
        .respond_with(ResponseTemplate::new(200).set_body_string("T2"))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    client.authenticate(true).await.unwrap();
    assert_eq!(client.token(), Some("T1"));

    client.set_region(SpeechRegion::WestEurope);
    client.authenticate(true).await.unwrap();
    assert_eq!(client.token(), Some("T2"));
}

#[tokio::test]
async fn transport_failure_surfaces_transport_error() {
    // Grab a port that is then released, so the connection is refused.
    let server = MockServer::start().await;
    let endpoint = mock_endpoint(&server);
    drop(server);

    let mut client = AuthenticationClient::new(endpoint, TEST_KEY, SpeechRegion::EastUS)
        .expect("client construction");

    let err = client.authenticate(false).await.unwrap_err();
    assert!(matches!(err, AuthError::Transport(_)));
    assert!(client.token().is_none());
}

#[tokio::test]
async fn empty_success_body_leaves_token_absent() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/eastus/issueToken"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    client.authenticate(false).await.unwrap();
    assert!(client.token().is_none());

    // With nothing cached, the next call fetches again.
    client.authenticate(false).await.unwrap();
    assert!(client.token().is_none());
}

#[tokio::test]
async fn failed_forced_refresh_discards_previous_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/eastus/issueToken"))
        .respond_with(ResponseTemplate::new(200).set_body_string("T1"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/eastus/issueToken"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    client.authenticate(false).await.unwrap();
    assert_eq!(client.token(), Some("T1"));

    // The cache is cleared before the fetch is attempted, so the old
    // token is gone even though the refresh failed.
    let err = client.authenticate(true).await.unwrap_err();
    assert!(matches!(err, AuthError::ServiceError(_, _)));
    assert!(client.token().is_none());
}
