//! Integration tests for auth module
//!
//! Exercises the password-grant client against a mock token endpoint and the
//! token manager's refresh decisions.

#![cfg(feature = "test-utils")]

use std::time::Duration;

use chrono::Utc;
use s21_common::auth::{
    AuthClientError, Credentials, PasswordGrantClient, PasswordGrantConfig, TokenManager,
    TokenManagerError, TokenSet,
};
use s21_common::context::{ContextError, RequestContext};
use s21_common::testing::MockCredentialExchange;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN_PATH: &str = "/auth/realms/EduPowerKeycloak/protocol/openid-connect/token";

fn token_body() -> serde_json::Value {
    serde_json::json!({
        "access_token": "server-token",
        "expires_in": 300,
        "refresh_expires_in": 1800,
        "refresh_token": "refresh",
        "token_type": "Bearer",
        "id_token": "id",
        "not-before-policy": 0,
        "session_state": "session",
        "scope": "profile email"
    })
}

fn http_manager(server: &MockServer) -> TokenManager<PasswordGrantClient> {
    let config = PasswordGrantConfig::new(&server.uri(), TOKEN_PATH, "s21-open-api").unwrap();
    let client = PasswordGrantClient::new(config, reqwest::Client::new());
    TokenManager::new(client, Some(Credentials::new("jdoe", "p@ss word")), 60)
}

fn mock_manager(exchange: &MockCredentialExchange) -> TokenManager<MockCredentialExchange> {
    TokenManager::new(exchange.clone(), Some(Credentials::new("jdoe", "secret")), 60)
}

/// The exchange posts the fixed form fields and decodes the realm payload.
#[tokio::test]
async fn password_grant_posts_form_and_decodes_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("client_id=s21-open-api"))
        .and(body_string_contains("username=jdoe"))
        .and(body_string_contains("password=p%40ss+word"))
        .and(body_string_contains("grant_type=password"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body()))
        .expect(1)
        .mount(&server)
        .await;

    let before = Utc::now();
    let token = http_manager(&server).authenticate(&RequestContext::new()).await.unwrap();

    assert_eq!(token.access_token, "server-token");
    assert_eq!(token.session_state.as_deref(), Some("session"));
    assert!(token.expires_at >= before + chrono::Duration::seconds(300));
}

/// A non-200 answer carries the status and the (possibly empty) body.
#[tokio::test]
async fn rejected_exchange_surfaces_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_string(r#"{"error":"invalid_grant"}"#))
        .mount(&server)
        .await;

    let manager = http_manager(&server);
    let err = manager.ensure_valid(&RequestContext::new()).await.unwrap_err();

    match err {
        TokenManagerError::Exchange(AuthClientError::Rejected { status, body }) => {
            assert_eq!(status, 401);
            assert_eq!(body, r#"{"error":"invalid_grant"}"#);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(manager.current_token().await.is_none());
}

#[tokio::test]
async fn rejected_exchange_with_empty_body_still_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = http_manager(&server).authenticate(&RequestContext::new()).await.unwrap_err();

    match err {
        TokenManagerError::Exchange(AuthClientError::Rejected { status, body }) => {
            assert_eq!(status, 503);
            assert!(body.is_empty());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn malformed_token_payload_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = http_manager(&server).authenticate(&RequestContext::new()).await.unwrap_err();
    assert!(matches!(err, TokenManagerError::Exchange(AuthClientError::ParseError(_))));
}

#[tokio::test]
async fn out_of_range_token_lifetime_is_parse_error() {
    let server = MockServer::start().await;
    let mut body = token_body();
    body["expires_in"] = serde_json::json!(i64::MAX);
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let manager = http_manager(&server);
    let err = manager.ensure_valid(&RequestContext::new()).await.unwrap_err();

    assert!(matches!(err, TokenManagerError::Exchange(AuthClientError::ParseError(_))));
    assert!(manager.current_token().await.is_none());
}

/// A slow token endpoint fails the enclosing operation once the deadline passes.
#[tokio::test]
async fn slow_token_endpoint_hits_context_deadline() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(token_body())
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let ctx = RequestContext::with_timeout(Duration::from_millis(100));
    let err = http_manager(&server).ensure_valid(&ctx).await.unwrap_err();

    assert!(matches!(err, TokenManagerError::Context(ContextError::DeadlineExceeded(_))));
}

#[tokio::test]
async fn unset_token_triggers_exactly_one_exchange() {
    let exchange = MockCredentialExchange::new();
    let manager = mock_manager(&exchange);

    let token = manager.ensure_valid(&RequestContext::new()).await.unwrap();

    assert_eq!(exchange.call_count(), 1);
    assert_eq!(exchange.logins(), vec!["jdoe"]);
    assert_eq!(token.access_token, "mock-token-1");
}

#[tokio::test]
async fn token_valid_beyond_margin_is_reused() {
    let exchange = MockCredentialExchange::new();
    let manager = mock_manager(&exchange);
    manager.set_token(TokenSet::new("preset", 120)).await;

    let ctx = RequestContext::new();
    let first = manager.ensure_valid(&ctx).await.unwrap();
    let second = manager.ensure_valid(&ctx).await.unwrap();

    assert_eq!(exchange.call_count(), 0);
    assert_eq!(first.access_token, "preset");
    assert_eq!(second.access_token, "preset");
}

#[tokio::test]
async fn token_inside_margin_is_replaced_entirely() {
    let exchange = MockCredentialExchange::new();
    let manager = mock_manager(&exchange);
    let mut expiring = TokenSet::new("expiring", 30);
    expiring.refresh_token = Some("old-refresh".to_string());
    manager.set_token(expiring).await;

    let token = manager.ensure_valid(&RequestContext::new()).await.unwrap();

    assert_eq!(exchange.call_count(), 1);
    assert_eq!(token.access_token, "mock-token-1");
    assert!(token.refresh_token.is_none());
    assert_eq!(manager.current_token().await, Some(token));
}

#[tokio::test]
async fn already_expired_token_triggers_one_exchange() {
    let exchange = MockCredentialExchange::new();
    let manager = mock_manager(&exchange);
    let expired =
        TokenSet::new("expired", 300).expiring_at(Utc::now() - chrono::Duration::hours(1));
    manager.set_token(expired).await;

    manager.ensure_valid(&RequestContext::new()).await.unwrap();
    manager.ensure_valid(&RequestContext::new()).await.unwrap();

    assert_eq!(exchange.call_count(), 1);
}

#[tokio::test]
async fn cancelled_context_never_reaches_the_exchange() {
    let exchange = MockCredentialExchange::new();
    let manager = mock_manager(&exchange);
    let ctx = RequestContext::new();
    ctx.cancel();

    let err = manager.ensure_valid(&ctx).await.unwrap_err();

    assert!(matches!(err, TokenManagerError::Context(ContextError::Cancelled)));
    assert_eq!(exchange.call_count(), 0);
}
