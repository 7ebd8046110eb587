//! Shared fixtures for `s21-infra` integration tests.

#![allow(dead_code)]

use s21_domain::ClientConfig;
use s21_infra::S21Client;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN_PATH: &str = "/auth/realms/EduPowerKeycloak/protocol/openid-connect/token";
pub const GRAPHQL_PATH: &str = "/services/graphql";

/// Install a tracing subscriber once so `RUST_LOG` works in tests.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Config with both endpoints on `server` and test credentials.
pub fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig {
        base_url: server.uri(),
        auth_url: server.uri(),
        login: Some("jdoe".to_string()),
        password: Some("secret".to_string()),
        timeout_secs: 5,
        ..Default::default()
    }
}

pub fn client_for(server: &MockServer) -> S21Client {
    init_tracing();
    S21Client::new(config_for(server)).expect("client should build")
}

/// Realm token payload that lives for `expires_in` seconds.
pub fn token_body(access_token: &str, expires_in: i64) -> Value {
    json!({
        "access_token": access_token,
        "expires_in": expires_in,
        "refresh_expires_in": 1800,
        "refresh_token": "refresh",
        "token_type": "Bearer",
        "id_token": "id",
        "not-before-policy": 0,
        "session_state": "session",
        "scope": "profile email"
    })
}

/// Token endpoint answering every exchange with `access_token`.
pub async fn mount_token_endpoint(server: &MockServer, access_token: &str) {
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body(access_token, 300)))
        .mount(server)
        .await;
}

/// Successful GraphQL envelope around `data`.
pub fn graphql_data(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "data": data }))
}

pub fn free_slot(id: &str, start: &str, end: &str) -> Value {
    json!({
        "id": id,
        "type": "FREE_TIME",
        "start": start,
        "end": end,
        "school": { "shortName": "21 Moscow", "__typename": "SafeSchool" },
        "__typename": "CalendarEventSlot"
    })
}

pub fn booking(id: &str, slot_id: &str, project: &str, verifier: &str) -> Value {
    json!({
        "id": id,
        "eventSlotId": slot_id,
        "eventSlot": {
            "id": slot_id,
            "start": "2025-03-01T10:30:00.000Z",
            "end": "2025-03-01T11:00:00.000Z"
        },
        "task": { "id": "task-1", "goalName": project },
        "verifierUser": { "id": "user-1", "login": verifier },
        "isOnline": true,
        "bookingStatus": "APPROVED"
    })
}

pub fn event(id: &str, event_code: &str, slots: Vec<Value>, bookings: Vec<Value>) -> Value {
    json!({
        "id": id,
        "start": "2025-03-01T10:00:00.000Z",
        "end": "2025-03-01T12:00:00.000Z",
        "description": null,
        "eventType": "CHECK",
        "eventCode": event_code,
        "eventSlots": slots,
        "bookings": bookings,
        "__typename": "CalendarEvent"
    })
}
