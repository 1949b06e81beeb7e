#![allow(clippy::unwrap_used)]
// Integration tests for `ApiClient` using wiremock.

use serde_json::json;
use url::Url;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use campus_api::{ApiClient, EquipmentStatus, Error, ItemId, ListQuery};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = ApiClient::with_client(reqwest::Client::new(), base_url);
    (server, client)
}

/// Like [`setup`], with a session token already installed.
async fn setup_authed() -> (MockServer, ApiClient) {
    let (server, client) = setup().await;
    client.resume("tok-abc123".to_owned().into());
    (server, client)
}

// ── Authentication ──────────────────────────────────────────────────

#[tokio::test]
async fn test_login_success_installs_token() {
    let (server, client) = setup().await;

    let envelope = json!({
        "success": true,
        "data": {
            "token": "tok-abc123",
            "user": {
                "id": 1,
                "username": "jchen",
                "role": "ADMIN",
                "is_active": true
            }
        }
    });

    Mock::given(method("POST"))
        .and(path("/api/auth/login/"))
        .and(body_partial_json(json!({ "username": "jchen" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&server)
        .await;

    let secret: secrecy::SecretString = "hunter2".to_owned().into();
    let session = client.login("jchen", &secret).await.unwrap();

    assert_eq!(session.account.username, "jchen");
    assert!(session.account.is_admin());
    assert!(client.has_token());
}

#[tokio::test]
async fn test_login_rejection_maps_to_authentication() {
    let (server, client) = setup().await;

    let envelope = json!({
        "success": false,
        "message": "invalid username or password"
    });

    Mock::given(method("POST"))
        .and(path("/api/auth/login/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&server)
        .await;

    let secret: secrecy::SecretString = "wrong".to_owned().into();
    let result = client.login("jchen", &secret).await;

    match result {
        Err(Error::Authentication { ref message }) => {
            assert!(message.contains("invalid username"), "got: {message}");
        }
        other => panic!("expected Authentication error, got: {other:?}"),
    }
    assert!(!client.has_token());
}

#[tokio::test]
async fn test_token_applied_to_requests() {
    let (server, client) = setup_authed().await;

    let envelope = json!({ "success": true, "data": [] });

    Mock::given(method("GET"))
        .and(path("/api/devices/"))
        .and(header("authorization", "Token tok-abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .expect(1)
        .mount(&server)
        .await;

    client.list_devices(&ListQuery::default()).await.unwrap();
}

#[tokio::test]
async fn test_session_expired() {
    let (server, client) = setup_authed().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = client.list_devices(&ListQuery::default()).await;
    assert!(
        matches!(result, Err(Error::Authentication { .. })),
        "expected Authentication error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_missing_token_fails_before_the_request() {
    let (server, client) = setup().await;

    // No request may leave the client without a token.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let result = client.list_devices(&ListQuery::default()).await;
    assert!(
        matches!(result, Err(Error::NotLoggedIn)),
        "expected NotLoggedIn, got: {result:?}"
    );

    let result = client.delete_device(&ItemId::Int(1)).await;
    assert!(matches!(result, Err(Error::NotLoggedIn)));
}

// ── List shape normalization ────────────────────────────────────────

#[tokio::test]
async fn test_list_devices_paginated() {
    let (server, client) = setup_authed().await;

    let envelope = json!({
        "success": true,
        "data": {
            "results": [{
                "id": 12,
                "name": "lab-pc-12",
                "mac": "aa:bb:cc:dd:ee:ff",
                "ip": "10.3.7.21",
                "is_active": true
            }],
            "total_pages": 4,
            "total_count": 37,
            "current_page": 2
        }
    });

    Mock::given(method("GET"))
        .and(path("/api/devices/"))
        .and(query_param("page", "2"))
        .and(query_param("search", "lab"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&server)
        .await;

    let query = ListQuery {
        page: Some(2),
        search: Some("lab".into()),
        ..ListQuery::default()
    };
    let payload = client.list_devices(&query).await.unwrap();

    assert_eq!(payload.items.len(), 1);
    assert_eq!(payload.items[0].name, "lab-pc-12");
    assert_eq!(payload.items[0].id, ItemId::Int(12));
    let page = payload.page.unwrap();
    assert_eq!(page.current_page, 2);
    assert_eq!(page.total_pages, 4);
    assert_eq!(page.total_count, 37);
}

#[tokio::test]
async fn test_list_ip_assignments_bare_array() {
    let (server, client) = setup_authed().await;

    let envelope = json!({
        "success": true,
        "data": [
            { "id": "10.3.7.21", "ip": "10.3.7.21", "mac": "aa:bb:cc:dd:ee:ff" },
            { "id": "10.3.7.22", "ip": "10.3.7.22", "mac": "11:22:33:44:55:66",
              "hostname": "lab-pc-13", "blacklisted": true }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/api/ip-assignments/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&server)
        .await;

    let payload = client
        .list_ip_assignments(&ListQuery::default())
        .await
        .unwrap();

    assert_eq!(payload.items.len(), 2);
    assert!(payload.page.is_none(), "bare array must mean client-side pagination");
    assert!(payload.items[1].blacklisted);
    assert_eq!(payload.items[0].id, ItemId::Text("10.3.7.21".into()));
}

// ── Mutations ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_device() {
    let (server, client) = setup_authed().await;

    Mock::given(method("DELETE"))
        .and(path("/api/devices/12/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "success": true })),
        )
        .expect(1)
        .mount(&server)
        .await;

    client.delete_device(&ItemId::Int(12)).await.unwrap();
}

#[tokio::test]
async fn test_set_equipment_status_sends_renter() {
    let (server, client) = setup_authed().await;

    let envelope = json!({
        "success": true,
        "data": {
            "id": 5,
            "name": "Projector A",
            "serial_no": "PJ-0005",
            "status": "RENTED",
            "renter": "mgarcia"
        }
    });

    Mock::given(method("PATCH"))
        .and(path("/api/equipment/5/"))
        .and(body_partial_json(json!({ "status": "RENTED", "renter": "mgarcia" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&server)
        .await;

    let updated = client
        .set_equipment_status(&ItemId::Int(5), EquipmentStatus::Rented, Some("mgarcia"))
        .await
        .unwrap();

    assert_eq!(updated.status, EquipmentStatus::Rented);
    assert_eq!(updated.renter.as_deref(), Some("mgarcia"));
}

// ── Error envelopes ─────────────────────────────────────────────────

#[tokio::test]
async fn test_business_rejection_with_nested_message() {
    let (server, client) = setup_authed().await;

    let envelope = json!({
        "success": false,
        "message": { "status": ["cannot rent equipment under maintenance"] }
    });

    Mock::given(method("PATCH"))
        .and(path("/api/equipment/5/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&server)
        .await;

    let result = client
        .set_equipment_status(&ItemId::Int(5), EquipmentStatus::Rented, Some("mgarcia"))
        .await;

    match result {
        Err(Error::Api { ref message }) => {
            assert_eq!(message, "status: cannot rent equipment under maintenance");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_error_status_with_envelope_message() {
    let (server, client) = setup_authed().await;

    let envelope = json!({
        "success": false,
        "message": "device not found"
    });

    Mock::given(method("DELETE"))
        .and(path("/api/devices/999/"))
        .respond_with(ResponseTemplate::new(404).set_body_json(&envelope))
        .mount(&server)
        .await;

    let result = client.delete_device(&ItemId::Int(999)).await;
    match result {
        Err(Error::Api { ref message }) => assert_eq!(message, "device not found"),
        other => panic!("expected Api error, got: {other:?}"),
    }
}
