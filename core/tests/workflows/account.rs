// SPDX-FileCopyrightText: 2025-2026 Zig Team <dev@zig-app.com.br>
//
// SPDX-License-Identifier: Apache-2.0

//! Account workflows through [`Role`] against a mock Strapi server.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use role_core::{AccountError, AuthError, EventId, FeedScope, Registration, Role, UserId};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::test_config;

fn jwt_for(id: u64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(json!({ "id": id, "iat": 1_740_000_000 }).to_string());
    format!("{header}.{payload}.c2ln")
}

async fn role_for(server: &MockServer, state: &tempfile::TempDir) -> Role {
    let config = test_config(&format!("{}/api", server.uri()), state.path());
    Role::new(config).await.unwrap()
}

#[tokio::test]
async fn account_login_persists_session() {
    // Arrange
    let server = MockServer::start().await;
    let state = tempfile::tempdir().unwrap();
    let jwt = jwt_for(4);
    Mock::given(method("POST"))
        .and(path("/api/auth/local"))
        .and(body_partial_json(json!({ "identifier": "ana@example.com" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jwt": jwt,
            "user": { "id": 4, "username": "ana", "email": "ana@example.com" }
        })))
        .expect(1)
        .mount(&server)
        .await;
    let role = role_for(&server, &state).await;

    // Act
    let session = role.login(" ana@example.com ", "s3cretpass1").await.unwrap();

    // Assert - session decoded and readable on the next run
    assert_eq!(session.user_id, UserId(4));
    let again = role_for(&server, &state).await.session().await.unwrap();
    assert_eq!(again, session);

    // Assert - logout forgets it
    assert!(role.logout().await.unwrap());
    assert!(matches!(role.session().await, Err(AuthError::NotSignedIn)));
}

#[tokio::test]
async fn account_login_translates_invalid_credentials() {
    let server = MockServer::start().await;
    let state = tempfile::tempdir().unwrap();
    Mock::given(method("POST"))
        .and(path("/api/auth/local"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "data": null,
            "error": {
                "status": 400,
                "name": "ValidationError",
                "message": "Invalid identifier or password"
            }
        })))
        .mount(&server)
        .await;
    let role = role_for(&server, &state).await;

    let err = role.login("ana@example.com", "wrong").await.unwrap_err();

    assert_eq!(err.to_string(), "Invalid e-mail or password.");
    assert!(matches!(role.session().await, Err(AuthError::NotSignedIn)));
}

#[tokio::test]
async fn account_login_other_failures_are_generic() {
    let server = MockServer::start().await;
    let state = tempfile::tempdir().unwrap();
    Mock::given(method("POST"))
        .and(path("/api/auth/local"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let role = role_for(&server, &state).await;

    let err = role.login("ana@example.com", "s3cretpass1").await.unwrap_err();

    assert!(matches!(
        err.downcast_ref::<AccountError>(),
        Some(AccountError::SignInFailed(_))
    ));
    assert_eq!(err.to_string(), "Failed to sign in. Please try again.");
}

#[tokio::test]
async fn account_login_validates_before_sending() {
    let server = MockServer::start().await;
    let state = tempfile::tempdir().unwrap();
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let role = role_for(&server, &state).await;

    let err = role.login("", "s3cretpass1").await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<AccountError>(),
        Some(AccountError::MissingFields)
    ));
}

#[tokio::test]
async fn account_register_surfaces_server_message() {
    let server = MockServer::start().await;
    let state = tempfile::tempdir().unwrap();
    Mock::given(method("POST"))
        .and(path("/api/auth/local/register"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "status": 400, "message": "Email or Username are already taken" }
        })))
        .mount(&server)
        .await;
    let role = role_for(&server, &state).await;
    let form = Registration {
        username: "ana".to_string(),
        email: "ana@example.com".to_string(),
        password: "s3cretpass1".to_string(),
    };

    let err = role.register(&form).await.unwrap_err();
    assert_eq!(err.to_string(), "Email or Username are already taken");
}

#[tokio::test]
async fn account_register_does_not_sign_in() {
    let server = MockServer::start().await;
    let state = tempfile::tempdir().unwrap();
    Mock::given(method("POST"))
        .and(path("/api/auth/local/register"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jwt": jwt_for(5),
            "user": { "id": 5, "username": "bia", "email": "bia@example.com" }
        })))
        .mount(&server)
        .await;
    let role = role_for(&server, &state).await;
    let form = Registration {
        username: "bia".to_string(),
        email: "bia@example.com".to_string(),
        password: "s3cretpass1".to_string(),
    };

    let user = role.register(&form).await.unwrap();

    assert_eq!(user.id, UserId(5));
    assert!(matches!(role.session().await, Err(AuthError::NotSignedIn)));
}

#[tokio::test]
async fn account_whoami_sends_stored_token() {
    let server = MockServer::start().await;
    let state = tempfile::tempdir().unwrap();
    let jwt = jwt_for(4);
    Mock::given(method("POST"))
        .and(path("/api/auth/local"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jwt": jwt,
            "user": { "id": 4, "username": "ana", "email": "ana@example.com" }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/users/me"))
        .and(header("authorization", format!("Bearer {jwt}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 4, "username": "ana", "email": "ana@example.com"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let role = role_for(&server, &state).await;

    role.login("ana@example.com", "s3cretpass1").await.unwrap();
    let me = role.whoami().await.unwrap();

    assert_eq!(me.username, "ana");
}

#[tokio::test]
async fn account_login_translates_padded_server_message() {
    let server = MockServer::start().await;
    let state = tempfile::tempdir().unwrap();
    Mock::given(method("POST"))
        .and(path("/api/auth/local"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "status": 400, "message": "  Invalid identifier or password\n" }
        })))
        .mount(&server)
        .await;
    let role = role_for(&server, &state).await;

    let err = role.login("ana@example.com", "wrong").await.unwrap_err();

    assert_eq!(err.to_string(), "Invalid e-mail or password.");
}

#[tokio::test]
async fn account_expired_session_still_browses_home() {
    // Arrange - a stored token that expired long ago
    let server = MockServer::start().await;
    let state = tempfile::tempdir().unwrap();
    let header_part = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(json!({ "id": 4, "exp": 1 }).to_string());
    let jwt = format!("{header_part}.{payload}.c2ln");
    Mock::given(method("POST"))
        .and(path("/api/auth/local"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jwt": jwt,
            "user": { "id": 4, "username": "ana", "email": "ana@example.com" }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/events"))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": { "status": 401, "message": "Missing or invalid credentials" }
        })))
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "id": 1, "title": "Praia", "ownerID": 7 }],
            "meta": {}
        })))
        .mount(&server)
        .await;
    let role = role_for(&server, &state).await;
    role.login("ana@example.com", "s3cretpass1").await.unwrap();

    // Act
    let session = role.session().await.unwrap();
    let mut feed = role.home_feed();
    let backend = role.feed_backend(feed.scope(), Some(&session));
    let result = feed.load(&backend).await;

    // Assert - the public listing went out without the stale token
    assert!(result.is_ok(), "{result:?}");
    let ids: Vec<_> = feed.events().iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![EventId(1)]);

    // Assert - the owner scope still identifies the user
    let owner = role.feed_backend(FeedScope::Owner(UserId(4)), Some(&session));
    assert!(owner.is_authenticated());
}
