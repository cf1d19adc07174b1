// SPDX-FileCopyrightText: 2025-2026 Zig Team <dev@zig-app.com.br>
//
// SPDX-License-Identifier: Apache-2.0

//! Submission and deletion through the real Strapi client against a mock server.

use std::time::Duration;

use role_core::{EventFeed, EventId, FeedScope, StrapiClient, StrapiConfig, SubmitError, UserId};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{FakeBackend, filled_composer, test_image, test_now, test_session};

fn client_for(server: &MockServer) -> StrapiClient {
    let config = StrapiConfig {
        base_url: format!("{}/api", server.uri()),
        ..Default::default()
    };
    StrapiClient::new(&config).unwrap().with_token("a.b.c")
}

async fn mount_upload(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/upload"))
        .and(header("authorization", "Bearer a.b.c"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([
            { "id": 9, "url": "/uploads/praia.png", "name": "praia.png", "mime": "image/png" }
        ])))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn roundtrip_submit_uploads_then_creates() {
    let server = MockServer::start().await;
    mount_upload(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/events"))
        .and(body_partial_json(json!({
            "data": { "title": "Praia", "image": 9, "ownerID": 4 }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": {
                "id": 11,
                "title": "Praia",
                "startDate": "2025-03-01T17:07:00.000Z",
                "endDate": "2025-03-01T18:07:00.000Z",
                "location": "Ipanema",
                "description": "Dia de sol",
                "ownerID": 4
            }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut composer = filled_composer(&test_image(dir.path()));
    let event = composer
        .submit(&client_for(&server), &test_session(4), &test_now())
        .await
        .unwrap();

    assert_eq!(event.id, EventId(11));
    assert!(composer.draft().title.is_empty());
}

#[tokio::test]
async fn roundtrip_rejected_create_deletes_uploaded_image_once() {
    let server = MockServer::start().await;
    mount_upload(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "status": 400, "message": "title must be unique" }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/upload/files/9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 9 })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut composer = filled_composer(&test_image(dir.path()));
    let err = composer
        .submit(&client_for(&server), &test_session(4), &test_now())
        .await
        .unwrap_err();

    let SubmitError::Rejected(source) = err else {
        panic!("expected rejection, got {err:?}");
    };
    assert_eq!(source.server_message(), Some("title must be unique"));
}

#[tokio::test]
async fn roundtrip_profile_delete() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/events"))
        .and(query_param("filters[ownerID][$eq]", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                { "id": 1, "title": "Praia", "ownerID": 4 },
                { "id": 2, "title": "Trilha", "ownerID": 4 }
            ],
            "meta": {}
        })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/events/2"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut feed = EventFeed::new(FeedScope::Owner(UserId(4)));
    feed.load(&client).await.unwrap();
    feed.delete(&client, EventId(2)).await.unwrap();

    let ids: Vec<_> = feed.events().iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![EventId(1)]);
}

#[tokio::test]
async fn roundtrip_abandoned_submit_leaves_composer_usable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/upload"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!([{ "id": 9, "url": "/uploads/praia.png" }]))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut composer = filled_composer(&test_image(dir.path()));
    let client = client_for(&server);
    let session = test_session(4);
    let now = test_now();

    let pending = composer.submit(&client, &session, &now);
    let outcome = tokio::time::timeout(Duration::from_millis(200), pending).await;
    assert!(outcome.is_err(), "upload should still be in flight");

    assert!(!composer.is_busy());
    assert!(composer.can_submit());
    let event = composer
        .submit(&FakeBackend::new(), &session, &now)
        .await
        .unwrap();
    assert_eq!(event.title, "Praia");
}
