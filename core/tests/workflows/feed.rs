// SPDX-FileCopyrightText: 2025-2026 Zig Team <dev@zig-app.com.br>
//
// SPDX-License-Identifier: Apache-2.0

//! Listing workflows: home and profile feeds.

use role_core::{EventFeed, EventId, FeedError, FeedScope, TimeSnap, UserId, ViewState};

use crate::common::{Call, FakeBackend, Op, test_event, test_now};

fn ids(feed: &EventFeed) -> Vec<EventId> {
    feed.events().iter().map(|a| a.id).collect()
}

#[tokio::test]
async fn feed_home_lists_everything() {
    let backend = FakeBackend::new().with_events(vec![
        test_event(1, 4, "Praia"),
        test_event(2, 5, "Trilha"),
    ]);
    let mut feed = EventFeed::new(FeedScope::All);

    feed.load(&backend).await.unwrap();

    assert_eq!(feed.state(), ViewState::Ready);
    assert_eq!(ids(&feed), vec![EventId(1), EventId(2)]);
    assert_eq!(backend.calls(), vec![Call::ListEvents]);
}

#[tokio::test]
async fn feed_profile_filters_by_owner() {
    let backend = FakeBackend::new().with_events(vec![
        test_event(1, 4, "Praia"),
        test_event(2, 5, "Trilha"),
    ]);
    let mut feed = EventFeed::new(FeedScope::Owner(UserId(4)));

    feed.load(&backend).await.unwrap();

    assert_eq!(ids(&feed), vec![EventId(1)]);
    assert_eq!(backend.calls(), vec![Call::ListEventsByOwner(UserId(4))]);
}

#[tokio::test]
async fn feed_delete_removes_exactly_one_event_with_one_call() {
    let backend = FakeBackend::new().with_events(vec![
        test_event(1, 4, "Praia"),
        test_event(2, 4, "Trilha"),
        test_event(3, 4, "Show"),
    ]);
    let mut feed = EventFeed::new(FeedScope::Owner(UserId(4)));
    feed.load(&backend).await.unwrap();
    feed.toggle_expanded(EventId(2));

    feed.delete(&backend, EventId(2)).await.unwrap();

    assert_eq!(ids(&feed), vec![EventId(1), EventId(3)]);
    assert_eq!(backend.count(|a| matches!(a, Call::DeleteEvent(_))), 1);
    assert!(!feed.is_expanded(EventId(2)));
}

#[tokio::test]
async fn feed_failed_delete_keeps_list() {
    let backend = FakeBackend::new()
        .with_events(vec![test_event(1, 4, "Praia")])
        .failing(Op::Delete);
    let mut feed = EventFeed::new(FeedScope::Owner(UserId(4)));
    feed.load(&backend).await.unwrap();

    let err = feed.delete(&backend, EventId(1)).await.unwrap_err();

    assert!(matches!(err, FeedError::Delete(_)));
    assert_eq!(ids(&feed), vec![EventId(1)]);
}

#[tokio::test]
async fn feed_delete_unknown_or_from_home_sends_nothing() {
    let backend = FakeBackend::new().with_events(vec![test_event(1, 4, "Praia")]);

    let mut profile = EventFeed::new(FeedScope::Owner(UserId(4)));
    profile.load(&backend).await.unwrap();
    let err = profile.delete(&backend, EventId(9)).await.unwrap_err();
    assert!(matches!(err, FeedError::UnknownEvent(EventId(9))));

    let mut home = EventFeed::new(FeedScope::All);
    home.load(&backend).await.unwrap();
    let err = home.delete(&backend, EventId(1)).await.unwrap_err();
    assert!(matches!(err, FeedError::NotOwner));

    assert_eq!(backend.count(|a| matches!(a, Call::DeleteEvent(_))), 0);
}

#[tokio::test]
async fn feed_refresh_keeps_events_on_failure() {
    let backend = FakeBackend::new().with_events(vec![test_event(1, 4, "Praia")]);
    let mut feed = EventFeed::new(FeedScope::All);
    feed.load(&backend).await.unwrap();

    let failing = FakeBackend::new().failing(Op::List);
    let err = feed.refresh(&failing).await.unwrap_err();

    assert!(matches!(err, FeedError::Fetch(_)));
    assert_eq!(feed.state(), ViewState::Ready);
    assert_eq!(ids(&feed), vec![EventId(1)]);
}

#[tokio::test]
async fn feed_refresh_prunes_flags_of_vanished_events() {
    let backend = FakeBackend::new().with_events(vec![
        test_event(1, 4, "Praia"),
        test_event(2, 4, "Trilha"),
    ]);
    let mut feed = EventFeed::new(FeedScope::All);
    feed.load(&backend).await.unwrap();
    feed.toggle_confirmed(EventId(1));
    feed.toggle_confirmed(EventId(2));

    let backend = FakeBackend::new().with_events(vec![test_event(2, 4, "Trilha")]);
    feed.refresh(&backend).await.unwrap();

    assert!(!feed.is_confirmed(EventId(1)));
    assert!(feed.is_confirmed(EventId(2)));
}

#[tokio::test]
async fn feed_composer_for_prefills_owned_event() {
    let backend = FakeBackend::new().with_events(vec![test_event(1, 4, "Praia")]);
    let mut feed = EventFeed::new(FeedScope::Owner(UserId(4)));
    feed.load(&backend).await.unwrap();

    let composer = feed
        .composer_for(EventId(1), &test_now(), TimeSnap::Exact)
        .unwrap();

    assert_eq!(composer.draft().title, "Praia");
    assert_eq!(composer.draft().location, "Ipanema");
    assert!(composer.can_submit());
}
