// SPDX-FileCopyrightText: 2025-2026 Zig Team <dev@zig-app.com.br>
//
// SPDX-License-Identifier: Apache-2.0

//! Authoring workflows: fill the draft, submit, and recover from failures.

use jiff::Zoned;
use role_core::{
    ComposeMode, Composer, DraftField, DraftImage, EventDraft, EventId, MediaId, Pick,
    SubmitError, TextField, TimeSlot, TimeSnap, UserId,
};

use crate::common::{
    Call, FakeBackend, Op, filled_composer, test_event, test_image, test_now, test_session,
};

#[tokio::test]
async fn compose_publishes_complete_draft() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let image = test_image(dir.path());
    let backend = FakeBackend::new();
    let mut composer = filled_composer(&image);

    // Act
    let event = composer
        .submit(&backend, &test_session(4), &test_now())
        .await
        .unwrap();

    // Assert - upload first, then create referencing the image and owner
    let calls = backend.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], Call::UploadImage(image));
    let Call::CreateEvent(input) = &calls[1] else {
        panic!("expected create, got {:?}", calls[1]);
    };
    assert_eq!(input.image, MediaId(42));
    assert_eq!(input.owner_id, UserId(4));
    assert_eq!(input.title, "Praia");
    assert_eq!(event.title, "Praia");

    // Assert - draft reset to blank
    assert_eq!(composer.draft(), &EventDraft::new(&test_now()));
    assert!(!composer.is_busy());
}

#[tokio::test]
async fn compose_blocks_incomplete_draft_without_calls() {
    let dir = tempfile::tempdir().unwrap();
    let backend = FakeBackend::new();
    let mut composer = filled_composer(&test_image(dir.path()));
    assert!(composer.can_submit());

    composer.set_text(TextField::Location, "");
    assert!(!composer.can_submit());

    let err = composer
        .submit(&backend, &test_session(4), &test_now())
        .await
        .unwrap_err();
    assert!(matches!(err, SubmitError::Incomplete(ref f) if f == &vec![DraftField::Location]));
    assert!(backend.calls().is_empty());
    assert_eq!(composer.draft().title, "Praia");
}

#[tokio::test]
async fn compose_each_missing_field_blocks_submit() {
    let dir = tempfile::tempdir().unwrap();
    let image = test_image(dir.path());

    for field in [TextField::Title, TextField::Description, TextField::Location] {
        let mut composer = filled_composer(&image);
        composer.set_text(field, "   ");
        assert!(!composer.can_submit(), "{field}");
    }

    let mut composer = Composer::new(&test_now(), TimeSnap::Exact);
    composer.set_text(TextField::Title, "Praia");
    composer.set_text(TextField::Description, "Dia de sol");
    composer.set_text(TextField::Location, "Ipanema");
    assert!(!composer.can_submit(), "image");
}

#[tokio::test]
async fn compose_rolls_back_upload_exactly_once_when_create_fails() {
    let dir = tempfile::tempdir().unwrap();
    let backend = FakeBackend::new().failing(Op::Create);
    let mut composer = filled_composer(&test_image(dir.path()));

    let err = composer
        .submit(&backend, &test_session(4), &test_now())
        .await
        .unwrap_err();

    assert!(matches!(err, SubmitError::Rejected(_)));
    assert_eq!(
        backend.count(|a| *a == Call::DeleteImage(MediaId(42))),
        1,
        "{:?}",
        backend.calls()
    );
    // Draft kept so the user can retry
    assert_eq!(composer.draft().title, "Praia");
    assert!(!composer.is_busy());
}

#[tokio::test]
async fn compose_rollback_failure_still_reports_rejection() {
    let dir = tempfile::tempdir().unwrap();
    let backend = FakeBackend::new()
        .failing(Op::Create)
        .failing(Op::DeleteImage);
    let mut composer = filled_composer(&test_image(dir.path()));

    let err = composer
        .submit(&backend, &test_session(4), &test_now())
        .await
        .unwrap_err();

    assert!(matches!(err, SubmitError::Rejected(_)));
    assert_eq!(backend.count(|a| matches!(a, Call::DeleteImage(_))), 1);
}

#[tokio::test]
async fn compose_upload_failure_skips_create() {
    let dir = tempfile::tempdir().unwrap();
    let backend = FakeBackend::new().failing(Op::Upload);
    let mut composer = filled_composer(&test_image(dir.path()));

    let err = composer
        .submit(&backend, &test_session(4), &test_now())
        .await
        .unwrap_err();

    assert!(matches!(err, SubmitError::Upload(_)));
    assert_eq!(backend.calls().len(), 1);
}

#[tokio::test]
async fn compose_missing_image_id_skips_create() {
    let dir = tempfile::tempdir().unwrap();
    let backend = FakeBackend::new().without_upload_id();
    let mut composer = filled_composer(&test_image(dir.path()));

    let err = composer
        .submit(&backend, &test_session(4), &test_now())
        .await
        .unwrap_err();

    assert!(matches!(err, SubmitError::MissingImageId));
    assert_eq!(backend.count(|a| matches!(a, Call::CreateEvent(_))), 0);
}

#[tokio::test]
async fn compose_edit_reuses_remote_image_and_updates() {
    let backend = FakeBackend::new().with_events(vec![test_event(7, 4, "Praia")]);
    let mut composer = Composer::edit(&test_event(7, 4, "Praia"), &test_now(), TimeSnap::Exact);
    assert_eq!(composer.mode(), ComposeMode::Edit(EventId(7)));
    assert!(matches!(composer.draft().image, Some(DraftImage::Remote(_))));

    composer.open_dialog(TextField::Title);
    composer.dialog_buffer_mut().unwrap().push_str(" no fim de semana");
    composer.save_dialog();

    let event = composer
        .submit(&backend, &test_session(4), &test_now())
        .await
        .unwrap();

    assert_eq!(event.title, "Praia no fim de semana");
    let calls = backend.calls();
    assert_eq!(calls.len(), 1);
    assert!(matches!(&calls[0], Call::UpdateEvent(id, input) if *id == EventId(7) && input.image == MediaId(70)));
}

#[tokio::test]
async fn compose_edit_success_returns_to_create_mode() {
    let backend = FakeBackend::new().with_events(vec![test_event(7, 4, "Praia")]);
    let mut composer = Composer::edit(&test_event(7, 4, "Praia"), &test_now(), TimeSnap::Exact);

    composer
        .submit(&backend, &test_session(4), &test_now())
        .await
        .unwrap();

    // the blank draft is a new event, not another edit of #7
    assert_eq!(composer.mode(), ComposeMode::Create);
    assert!(composer.draft().title.is_empty());

    let dir = tempfile::tempdir().unwrap();
    composer.pick_image(test_image(dir.path())).unwrap();
    composer.set_text(TextField::Title, "Trilha");
    composer.set_text(TextField::Description, "Pedra da Gávea");
    composer.set_text(TextField::Location, "Barra");
    composer
        .submit(&backend, &test_session(4), &test_now())
        .await
        .unwrap();

    assert_eq!(backend.count(|a| matches!(a, Call::UpdateEvent(..))), 1);
    assert_eq!(backend.count(|a| matches!(a, Call::CreateEvent(_))), 1);
}

#[tokio::test]
async fn compose_edit_rejection_keeps_remote_image() {
    let backend = FakeBackend::new().failing(Op::Update);
    let mut composer = Composer::edit(&test_event(7, 4, "Praia"), &test_now(), TimeSnap::Exact);

    let err = composer
        .submit(&backend, &test_session(4), &test_now())
        .await
        .unwrap_err();

    assert!(matches!(err, SubmitError::Rejected(_)));
    assert_eq!(backend.count(|a| matches!(a, Call::DeleteImage(_))), 0);
}

#[tokio::test]
async fn compose_dialog_cancel_leaves_draft() {
    let dir = tempfile::tempdir().unwrap();
    let mut composer = filled_composer(&test_image(dir.path()));

    composer.open_dialog(TextField::Location);
    *composer.dialog_buffer_mut().unwrap() = "Leblon".to_string();
    assert_eq!(composer.cancel_dialog(), Some(TextField::Location));

    assert_eq!(composer.draft().location, "Ipanema");
    assert!(!composer.dialog().is_open());
}

#[tokio::test]
async fn compose_picker_snaps_when_configured() {
    let mut composer = Composer::new(&test_now(), TimeSnap::HalfHour);
    let picked: Zoned = "2025-03-01T19:16:42-03:00[America/Sao_Paulo]".parse().unwrap();
    let expected: Zoned = "2025-03-01T19:30:00-03:00[America/Sao_Paulo]".parse().unwrap();

    assert!(composer.pick_time(TimeSlot::End, Pick::Selected(picked)));
    assert_eq!(composer.draft().end, expected);

    let before = composer.draft().start.clone();
    assert!(!composer.pick_time(TimeSlot::Start, Pick::Dismissed));
    assert_eq!(composer.draft().start, before);
}

#[tokio::test]
async fn compose_failed_image_pick_keeps_previous_image() {
    let dir = tempfile::tempdir().unwrap();
    let image = test_image(dir.path());
    let mut composer = filled_composer(&image);

    assert!(composer.pick_image(dir.path().join("missing.png")).is_err());
    assert!(matches!(&composer.draft().image, Some(DraftImage::Local(a)) if a.path() == image));
}
