// SPDX-FileCopyrightText: 2025-2026 Zig Team <dev@zig-app.com.br>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use jiff::Zoned;
use role_strapi::{Event, EventId, MediaId, StrapiError};

use crate::auth::AuthSession;
use crate::backend::Backend;
use crate::dialog::{Dialog, TextField};
use crate::draft::{DraftField, DraftImage, EventDraft};
use crate::image::{ImageError, LocalImage};
use crate::picker::{Pick, TimeSlot, TimeSnap, apply_pick};

/// Whether submitting publishes a new event or replaces an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeMode {
    /// Publish a new event.
    Create,
    /// Replace the fields of the given event.
    Edit(EventId),
}

/// Why a submission did not publish the draft.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// Required fields are still empty. Nothing was sent.
    #[error("Please fill in all fields (missing: {})", join_fields(.0))]
    Incomplete(Vec<DraftField>),

    /// A submission is already in flight.
    #[error("The event is already being published")]
    Busy,

    /// The image upload failed.
    #[error("Failed to upload the image: {0}")]
    Upload(#[source] StrapiError),

    /// The upload succeeded but the server reported no file id.
    #[error("The server did not return an id for the uploaded image")]
    MissingImageId,

    /// The server rejected the event.
    #[error("Failed to publish the event: {0}")]
    Rejected(#[source] StrapiError),
}

fn join_fields(fields: &[DraftField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// The event authoring screen: a draft, its field dialog and the submit action.
#[derive(Debug)]
pub struct Composer {
    mode: ComposeMode,
    draft: EventDraft,
    dialog: Dialog,
    snap: TimeSnap,
    busy: bool,
}

impl Composer {
    /// A composer for a new event starting `now`.
    #[must_use]
    pub fn new(now: &Zoned, snap: TimeSnap) -> Self {
        Self {
            mode: ComposeMode::Create,
            draft: EventDraft::new(now),
            dialog: Dialog::Closed,
            snap,
            busy: false,
        }
    }

    /// A composer editing a published event, prefilled with its fields.
    #[must_use]
    pub fn edit(event: &Event, now: &Zoned, snap: TimeSnap) -> Self {
        Self {
            mode: ComposeMode::Edit(event.id),
            draft: EventDraft::from_event(event, now),
            dialog: Dialog::Closed,
            snap,
            busy: false,
        }
    }

    /// Create or edit.
    #[must_use]
    pub fn mode(&self) -> ComposeMode {
        self.mode
    }

    /// The current draft.
    #[must_use]
    pub fn draft(&self) -> &EventDraft {
        &self.draft
    }

    /// The field dialog.
    #[must_use]
    pub fn dialog(&self) -> &Dialog {
        &self.dialog
    }

    /// Whether a submission is in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Whether the submit action is enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.busy && self.draft.is_complete()
    }

    /// Sets a text field directly, bypassing the dialog.
    pub fn set_text(&mut self, field: TextField, value: impl Into<String>) {
        self.draft.set_text(field, value);
    }

    /// Attaches an image from the local file system.
    ///
    /// On failure the current image is kept.
    pub fn pick_image(&mut self, path: impl AsRef<Path>) -> Result<(), ImageError> {
        let image = LocalImage::pick(path)?;
        self.draft.image = Some(DraftImage::Local(image));
        Ok(())
    }

    /// Applies the outcome of the date/time picker bound to `slot`.
    pub fn pick_time(&mut self, slot: TimeSlot, pick: Pick) -> bool {
        apply_pick(&mut self.draft, slot, pick, self.snap)
    }

    /// Opens the dialog for `field`, replacing any open one.
    pub fn open_dialog(&mut self, field: TextField) {
        let current = self.draft.text(field).to_string();
        self.dialog.open(field, &current);
    }

    /// The open dialog's buffer.
    pub fn dialog_buffer_mut(&mut self) -> Option<&mut String> {
        self.dialog.buffer_mut()
    }

    /// Commits the open dialog into the draft.
    pub fn save_dialog(&mut self) -> Option<TextField> {
        self.dialog.save(&mut self.draft)
    }

    /// Closes the open dialog without touching the draft.
    pub fn cancel_dialog(&mut self) -> Option<TextField> {
        self.dialog.cancel()
    }

    /// Publishes the draft.
    ///
    /// A local image is uploaded first, then the event is created (or updated in
    /// edit mode) referencing it, owned by the session's user. If the server
    /// rejects the event, an image uploaded by this call is deleted again. On
    /// success the draft is reset to a blank one starting at `now` and the
    /// composer goes back to creating new events.
    pub async fn submit(
        &mut self,
        backend: &dyn Backend,
        session: &AuthSession,
        now: &Zoned,
    ) -> Result<Event, SubmitError> {
        if self.busy {
            return Err(SubmitError::Busy);
        }

        let missing = self.draft.missing_fields();
        if !missing.is_empty() {
            tracing::debug!(?missing, "submission blocked");
            return Err(SubmitError::Incomplete(missing));
        }

        if session.is_expired(now.timestamp()) {
            tracing::warn!(user = %session.user_id, "session token looks expired, trying anyway");
        }

        let busy = BusyGuard::hold(&mut self.busy);
        let result = publish(&self.draft, self.mode, backend, session).await;
        drop(busy);

        let event = result?;
        tracing::info!(id = %event.id, mode = ?self.mode, "event published");
        self.draft = EventDraft::new(now);
        self.dialog = Dialog::Closed;
        self.mode = ComposeMode::Create;
        Ok(event)
    }
}

/// Keeps the busy flag raised until dropped, also when the submit future is.
struct BusyGuard<'a>(&'a mut bool);

impl<'a> BusyGuard<'a> {
    fn hold(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

async fn publish(
    draft: &EventDraft,
    mode: ComposeMode,
    backend: &dyn Backend,
    session: &AuthSession,
) -> Result<Event, SubmitError> {
    let (image, uploaded) = match &draft.image {
        Some(DraftImage::Remote(media)) => (media.id, None),
        Some(DraftImage::Local(local)) => {
            let id = backend
                .upload_image(local)
                .await
                .map_err(SubmitError::Upload)?
                .ok_or(SubmitError::MissingImageId)?;
            tracing::debug!(%id, "image uploaded");
            (id, Some(id))
        }
        None => return Err(SubmitError::Incomplete(vec![DraftField::Image])),
    };

    let input = draft.to_input(image, session.user_id);
    let result = match mode {
        ComposeMode::Create => backend.create_event(&input).await,
        ComposeMode::Edit(id) => backend.update_event(id, &input).await,
    };

    match result {
        Ok(event) => Ok(event),
        Err(e) => {
            if let Some(id) = uploaded {
                rollback_upload(backend, id).await;
            }
            Err(SubmitError::Rejected(e))
        }
    }
}

async fn rollback_upload(backend: &dyn Backend, id: MediaId) {
    match backend.delete_image(id).await {
        Ok(()) => tracing::debug!(%id, "uploaded image rolled back"),
        Err(e) => tracing::warn!(%id, "failed to delete uploaded image: {e}"),
    }
}
