// SPDX-FileCopyrightText: 2025-2026 Zig Team <dev@zig-app.com.br>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use jiff::{ToSpan, Zoned};
use role_strapi::{Event, EventInput, Media, MediaId, UserId};

use crate::dialog::TextField;
use crate::image::LocalImage;
use crate::picker::TimeSlot;

/// The image attached to a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftImage {
    /// A file on this device, uploaded on submit.
    Local(LocalImage),
    /// An image already stored on the server, reused as is.
    Remote(Media),
}

impl DraftImage {
    /// A short label for display.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Local(image) => image.path().display().to_string(),
            Self::Remote(media) => media.name.clone().unwrap_or_else(|| media.url.clone()),
        }
    }
}

/// A field that must be filled before an event can be published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    /// The cover image.
    Image,
    /// The title.
    Title,
    /// The description.
    Description,
    /// The location.
    Location,
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Image => write!(f, "image"),
            Self::Title => write!(f, "title"),
            Self::Description => write!(f, "description"),
            Self::Location => write!(f, "location"),
        }
    }
}

/// The in-progress, unsubmitted event being authored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    /// Title of the event.
    pub title: String,
    /// Start of the event.
    pub start: Zoned,
    /// End of the event. Not validated against the start.
    pub end: Zoned,
    /// Where the event takes place.
    pub location: String,
    /// Free-form description.
    pub description: String,
    /// The attached image, if any.
    pub image: Option<DraftImage>,
}

impl EventDraft {
    /// A blank draft starting at `now` and ending one hour later.
    #[must_use]
    pub fn new(now: &Zoned) -> Self {
        let end = now.checked_add(1.hour()).unwrap_or_else(|e| {
            tracing::warn!(%now, "failed to compute default end time: {e}");
            now.clone()
        });

        Self {
            title: String::new(),
            start: now.clone(),
            end,
            location: String::new(),
            description: String::new(),
            image: None,
        }
    }

    /// A draft prefilled from a published event.
    ///
    /// Missing dates fall back to the defaults of [`EventDraft::new`], and the
    /// event's image is kept as a remote reference.
    #[must_use]
    pub fn from_event(event: &Event, now: &Zoned) -> Self {
        let mut draft = Self::new(now);
        let tz = now.time_zone().clone();
        draft.title.clone_from(&event.title);
        draft.location.clone_from(&event.location);
        draft.description.clone_from(&event.description);
        if let Some(start) = event.start_date {
            draft.start = start.to_zoned(tz.clone());
        }
        if let Some(end) = event.end_date {
            draft.end = end.to_zoned(tz);
        }
        draft.image = event.image.clone().map(DraftImage::Remote);
        draft
    }

    /// Required fields that are still empty, in display order.
    ///
    /// Whitespace-only text counts as empty.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<DraftField> {
        let mut missing = Vec::new();
        if self.image.is_none() {
            missing.push(DraftField::Image);
        }
        if is_blank(&self.title) {
            missing.push(DraftField::Title);
        }
        if is_blank(&self.description) {
            missing.push(DraftField::Description);
        }
        if is_blank(&self.location) {
            missing.push(DraftField::Location);
        }
        missing
    }

    /// Whether all required fields are filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// The current value of a text field.
    #[must_use]
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Title => &self.title,
            TextField::Location => &self.location,
            TextField::Description => &self.description,
        }
    }

    /// Overwrites a text field.
    pub fn set_text(&mut self, field: TextField, value: impl Into<String>) {
        let target = match field {
            TextField::Title => &mut self.title,
            TextField::Location => &mut self.location,
            TextField::Description => &mut self.description,
        };
        *target = value.into();
    }

    /// The current value of a time slot.
    #[must_use]
    pub fn time(&self, slot: TimeSlot) -> &Zoned {
        match slot {
            TimeSlot::Start => &self.start,
            TimeSlot::End => &self.end,
        }
    }

    /// The id of the attached server image, if the draft reuses one.
    #[must_use]
    pub fn remote_image_id(&self) -> Option<MediaId> {
        match &self.image {
            Some(DraftImage::Remote(media)) => Some(media.id),
            _ => None,
        }
    }

    /// Builds the event payload with the uploaded image and the signed-in owner.
    #[must_use]
    pub fn to_input(&self, image: MediaId, owner: UserId) -> EventInput {
        EventInput {
            title: self.title.clone(),
            start_date: self.start.timestamp(),
            end_date: self.end.timestamp(),
            location: self.location.clone(),
            description: self.description.clone(),
            image,
            owner_id: owner,
        }
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
