// SPDX-FileCopyrightText: 2025-2026 Zig Team <dev@zig-app.com.br>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use crate::draft::EventDraft;

/// A string attribute of the draft that is edited through a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    /// Title of the event.
    Title,
    /// Where the event takes place.
    Location,
    /// Free-form description.
    Description,
}

impl TextField {
    /// Heading shown on the dialog.
    #[must_use]
    pub const fn dialog_title(self) -> &'static str {
        match self {
            Self::Title => "Add name",
            Self::Location => "Add location",
            Self::Description => "Event description",
        }
    }

    /// Hint shown while the buffer is empty.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Title => "Give your event a name",
            Self::Location => "Enter the location",
            Self::Description => "What is going to happen?",
        }
    }
}

impl fmt::Display for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title => write!(f, "Title"),
            Self::Location => write!(f, "Location"),
            Self::Description => write!(f, "Description"),
        }
    }
}

/// The field editor dialog. At most one field is edited at a time.
///
/// The buffer only reaches the draft on [`Dialog::save`]; [`Dialog::cancel`]
/// drops it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Dialog {
    /// No dialog is shown.
    #[default]
    Closed,
    /// A dialog is editing `field` with the uncommitted `buffer`.
    Open {
        /// The field being edited.
        field: TextField,
        /// The uncommitted value.
        buffer: String,
    },
}

impl Dialog {
    /// Opens the dialog for `field`, seeded with its current value.
    ///
    /// A dialog that is already open is replaced and its buffer discarded; the
    /// replaced field is returned.
    pub fn open(&mut self, field: TextField, current: &str) -> Option<TextField> {
        let previous = self.field();
        if let Some(previous) = previous {
            tracing::debug!(%previous, %field, "replacing open dialog");
        }
        *self = Self::Open {
            field,
            buffer: current.to_string(),
        };
        previous
    }

    /// Whether a dialog is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// The field being edited, if any.
    #[must_use]
    pub fn field(&self) -> Option<TextField> {
        match self {
            Self::Open { field, .. } => Some(*field),
            Self::Closed => None,
        }
    }

    /// The uncommitted value, if a dialog is open.
    #[must_use]
    pub fn buffer(&self) -> Option<&str> {
        match self {
            Self::Open { buffer, .. } => Some(buffer),
            Self::Closed => None,
        }
    }

    /// Mutable access to the uncommitted value, if a dialog is open.
    pub fn buffer_mut(&mut self) -> Option<&mut String> {
        match self {
            Self::Open { buffer, .. } => Some(buffer),
            Self::Closed => None,
        }
    }

    /// Replaces the uncommitted value. Returns `false` when no dialog is open.
    pub fn set_buffer(&mut self, value: impl Into<String>) -> bool {
        match self.buffer_mut() {
            Some(buffer) => {
                *buffer = value.into();
                true
            }
            None => false,
        }
    }

    /// Commits the buffer into the draft and closes the dialog.
    pub fn save(&mut self, draft: &mut EventDraft) -> Option<TextField> {
        match std::mem::take(self) {
            Self::Open { field, buffer } => {
                draft.set_text(field, buffer);
                Some(field)
            }
            Self::Closed => None,
        }
    }

    /// Closes the dialog, discarding the buffer.
    pub fn cancel(&mut self) -> Option<TextField> {
        match std::mem::take(self) {
            Self::Open { field, .. } => Some(field),
            Self::Closed => None,
        }
    }
}
