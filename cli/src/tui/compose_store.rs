// SPDX-FileCopyrightText: 2025-2026 Zig Team <dev@zig-app.com.br>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, fmt, rc::Rc};

use jiff::Zoned;
use role_core::{
    ComposeMode, Composer, DraftField, DraftImage, Pick, SubmitError, TextField, TimeSlot,
};

use crate::tui::dispatcher::{Action, Dispatcher};
use crate::util::{format_datetime, parse_datetime};

/// One row of the event editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorRow {
    Image,
    Title,
    Start,
    End,
    Location,
    Description,
}

impl EditorRow {
    pub const ALL: [EditorRow; 6] = [
        Self::Image,
        Self::Title,
        Self::Start,
        Self::End,
        Self::Location,
        Self::Description,
    ];

    pub fn text_field(self) -> Option<TextField> {
        match self {
            Self::Title => Some(TextField::Title),
            Self::Location => Some(TextField::Location),
            Self::Description => Some(TextField::Description),
            Self::Image | Self::Start | Self::End => None,
        }
    }

    fn draft_field(self) -> Option<DraftField> {
        match self {
            Self::Image => Some(DraftField::Image),
            Self::Title => Some(DraftField::Title),
            Self::Location => Some(DraftField::Location),
            Self::Description => Some(DraftField::Description),
            Self::Start | Self::End => None,
        }
    }
}

impl fmt::Display for EditorRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Image => write!(f, "Image"),
            Self::Title => write!(f, "Title"),
            Self::Start => write!(f, "Start"),
            Self::End => write!(f, "End"),
            Self::Location => write!(f, "Location"),
            Self::Description => write!(f, "Description"),
        }
    }
}

/// Input box for the rows that have no text dialog of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub kind: PromptKind,
    pub buffer: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Time(TimeSlot),
    Image,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeRequest {
    Publish,
}

#[derive(Debug)]
pub struct ComposeStore {
    pub composer: Composer,
    pub prompt: Option<Prompt>,
    pub alert: Option<String>,
    pub request: Option<ComposeRequest>,
    now: Zoned,
}

impl ComposeStore {
    pub fn new(composer: Composer, now: Zoned) -> Self {
        Self {
            composer,
            prompt: None,
            alert: None,
            request: None,
            now,
        }
    }

    pub fn title(&self) -> String {
        let title = match self.composer.mode() {
            ComposeMode::Create => "New Event".to_string(),
            ComposeMode::Edit(id) => format!("Edit Event #{id}"),
        };
        match self.request {
            Some(ComposeRequest::Publish) => format!("{title} (publishing...)"),
            None => title,
        }
    }

    /// The text shown on a row.
    pub fn value(&self, row: EditorRow) -> String {
        let draft = self.composer.draft();
        match row {
            EditorRow::Image => draft.image.as_ref().map(DraftImage::label).unwrap_or_default(),
            EditorRow::Start => format_datetime(draft.time(TimeSlot::Start)),
            EditorRow::End => format_datetime(draft.time(TimeSlot::End)),
            _ => row
                .text_field()
                .map(|f| draft.text(f).to_string())
                .unwrap_or_default(),
        }
    }

    pub fn is_missing(&self, row: EditorRow) -> bool {
        row.draft_field()
            .is_some_and(|f| self.composer.draft().missing_fields().contains(&f))
    }

    /// Title of the open dialog or prompt.
    pub fn popup_title(&self) -> Option<&'static str> {
        if let Some(field) = self.composer.dialog().field() {
            return Some(field.dialog_title());
        }
        self.prompt.as_ref().map(|a| match a.kind {
            PromptKind::Time(TimeSlot::Start) => "Starts at",
            PromptKind::Time(TimeSlot::End) => "Ends at",
            PromptKind::Image => "Image file",
        })
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        if let Some(field) = self.composer.dialog().field() {
            return Some(field.placeholder());
        }
        self.prompt.as_ref().map(|a| match a.kind {
            PromptKind::Time(_) => "YYYY-MM-DD HH:MM",
            PromptKind::Image => "Path to a jpg, png, gif, webp or heic file",
        })
    }

    /// The buffer of the open dialog or prompt.
    pub fn buffer(&self) -> Option<&str> {
        self.composer
            .dialog()
            .buffer()
            .or(self.prompt.as_ref().map(|a| a.buffer.as_str()))
    }

    fn open(&mut self, row: EditorRow) {
        if self.alert.is_some() || self.buffer().is_some() {
            return;
        }

        match row {
            EditorRow::Title | EditorRow::Location | EditorRow::Description => {
                if let Some(field) = row.text_field() {
                    self.composer.open_dialog(field);
                }
            }
            EditorRow::Start | EditorRow::End => {
                let slot = match row {
                    EditorRow::Start => TimeSlot::Start,
                    _ => TimeSlot::End,
                };
                self.prompt = Some(Prompt {
                    kind: PromptKind::Time(slot),
                    buffer: format_datetime(self.composer.draft().time(slot)),
                });
            }
            EditorRow::Image => {
                self.prompt = Some(Prompt {
                    kind: PromptKind::Image,
                    buffer: String::new(),
                });
            }
        }
    }

    fn update_buffer(&mut self, value: &str) {
        if let Some(buffer) = self.composer.dialog_buffer_mut() {
            value.clone_into(buffer);
        } else if let Some(prompt) = &mut self.prompt {
            value.clone_into(&mut prompt.buffer);
        }
    }

    fn save(&mut self) {
        if self.composer.save_dialog().is_some() {
            return;
        }

        let Some(prompt) = self.prompt.take() else {
            return;
        };
        match prompt.kind {
            PromptKind::Time(slot) => match parse_datetime(&self.now, &prompt.buffer) {
                Ok(t) => {
                    self.composer.pick_time(slot, Pick::Selected(t));
                }
                Err(e) => self.alert = Some(e.to_string()),
            },
            PromptKind::Image => {
                if let Err(e) = self.composer.pick_image(prompt.buffer.trim()) {
                    tracing::debug!("image rejected: {e}");
                    self.alert = Some(e.to_string());
                }
            }
        }
    }

    fn cancel(&mut self) {
        if self.composer.cancel_dialog().is_some() {
            return;
        }

        if let Some(Prompt {
            kind: PromptKind::Time(slot),
            ..
        }) = self.prompt.take()
        {
            self.composer.pick_time(slot, Pick::Dismissed);
        }
    }

    fn publish(&mut self) {
        if self.alert.is_some() || self.buffer().is_some() {
            return;
        }

        let missing = self.composer.draft().missing_fields();
        if missing.is_empty() {
            self.request = Some(ComposeRequest::Publish);
        } else {
            self.alert = Some(SubmitError::Incomplete(missing).to_string());
        }
    }

    pub fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher) {
        let callback = Rc::new(RefCell::new(move |action: &Action| {
            let mut that = that.borrow_mut();
            match action {
                Action::DismissAlert => that.alert = None,
                Action::OpenField(row) => that.open(*row),
                Action::UpdateBuffer(v) => that.update_buffer(v),
                Action::SaveField => that.save(),
                Action::CancelField => that.cancel(),
                Action::Publish => that.publish(),
                _ => (),
            }
        }));
        dispatcher.register(callback);
    }
}
