// SPDX-FileCopyrightText: 2025-2026 Zig Team <dev@zig-app.com.br>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use crate::tui::compose_store::EditorRow;

type Callback = Rc<RefCell<dyn FnMut(&Action)>>;

pub struct Dispatcher {
    subscribers: Vec<Callback>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    pub fn register(&mut self, callback: Callback) {
        self.subscribers.push(callback);
    }

    pub fn dispatch(&mut self, action: Action) {
        tracing::trace!(?action, "dispatch");
        for sub in &self.subscribers {
            (sub.borrow_mut())(&action);
        }
    }
}

#[derive(Debug, Clone)]
pub enum Action {
    DismissAlert,

    // editor
    OpenField(EditorRow),
    UpdateBuffer(String),
    SaveField,
    CancelField,
    Publish,

    // feed
    Select(isize),
    ToggleExpanded,
    ToggleConfirmed,
    Refresh,
    EditSelected,
    AskDelete,
    ConfirmDelete,
    CancelDelete,
}
