// SPDX-FileCopyrightText: 2025-2026 Zig Team <dev@zig-app.com.br>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::tui::component::{Component, Message};
use crate::tui::component_form::{Access, FieldItem, FieldList, ItemState, LineInput};
use crate::tui::component_page::{SinglePage, modal_inner, render_alert, render_modal};
use crate::tui::compose_store::{ComposeStore, EditorRow};
use crate::tui::dispatcher::{Action, Dispatcher};

const KEYS: &[(&str, &str)] = &[
    ("Prev", "<Up>"),
    ("Next", "<Down>"),
    ("Edit", "<Enter>"),
    ("Publish", "<p>"),
    ("Exit", "<Esc>"),
];

const POPUP_WIDTH: u16 = 64;
const POPUP_HEIGHT: u16 = 4;

/// Full-screen editor of an event draft.
pub struct EventEditor {
    page: SinglePage<ComposeStore, FieldList<ComposeStore, FieldRow>>,
    input: LineInput<ComposeStore, BufferAccess>,
}

impl EventEditor {
    pub fn new() -> Self {
        let rows = EditorRow::ALL.into_iter().map(FieldRow::new).collect();
        Self {
            page: SinglePage::new(ComposeStore::title, KEYS, FieldList::new(rows)),
            input: LineInput::new(),
        }
    }
}

impl Component<ComposeStore> for EventEditor {
    fn render(&self, store: &RefCell<ComposeStore>, area: Rect, buf: &mut Buffer) {
        self.page.render(store, area, buf);

        let s = store.borrow();
        if let Some(message) = &s.alert {
            render_alert(message, area, buf);
        } else if let Some(title) = s.popup_title() {
            let inner = render_modal(title, Color::Blue, POPUP_WIDTH, POPUP_HEIGHT, area, buf);
            let [input, hint] =
                Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(inner);
            self.input.render(store, input, buf);
            let keys = Line::from(vec![
                " Save ".into(),
                "<Enter>".blue().bold(),
                " Cancel ".into(),
                "<Esc> ".blue().bold(),
            ]);
            Paragraph::new(keys.centered()).render(hint, buf);
        }
    }

    fn get_cursor_position(&self, store: &RefCell<ComposeStore>, area: Rect) -> Option<(u16, u16)> {
        let s = store.borrow();
        if s.alert.is_some() || s.buffer().is_none() {
            return None;
        }
        drop(s);

        let inner = modal_inner(POPUP_WIDTH, POPUP_HEIGHT, area);
        self.input.get_cursor_position(store, inner)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<ComposeStore>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        if store.borrow().alert.is_some() {
            if matches!(event.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                dispatcher.dispatch(Action::DismissAlert);
            }
            return Some(Message::Handled);
        }

        if store.borrow().buffer().is_some() {
            let action = match event.code {
                KeyCode::Enter => Action::SaveField,
                KeyCode::Esc => Action::CancelField,
                _ => {
                    let inner = modal_inner(POPUP_WIDTH, POPUP_HEIGHT, area);
                    return self
                        .input
                        .on_key(dispatcher, store, inner, event)
                        .or(Some(Message::Handled));
                }
            };
            dispatcher.dispatch(action);
            self.input.deactivate(dispatcher, store);
            return Some(Message::Handled);
        }

        if event.code == KeyCode::Char('p') {
            dispatcher.dispatch(Action::Publish);
            // leave the loop so the caller can publish
            return match store.borrow().request {
                Some(_) => Some(Message::Exit),
                None => Some(Message::Handled),
            };
        }

        let msg = self.page.on_key(dispatcher, store, area, event);
        if store.borrow().buffer().is_some() {
            self.input.activate(dispatcher, store);
        }
        msg
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<ComposeStore>) {
        self.page.activate(dispatcher, store);
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<ComposeStore>) {
        self.page.deactivate(dispatcher, store);
    }
}

/// A read-only row of the form; Enter opens its dialog.
struct FieldRow {
    row: EditorRow,
    active: bool,
}

impl FieldRow {
    fn new(row: EditorRow) -> Self {
        Self { row, active: false }
    }
}

impl Component<ComposeStore> for FieldRow {
    fn render(&self, store: &RefCell<ComposeStore>, area: Rect, buf: &mut Buffer) {
        let value = store.borrow().value(self.row);
        if value.is_empty() {
            Paragraph::new("(empty)").dark_gray().render(area, buf);
        } else {
            Paragraph::new(value).render(area, buf);
        }
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        _store: &RefCell<ComposeStore>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        match event.code {
            KeyCode::Enter if self.active => {
                dispatcher.dispatch(Action::OpenField(self.row));
                Some(Message::CursorUpdated)
            }
            _ => None,
        }
    }

    fn activate(&mut self, _dispatcher: &mut Dispatcher, _store: &RefCell<ComposeStore>) {
        self.active = true;
    }

    fn deactivate(&mut self, _dispatcher: &mut Dispatcher, _store: &RefCell<ComposeStore>) {
        self.active = false;
    }
}

impl FieldItem<ComposeStore> for FieldRow {
    fn item_title(&self, _store: &RefCell<ComposeStore>) -> String {
        self.row.to_string()
    }

    fn item_state(&self, store: &RefCell<ComposeStore>) -> ItemState {
        if self.active {
            ItemState::Focused
        } else if store.borrow().is_missing(self.row) {
            ItemState::Missing
        } else {
            ItemState::Idle
        }
    }
}

struct BufferAccess;

impl Access<ComposeStore, String> for BufferAccess {
    fn get(store: &RefCell<ComposeStore>) -> String {
        store.borrow().buffer().unwrap_or_default().to_owned()
    }

    fn set(dispatcher: &mut Dispatcher, value: String) -> bool {
        dispatcher.dispatch(Action::UpdateBuffer(value));
        true
    }

    fn placeholder(store: &RefCell<ComposeStore>) -> Option<&'static str> {
        store.borrow().placeholder()
    }
}
