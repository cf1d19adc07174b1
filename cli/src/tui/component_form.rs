// SPDX-FileCopyrightText: 2025-2026 Zig Team <dev@zig-app.com.br>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;
use std::marker::PhantomData;

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::Dispatcher;

/// Each field takes a title line and a value line.
const ITEM_HEIGHT: u16 = 2;

/// A vertical list of fields drawn as steps joined by a connector line.
pub struct FieldList<S, C: FieldItem<S>> {
    items: Vec<C>,
    focus: usize,
    _phantom: PhantomData<S>,
}

impl<S, C: FieldItem<S>> FieldList<S, C> {
    pub fn new(items: Vec<C>) -> Self {
        Self {
            items,
            focus: 0,
            _phantom: PhantomData,
        }
    }

    fn item_area(&self, area: Rect, index: usize) -> Option<Rect> {
        let inner = area.inner(Margin::new(1, 1));
        let y = inner.y + u16::try_from(index).ok()? * ITEM_HEIGHT;
        (y + ITEM_HEIGHT <= inner.bottom()).then(|| Rect::new(inner.x, y, inner.width, ITEM_HEIGHT))
    }

    fn move_focus(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>, to: usize) {
        if let Some(item) = self.items.get_mut(self.focus) {
            item.deactivate(dispatcher, store);
        }
        self.focus = to;
        if let Some(item) = self.items.get_mut(self.focus) {
            item.activate(dispatcher, store);
        }
    }
}

impl<S, C: FieldItem<S>> Component<S> for FieldList<S, C> {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        let last = self.items.len().saturating_sub(1);
        for (i, item) in self.items.iter().enumerate() {
            let Some(item_area) = self.item_area(area, i) else {
                break;
            };
            render_step(i == last, item, store, item_area, buf);
            let value_area = Rect::new(
                item_area.x + 2,
                item_area.y + 1,
                item_area.width.saturating_sub(2),
                1,
            );
            item.render(store, value_area, buf);
        }
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let item_area = self.item_area(area, self.focus).unwrap_or_default();
        if let Some(item) = self.items.get_mut(self.focus)
            && let Some(msg) = item.on_key(dispatcher, store, item_area, event)
        {
            return Some(msg);
        }

        let to = match event.code {
            KeyCode::Up | KeyCode::BackTab => self.focus.checked_sub(1)?,
            KeyCode::Down | KeyCode::Tab => Some(self.focus + 1).filter(|&i| i < self.items.len())?,
            _ => return None,
        };
        self.move_focus(dispatcher, store, to);
        Some(Message::CursorUpdated)
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        if let Some(item) = self.items.get_mut(self.focus) {
            item.activate(dispatcher, store);
        }
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        if let Some(item) = self.items.get_mut(self.focus) {
            item.deactivate(dispatcher, store);
        }
    }
}

pub trait FieldItem<S>: Component<S> {
    fn item_title(&self, store: &RefCell<S>) -> String;
    fn item_state(&self, store: &RefCell<S>) -> ItemState;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemState {
    Focused,
    Idle,

    /// A required field that is still empty.
    Missing,
}

const STEP_FOCUSED: &str = "◆";
const STEP_IDLE: &str = "◇";
const STEP_MISSING: &str = "▲";
const CONNECTOR: &str = "│";
const CONNECTOR_END: &str = "└";

fn render_step<S>(
    is_last: bool,
    item: &impl FieldItem<S>,
    store: &RefCell<S>,
    area: Rect,
    buf: &mut Buffer,
) {
    let state = item.item_state(store);
    let (color, symbol) = match state {
        ItemState::Focused => (Color::Blue, STEP_FOCUSED),
        ItemState::Idle => (Color::Gray, STEP_IDLE),
        ItemState::Missing => (Color::Yellow, STEP_MISSING),
    };

    let title_area = Rect::new(area.x + 2, area.y, area.width.saturating_sub(2), 1);
    Clear.render(title_area, buf);
    let mut title = vec![Span::from(item.item_title(store)).bold().fg(color)];
    if state == ItemState::Missing {
        title.push("  required".yellow());
    }
    Paragraph::new(Line::from(title)).render(title_area, buf);

    let connector = if is_last { CONNECTOR_END } else { CONNECTOR };
    for (y, symbol) in [(area.y, symbol), (area.y + 1, connector)] {
        if let Some(c) = buf.cell_mut((area.x, y)) {
            c.set_symbol(symbol);
            c.set_fg(color);
        }
    }
}

/// Reads a value out of the store and writes it back through the dispatcher.
pub trait Access<S, T: ToOwned> {
    fn get(store: &RefCell<S>) -> T;
    fn set(dispatcher: &mut Dispatcher, value: T) -> bool;

    /// Hint shown while the value is empty.
    fn placeholder(_store: &RefCell<S>) -> Option<&'static str> {
        None
    }
}

/// A single-line text input. The cursor counts grapheme clusters.
#[derive(Debug)]
pub struct LineInput<S, A: Access<S, String>> {
    cursor: Option<usize>,
    _phantom: PhantomData<(S, A)>,
}

impl<S, A: Access<S, String>> LineInput<S, A> {
    pub fn new() -> Self {
        Self {
            cursor: None,
            _phantom: PhantomData,
        }
    }
}

impl<S, A: Access<S, String>> Component<S> for LineInput<S, A> {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        let v = A::get(store);
        match A::placeholder(store) {
            Some(placeholder) if v.is_empty() => {
                Paragraph::new(placeholder).dark_gray().render(area, buf);
            }
            _ => Paragraph::new(v).render(area, buf),
        }
    }

    fn get_cursor_position(&self, store: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        let cursor = self.cursor?;
        let v = A::get(store);
        let width: usize = v.graphemes(true).take(cursor).map(|g| g.width()).sum();
        let x = u16::try_from(width).unwrap_or(u16::MAX).min(area.width);
        Some((area.x + x, area.y))
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let cursor = self.cursor?;
        let edit = edit_line(&A::get(store), cursor, event.code)?;
        if let Some(v) = edit.value
            && !A::set(dispatcher, v)
        {
            return Some(Message::Handled);
        }
        self.cursor = Some(edit.cursor);
        Some(Message::CursorUpdated)
    }

    fn activate(&mut self, _dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        self.cursor = Some(A::get(store).graphemes(true).count());
    }

    fn deactivate(&mut self, _dispatcher: &mut Dispatcher, _store: &RefCell<S>) {
        self.cursor = None;
    }
}

/// Outcome of a key press on a line of text.
#[derive(Debug, PartialEq, Eq)]
struct LineEdit {
    /// The new text, when it changed.
    value: Option<String>,
    cursor: usize,
}

/// Applies an editing key to `line` with the cursor before grapheme `cursor`.
fn edit_line(line: &str, cursor: usize, code: KeyCode) -> Option<LineEdit> {
    let graphemes: Vec<(usize, &str)> = line.grapheme_indices(true).collect();
    let len = graphemes.len();
    let cursor = cursor.min(len);
    let byte_at = |i: usize| graphemes.get(i).map_or(line.len(), |(b, _)| *b);
    let moved = |cursor| Some(LineEdit { value: None, cursor });

    match code {
        KeyCode::Left => moved(cursor.saturating_sub(1)),
        KeyCode::Right => moved((cursor + 1).min(len)),
        KeyCode::Home => moved(0),
        KeyCode::End => moved(len),
        KeyCode::Backspace if cursor == 0 => moved(0),
        KeyCode::Backspace => {
            let mut v = line.to_owned();
            v.replace_range(byte_at(cursor - 1)..byte_at(cursor), "");
            Some(LineEdit {
                value: Some(v),
                cursor: cursor - 1,
            })
        }
        KeyCode::Delete if cursor == len => moved(cursor),
        KeyCode::Delete => {
            let mut v = line.to_owned();
            v.replace_range(byte_at(cursor)..byte_at(cursor + 1), "");
            Some(LineEdit {
                value: Some(v),
                cursor,
            })
        }
        KeyCode::Char(c) => {
            let mut v = line.to_owned();
            v.insert(byte_at(cursor), c);
            // a combining mark joins the previous cluster
            let cursor = (cursor + v.graphemes(true).count()).saturating_sub(len);
            Some(LineEdit {
                value: Some(v),
                cursor,
            })
        }
        _ => None,
    }
}
