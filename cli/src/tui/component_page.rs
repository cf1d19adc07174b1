// SPDX-FileCopyrightText: 2025-2026 Zig Team <dev@zig-app.com.br>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Flex;
use ratatui::prelude::*;
use ratatui::symbols::border;
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};

use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::Dispatcher;

type TitleFn<S> = Box<dyn Fn(&S) -> String>;

/// A bordered full-screen page with a title and a key legend at the bottom.
pub struct SinglePage<S, C: Component<S>> {
    title: TitleFn<S>,
    keys: &'static [(&'static str, &'static str)],
    inner: C,
}

impl<S, C: Component<S>> SinglePage<S, C> {
    pub fn new(
        title: impl Fn(&S) -> String + 'static,
        keys: &'static [(&'static str, &'static str)],
        inner: C,
    ) -> Self {
        Self {
            title: Box::new(title),
            keys,
            inner,
        }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    fn block(&self) -> Block<'static> {
        Block::bordered().border_set(border::ROUNDED)
    }
}

impl<S, C: Component<S>> Component<S> for SinglePage<S, C> {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        let title = Line::from(format!(" {} ", (self.title)(&store.borrow())).bold());
        let block = self
            .block()
            .title(title.centered())
            .title_bottom(instructions(self.keys).centered())
            .white();

        let inner_area = block.inner(area);
        block.render(area, buf);
        self.inner.render(store, inner_area, buf);
    }

    fn get_cursor_position(&self, store: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        let inner_area = self.block().inner(area);
        self.inner.get_cursor_position(store, inner_area)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let inner_area = self.block().inner(area);
        if let Some(msg) = self.inner.on_key(dispatcher, store, inner_area, event) {
            return Some(msg);
        }

        match event.code {
            KeyCode::Esc => Some(Message::Exit),
            _ => None,
        }
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        self.inner.activate(dispatcher, store);
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        self.inner.deactivate(dispatcher, store);
    }
}

fn instructions(keys: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(keys.len() * 2);
    for (label, key) in keys {
        spans.push(format!(" {label} ").into());
        spans.push(key.blue().bold());
    }
    spans.push(" ".into());
    Line::from(spans)
}

/// A centered box of the given size, shrunk to fit the area.
pub fn modal_area(width: u16, height: u16, area: Rect) -> Rect {
    let [modal] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [modal] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(modal);
    modal
}

/// Area inside the border of a modal box.
pub fn modal_inner(width: u16, height: u16, area: Rect) -> Rect {
    modal_block().inner(modal_area(width, height, area))
}

fn modal_block() -> Block<'static> {
    Block::bordered().border_set(border::ROUNDED)
}

/// Clears a centered box and draws a titled border around it. Returns the area
/// inside the border.
pub fn render_modal(
    title: &str,
    color: Color,
    width: u16,
    height: u16,
    area: Rect,
    buf: &mut Buffer,
) -> Rect {
    let modal = modal_area(width, height, area);
    Clear.render(modal, buf);
    let block = modal_block()
        .title(Line::from(format!(" {title} ").bold()).centered())
        .fg(color);
    let inner = block.inner(modal);
    block.render(modal, buf);
    inner
}

/// A modal box carrying an error, dismissed with any key.
pub fn render_alert(message: &str, area: Rect, buf: &mut Buffer) {
    let inner = render_modal("Oops", Color::Red, 60, 7, area, buf);
    let [text, hint] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);
    Paragraph::new(message)
        .wrap(Wrap { trim: true })
        .white()
        .render(text, buf);
    Paragraph::new(Line::from(vec![" OK ".into(), "<Enter>".blue().bold()]).centered())
        .render(hint, buf);
}

/// A yes/no question in a modal box.
pub fn render_confirm(question: &str, area: Rect, buf: &mut Buffer) {
    let inner = render_modal("Confirm", Color::Yellow, 60, 6, area, buf);
    let [text, hint] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);
    Paragraph::new(question)
        .wrap(Wrap { trim: true })
        .white()
        .render(text, buf);
    let keys = Line::from(vec![
        " Yes ".into(),
        "<y>".blue().bold(),
        " No ".into(),
        "<n> ".blue().bold(),
    ]);
    Paragraph::new(keys.centered()).render(hint, buf);
}
