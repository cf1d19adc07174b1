// SPDX-FileCopyrightText: 2025-2026 Zig Team <dev@zig-app.com.br>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

use crate::tui::component::{Component, Message};
use crate::tui::component_page::{SinglePage, render_alert, render_confirm};
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::tui::feed_store::FeedStore;
use crate::util::format_time_span;

const HOME_KEYS: &[(&str, &str)] = &[
    ("Move", "<Up/Down>"),
    ("Details", "<Enter>"),
    ("Going", "<c>"),
    ("Refresh", "<r>"),
    ("Quit", "<q>"),
];

const PROFILE_KEYS: &[(&str, &str)] = &[
    ("Move", "<Up/Down>"),
    ("Details", "<Enter>"),
    ("Edit", "<e>"),
    ("Delete", "<d>"),
    ("Refresh", "<r>"),
    ("Quit", "<q>"),
];

/// Browser over a list of event cards.
pub struct FeedView(SinglePage<FeedStore, Cards>);

impl FeedView {
    pub fn new(manage: bool) -> Self {
        let keys = if manage { PROFILE_KEYS } else { HOME_KEYS };
        Self(SinglePage::new(FeedStore::title, keys, Cards))
    }
}

impl Component<FeedStore> for FeedView {
    fn render(&self, store: &RefCell<FeedStore>, area: Rect, buf: &mut Buffer) {
        self.0.render(store, area, buf);

        let s = store.borrow();
        if let Some(message) = &s.alert {
            render_alert(message, area, buf);
        } else if let Some(event) = s.pending_delete.and_then(|id| s.feed.get(id)) {
            let question = format!("Delete \"{}\"? This cannot be undone.", event.title);
            render_confirm(&question, area, buf);
        }
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<FeedStore>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        if store.borrow().alert.is_some() {
            if matches!(event.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                dispatcher.dispatch(Action::DismissAlert);
            }
            return Some(Message::Handled);
        }

        if store.borrow().pending_delete.is_some() {
            match event.code {
                KeyCode::Char('y' | 'Y') => {
                    dispatcher.dispatch(Action::ConfirmDelete);
                    return Some(Message::Exit);
                }
                KeyCode::Char('n' | 'N') | KeyCode::Esc => {
                    dispatcher.dispatch(Action::CancelDelete);
                }
                _ => {}
            }
            return Some(Message::Handled);
        }

        self.0.on_key(dispatcher, store, area, event)
    }
}

/// The list of cards inside the page.
struct Cards;

impl Component<FeedStore> for Cards {
    fn render(&self, store: &RefCell<FeedStore>, area: Rect, buf: &mut Buffer) {
        let store = store.borrow();
        let events = store.feed.events();
        if events.is_empty() {
            let text = if store.request.is_none() && store.alert.is_none() {
                "No events yet"
            } else {
                ""
            };
            Paragraph::new(text).dark_gray().centered().render(area, buf);
            return;
        }

        let mut lines = Vec::new();
        let mut selected_span = (0, 0);
        for (i, event) in events.iter().enumerate() {
            let start = lines.len();
            let selected = i == store.selected;
            let marker = if selected { "▶ " } else { "  " };
            let going = if store.feed.is_confirmed(event.id) {
                " ✓ going".green()
            } else {
                "".into()
            };

            let mut title = Line::from(vec![marker.blue(), event.title.clone().bold(), going]);
            if selected {
                title = title.on_dark_gray();
            }
            lines.push(title);
            lines.push(Line::from(vec![
                "  ".into(),
                format_time_span(event.start_date, event.end_date, &store.tz).cyan(),
                "  ".into(),
                event.location.clone().into(),
            ]));

            if store.feed.is_expanded(event.id) {
                for text in event.description.lines() {
                    lines.push(Line::from(format!("  {text}")));
                }
                if let Some(url) = store.image_url(event.id) {
                    lines.push(Line::from(format!("  {url}").dark_gray()));
                }
            }
            lines.push(Line::default());

            if selected {
                selected_span = (start, lines.len());
            }
        }

        // scroll just enough to keep the selected card in view
        let height = usize::from(area.height);
        let offset = selected_span.1.saturating_sub(height).min(selected_span.0);
        let offset = u16::try_from(offset).unwrap_or(u16::MAX);
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((offset, 0))
            .render(area, buf);
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<FeedStore>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let action = match event.code {
            KeyCode::Up | KeyCode::Char('k') => Action::Select(-1),
            KeyCode::Down | KeyCode::Char('j') => Action::Select(1),
            KeyCode::Enter => Action::ToggleExpanded,
            KeyCode::Char('c') => Action::ToggleConfirmed,
            KeyCode::Char('d') => Action::AskDelete,
            KeyCode::Char('e') => Action::EditSelected,
            KeyCode::Char('r') => Action::Refresh,
            KeyCode::Char('q') => return Some(Message::Exit),
            _ => return None,
        };
        dispatcher.dispatch(action);

        // network work happens outside of the render loop
        match store.borrow().request {
            Some(_) => Some(Message::Exit),
            None => Some(Message::Handled),
        }
    }
}
