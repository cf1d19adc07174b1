// SPDX-FileCopyrightText: 2025-2026 Zig Team <dev@zig-app.com.br>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use jiff::tz::TimeZone;
use role_core::{Event, EventFeed, EventId, FeedError, FeedScope, Role, ViewState};

use crate::tui::dispatcher::{Action, Dispatcher};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedRequest {
    Refresh,
    Edit(EventId),
    Delete(EventId),
}

#[derive(Debug)]
pub struct FeedStore {
    pub feed: EventFeed,
    pub selected: usize,
    pub alert: Option<String>,
    pub pending_delete: Option<EventId>,
    pub request: Option<FeedRequest>,
    pub tz: TimeZone,
    image_urls: HashMap<EventId, String>,
}

impl FeedStore {
    pub fn new(feed: EventFeed, tz: TimeZone) -> Self {
        Self {
            feed,
            selected: 0,
            alert: None,
            pending_delete: None,
            request: None,
            tz,
            image_urls: HashMap::new(),
        }
    }

    pub fn title(&self) -> String {
        let title = match self.feed.scope() {
            FeedScope::All => "Rolês",
            FeedScope::Owner(_) => "My Events",
        };
        let state = match (self.request, self.feed.state()) {
            (Some(FeedRequest::Refresh), _) | (_, ViewState::Refreshing) => " (refreshing...)",
            (Some(FeedRequest::Delete(_)), _) => " (deleting...)",
            (_, ViewState::Loading) => " (loading...)",
            _ => "",
        };
        format!("{title}{state}")
    }

    pub fn is_owner_scope(&self) -> bool {
        matches!(self.feed.scope(), FeedScope::Owner(_))
    }

    pub fn selected_event(&self) -> Option<&Event> {
        self.feed.events().get(self.selected)
    }

    pub fn image_url(&self, id: EventId) -> Option<&str> {
        self.image_urls.get(&id).map(String::as_str)
    }

    /// Records the outcome of a load or refresh.
    pub fn fetched(&mut self, result: Result<(), FeedError>, role: &Role) {
        if let Err(e) = result {
            tracing::warn!("failed to fetch events: {e}");
            self.alert = Some(e.to_string());
        }

        self.image_urls = self
            .feed
            .events()
            .iter()
            .filter_map(|a| a.image.as_ref().map(|m| (a.id, role.media_url(m))))
            .collect();
        self.clamp_selection();
    }

    /// Records the outcome of a delete.
    pub fn deleted(&mut self, result: Result<(), FeedError>) {
        if let Err(e) = result {
            tracing::warn!("failed to delete event: {e}");
            self.alert = Some(e.to_string());
        }
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        self.selected = self
            .selected
            .min(self.feed.events().len().saturating_sub(1));
    }

    fn select(&mut self, offset: isize) {
        self.selected = self.selected.saturating_add_signed(offset);
        self.clamp_selection();
    }

    fn selected_id(&self) -> Option<EventId> {
        self.selected_event().map(|a| a.id)
    }

    fn toggle_expanded(&mut self) {
        if let Some(id) = self.selected_id() {
            self.feed.toggle_expanded(id);
        }
    }

    fn toggle_confirmed(&mut self) {
        if let Some(id) = self.selected_id()
            && !self.is_owner_scope()
        {
            self.feed.toggle_confirmed(id);
        }
    }

    fn edit(&mut self) {
        if self.is_owner_scope()
            && let Some(id) = self.selected_id()
        {
            self.request = Some(FeedRequest::Edit(id));
        }
    }

    fn ask_delete(&mut self) {
        if self.is_owner_scope() {
            self.pending_delete = self.selected_id();
        }
    }

    fn confirm_delete(&mut self) {
        if let Some(id) = self.pending_delete.take() {
            self.request = Some(FeedRequest::Delete(id));
        }
    }

    pub fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher) {
        let callback = Rc::new(RefCell::new(move |action: &Action| {
            let mut that = that.borrow_mut();
            match action {
                Action::DismissAlert => that.alert = None,
                Action::Select(offset) => that.select(*offset),
                Action::ToggleExpanded => that.toggle_expanded(),
                Action::ToggleConfirmed => that.toggle_confirmed(),
                Action::Refresh => that.request = Some(FeedRequest::Refresh),
                Action::EditSelected => that.edit(),
                Action::AskDelete => that.ask_delete(),
                Action::ConfirmDelete => that.confirm_delete(),
                Action::CancelDelete => that.pending_delete = None,
                _ => (),
            }
        }));
        dispatcher.register(callback);
    }
}
