// SPDX-FileCopyrightText: 2025-2026 Zig Team <dev@zig-app.com.br>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashSet;

use jiff::Zoned;
use role_strapi::{Event, EventId, StrapiError, UserId};

use crate::backend::Backend;
use crate::composer::Composer;
use crate::picker::TimeSnap;

/// Which events a feed shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedScope {
    /// Every published event (home).
    All,
    /// Events created by one user (profile).
    Owner(UserId),
}

/// Loading state of a listing screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewState {
    /// Nothing fetched yet.
    #[default]
    Loading,
    /// Showing the fetched events.
    Ready,
    /// Re-fetching while the previous events stay visible.
    Refreshing,
}

/// Why a feed operation failed.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// Fetching the events failed.
    #[error("Failed to load events: {0}")]
    Fetch(#[source] StrapiError),

    /// Deleting the event failed.
    #[error("Failed to delete the event: {0}")]
    Delete(#[source] StrapiError),

    /// Only the profile feed manages events.
    #[error("Only your own events can be changed")]
    NotOwner,

    /// The event is not in the feed.
    #[error("Event {0} is not in the list")]
    UnknownEvent(EventId),
}

/// A listing screen: the fetched events plus ephemeral per-card view flags.
///
/// Expanded and confirmed cards are local view state and never sent to the
/// server.
#[derive(Debug)]
pub struct EventFeed {
    scope: FeedScope,
    state: ViewState,
    events: Vec<Event>,
    expanded: HashSet<EventId>,
    confirmed: HashSet<EventId>,
}

impl EventFeed {
    /// An empty feed waiting for its first load.
    #[must_use]
    pub fn new(scope: FeedScope) -> Self {
        Self {
            scope,
            state: ViewState::Loading,
            events: Vec::new(),
            expanded: HashSet::new(),
            confirmed: HashSet::new(),
        }
    }

    /// The feed scope.
    #[must_use]
    pub fn scope(&self) -> FeedScope {
        self.scope
    }

    /// The loading state.
    #[must_use]
    pub fn state(&self) -> ViewState {
        self.state
    }

    /// The fetched events, in server order.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Looks up a fetched event.
    #[must_use]
    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|a| a.id == id)
    }

    /// Fetches the events, as on screen focus.
    pub async fn load(&mut self, backend: &dyn Backend) -> Result<(), FeedError> {
        self.state = ViewState::Loading;
        self.fetch(backend).await
    }

    /// Re-fetches the events, keeping the current ones visible meanwhile.
    pub async fn refresh(&mut self, backend: &dyn Backend) -> Result<(), FeedError> {
        self.state = ViewState::Refreshing;
        self.fetch(backend).await
    }

    async fn fetch(&mut self, backend: &dyn Backend) -> Result<(), FeedError> {
        let result = match self.scope {
            FeedScope::All => backend.list_events().await,
            FeedScope::Owner(owner) => backend.list_events_by_owner(owner).await,
        };
        self.state = ViewState::Ready;

        let events = result.map_err(FeedError::Fetch)?;
        tracing::debug!(count = events.len(), scope = ?self.scope, "events fetched");

        let ids: HashSet<_> = events.iter().map(|a| a.id).collect();
        self.expanded.retain(|id| ids.contains(id));
        self.confirmed.retain(|id| ids.contains(id));
        self.events = events;
        Ok(())
    }

    /// Flips the expanded flag of a card. Returns the new flag.
    pub fn toggle_expanded(&mut self, id: EventId) -> bool {
        toggle(&mut self.expanded, id)
    }

    /// Whether a card is expanded.
    #[must_use]
    pub fn is_expanded(&self, id: EventId) -> bool {
        self.expanded.contains(&id)
    }

    /// Flips the local "I'm going" flag of a card. Returns the new flag.
    pub fn toggle_confirmed(&mut self, id: EventId) -> bool {
        toggle(&mut self.confirmed, id)
    }

    /// Whether the user marked a card as going.
    #[must_use]
    pub fn is_confirmed(&self, id: EventId) -> bool {
        self.confirmed.contains(&id)
    }

    /// Deletes one of the user's events and drops it from the list.
    ///
    /// The caller confirms with the user before calling this.
    pub async fn delete(&mut self, backend: &dyn Backend, id: EventId) -> Result<(), FeedError> {
        self.ensure_managed(id)?;
        backend.delete_event(id).await.map_err(FeedError::Delete)?;

        self.events.retain(|a| a.id != id);
        self.expanded.remove(&id);
        self.confirmed.remove(&id);
        tracing::info!(%id, "event deleted");
        Ok(())
    }

    /// A composer prefilled with one of the user's events.
    pub fn composer_for(
        &self,
        id: EventId,
        now: &Zoned,
        snap: TimeSnap,
    ) -> Result<Composer, FeedError> {
        let event = self.ensure_managed(id)?;
        Ok(Composer::edit(event, now, snap))
    }

    fn ensure_managed(&self, id: EventId) -> Result<&Event, FeedError> {
        if self.scope == FeedScope::All {
            return Err(FeedError::NotOwner);
        }
        self.get(id).ok_or(FeedError::UnknownEvent(id))
    }
}

fn toggle(set: &mut HashSet<EventId>, id: EventId) -> bool {
    if set.remove(&id) {
        false
    } else {
        set.insert(id);
        true
    }
}
