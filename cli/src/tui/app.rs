// SPDX-FileCopyrightText: 2025-2026 Zig Team <dev@zig-app.com.br>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, error::Error, rc::Rc};

use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event as TermEvent, KeyEventKind};
use role_core::{AuthSession, Composer, Event, EventFeed, FeedScope, Role, StrapiClient};

use crate::tui::component::{Component, Message};
use crate::tui::compose_store::{ComposeRequest, ComposeStore};
use crate::tui::dispatcher::Dispatcher;
use crate::tui::editor::EventEditor;
use crate::tui::feed::FeedView;
use crate::tui::feed_store::{FeedRequest, FeedStore};

/// Opens the event editor. Returns the published event, or `None` if the user
/// left without publishing.
pub async fn compose_event(
    role: &mut Role,
    session: &AuthSession,
    composer: Composer,
) -> Result<Option<Event>, Box<dyn Error>> {
    let mut terminal = ratatui::init();
    let result = run_composer(&mut terminal, role, session, composer).await;
    ratatui::restore();
    role.refresh_now(); // the editor may have been open for a while
    result
}

/// Opens the feed browser. Editing requires a session.
pub async fn browse_feed(
    role: &mut Role,
    session: Option<&AuthSession>,
    feed: EventFeed,
) -> Result<(), Box<dyn Error>> {
    let mut terminal = ratatui::init();
    let result = run_feed(&mut terminal, role, session, feed).await;
    ratatui::restore();
    result
}

async fn run_composer(
    terminal: &mut DefaultTerminal,
    role: &Role,
    session: &AuthSession,
    composer: Composer,
) -> Result<Option<Event>, Box<dyn Error>> {
    let backend = role.backend_for(session);
    let mut view = EventEditor::new();
    let mut store = ComposeStore::new(composer, role.now().clone());
    loop {
        store = run_view(terminal, &mut view, store, ComposeStore::register_to)?;
        let Some(request) = store.request else {
            tracing::info!("event editor closed without publishing");
            return Ok(None);
        };

        store = draw_once(terminal, &view, store)?;
        store.request = None;
        match request {
            ComposeRequest::Publish => {
                match store.composer.submit(&backend, session, role.now()).await {
                    Ok(event) => return Ok(Some(event)),
                    Err(e) => {
                        tracing::warn!("failed to publish event: {e}");
                        store.alert = Some(e.to_string());
                    }
                }
            }
        }
    }
}

async fn run_feed(
    terminal: &mut DefaultTerminal,
    role: &mut Role,
    session: Option<&AuthSession>,
    feed: EventFeed,
) -> Result<(), Box<dyn Error>> {
    let reader = role.feed_backend(feed.scope(), session);
    let writer: StrapiClient = match session {
        Some(session) => role.backend_for(session),
        None => role.client().clone(),
    };

    let manage = session.is_some() && matches!(feed.scope(), FeedScope::Owner(_));
    let mut view = FeedView::new(manage);
    let mut store = FeedStore::new(feed, role.now().time_zone().clone());
    store = draw_once(terminal, &view, store)?;
    let result = store.feed.load(&reader).await;
    store.fetched(result, role);

    loop {
        store = run_view(terminal, &mut view, store, FeedStore::register_to)?;
        let Some(request) = store.request else {
            return Ok(());
        };

        store = draw_once(terminal, &view, store)?;
        store.request = None;
        match request {
            FeedRequest::Refresh => {
                let result = store.feed.refresh(&reader).await;
                store.fetched(result, role);
            }
            FeedRequest::Delete(id) => {
                let result = store.feed.delete(&writer, id).await;
                store.deleted(result);
            }
            FeedRequest::Edit(id) => {
                let Some(session) = session else {
                    continue;
                };

                role.refresh_now();
                let snap = role.config().time_snap();
                let composer = match store.feed.composer_for(id, role.now(), snap) {
                    Ok(a) => a,
                    Err(e) => {
                        store.alert = Some(e.to_string());
                        continue;
                    }
                };

                if let Some(event) = run_composer(terminal, role, session, composer).await? {
                    tracing::info!(id = %event.id, "event updated");
                    let result = store.feed.refresh(&reader).await;
                    store.fetched(result, role);
                }
            }
        }
    }
}

/// Runs the render loop until the view asks to exit, then hands the store back.
fn run_view<S: 'static, V: Component<S>>(
    terminal: &mut DefaultTerminal,
    view: &mut V,
    store: S,
    register: impl FnOnce(Rc<RefCell<S>>, &mut Dispatcher),
) -> Result<S, Box<dyn Error>> {
    let store = Rc::new(RefCell::new(store));

    let result = {
        let mut dispatcher = Dispatcher::new();
        register(store.clone(), &mut dispatcher);
        view.activate(&mut dispatcher, &store);

        loop {
            if let Err(e) = draw(terminal, view, &store) {
                break Err(e);
            }

            match read_event(terminal, &mut dispatcher, view, &store) {
                Err(e) => break Err(e),
                Ok(Some(Message::Exit)) => break Ok(()),
                Ok(_) => {} // Continue the loop to render the next frame
            }
        }
    }; // release the dispatcher and its store references here
    result?;

    let owned_store = Rc::try_unwrap(store)
        .map_err(|_| "Store still has references")?
        .into_inner();
    Ok(owned_store)
}

/// Draws a single frame, e.g. before a network call.
fn draw_once<S, V: Component<S>>(
    terminal: &mut DefaultTerminal,
    view: &V,
    store: S,
) -> Result<S, Box<dyn Error>> {
    let store = RefCell::new(store);
    draw(terminal, view, &store)?;
    Ok(store.into_inner())
}

fn draw<S, V: Component<S>>(
    terminal: &mut DefaultTerminal,
    view: &V,
    store: &RefCell<S>,
) -> Result<(), Box<dyn Error>> {
    terminal.draw(|frame| {
        let area = frame.area();
        view.render(store, area, frame.buffer_mut());
        if let Some(position) = view.get_cursor_position(store, area) {
            frame.set_cursor_position(position);
        }
    })?;
    Ok(())
}

fn read_event<S, V: Component<S>>(
    terminal: &mut DefaultTerminal,
    dispatcher: &mut Dispatcher,
    view: &mut V,
    store: &RefCell<S>,
) -> Result<Option<Message>, Box<dyn Error>> {
    match event::read()? {
        TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
            let area = terminal.get_frame().area();
            Ok(view.on_key(dispatcher, store, area, key))
        }
        _ => Ok(None),
    }
}
