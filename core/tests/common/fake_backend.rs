// SPDX-FileCopyrightText: 2025-2026 Zig Team <dev@zig-app.com.br>
//
// SPDX-License-Identifier: Apache-2.0

//! An in-memory [`Backend`] that records the calls it receives.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use role_core::{
    AuthResponse, Backend, Event, EventId, EventInput, LocalImage, Media, MediaId, StrapiError,
    User, UserId,
};

/// A remote operation, used to make the fake fail on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    List,
    Create,
    Update,
    Delete,
    Upload,
    DeleteImage,
}

/// A recorded remote call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Login(String),
    Register(String),
    Me,
    ListEvents,
    ListEventsByOwner(UserId),
    CreateEvent(EventInput),
    UpdateEvent(EventId, EventInput),
    DeleteEvent(EventId),
    UploadImage(PathBuf),
    DeleteImage(MediaId),
}

#[derive(Debug)]
pub struct FakeBackend {
    calls: Mutex<Vec<Call>>,
    events: Mutex<Vec<Event>>,
    failing: HashSet<Op>,
    upload_id: Option<MediaId>,
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            events: Mutex::new(Vec::new()),
            failing: HashSet::new(),
            upload_id: Some(MediaId(42)),
        }
    }
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events the server already knows about.
    pub fn with_events(self, events: Vec<Event>) -> Self {
        *self.events.lock().unwrap() = events;
        self
    }

    /// Makes `op` fail with a server error.
    pub fn failing(mut self, op: Op) -> Self {
        self.failing.insert(op);
        self
    }

    /// Makes uploads succeed without reporting a file id.
    pub fn without_upload_id(mut self) -> Self {
        self.upload_id = None;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|a| pred(a)).count()
    }

    pub fn stored_events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn check(&self, op: Op) -> Result<(), StrapiError> {
        if self.failing.contains(&op) {
            return Err(StrapiError::Api {
                status: 500,
                message: format!("{op:?} failed"),
            });
        }
        Ok(())
    }

    fn user() -> User {
        User {
            id: UserId(4),
            username: "ana".to_string(),
            email: "ana@example.com".to_string(),
        }
    }

    fn to_event(id: EventId, input: &EventInput) -> Event {
        Event {
            id,
            title: input.title.clone(),
            start_date: Some(input.start_date),
            end_date: Some(input.end_date),
            location: input.location.clone(),
            description: input.description.clone(),
            image: Some(Media {
                id: input.image,
                url: format!("/uploads/{}.png", input.image),
                name: None,
                mime: None,
            }),
            owner_id: Some(input.owner_id),
        }
    }
}

#[async_trait]
impl Backend for FakeBackend {
    async fn login(&self, email: &str, _password: &str) -> Result<AuthResponse, StrapiError> {
        self.record(Call::Login(email.to_string()));
        Ok(AuthResponse {
            jwt: "a.b.c".to_string(),
            user: Self::user(),
        })
    }

    async fn register(
        &self,
        username: &str,
        _email: &str,
        _password: &str,
    ) -> Result<AuthResponse, StrapiError> {
        self.record(Call::Register(username.to_string()));
        Ok(AuthResponse {
            jwt: "a.b.c".to_string(),
            user: Self::user(),
        })
    }

    async fn me(&self) -> Result<User, StrapiError> {
        self.record(Call::Me);
        Ok(Self::user())
    }

    async fn list_events(&self) -> Result<Vec<Event>, StrapiError> {
        self.record(Call::ListEvents);
        self.check(Op::List)?;
        Ok(self.stored_events())
    }

    async fn list_events_by_owner(&self, owner: UserId) -> Result<Vec<Event>, StrapiError> {
        self.record(Call::ListEventsByOwner(owner));
        self.check(Op::List)?;
        Ok(self
            .stored_events()
            .into_iter()
            .filter(|a| a.owner_id == Some(owner))
            .collect())
    }

    async fn create_event(&self, input: &EventInput) -> Result<Event, StrapiError> {
        self.record(Call::CreateEvent(input.clone()));
        self.check(Op::Create)?;
        let mut events = self.events.lock().unwrap();
        let next = events.iter().map(|a| a.id.get()).max().unwrap_or(0) + 1;
        let event = Self::to_event(EventId(next), input);
        events.push(event.clone());
        Ok(event)
    }

    async fn update_event(&self, id: EventId, input: &EventInput) -> Result<Event, StrapiError> {
        self.record(Call::UpdateEvent(id, input.clone()));
        self.check(Op::Update)?;
        let mut events = self.events.lock().unwrap();
        let slot = events
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| StrapiError::NotFound(format!("/events/{id}")))?;
        *slot = Self::to_event(id, input);
        Ok(slot.clone())
    }

    async fn delete_event(&self, id: EventId) -> Result<(), StrapiError> {
        self.record(Call::DeleteEvent(id));
        self.check(Op::Delete)?;
        self.events.lock().unwrap().retain(|a| a.id != id);
        Ok(())
    }

    async fn upload_image(&self, image: &LocalImage) -> Result<Option<MediaId>, StrapiError> {
        self.record(Call::UploadImage(image.path().to_path_buf()));
        self.check(Op::Upload)?;
        Ok(self.upload_id)
    }

    async fn delete_image(&self, id: MediaId) -> Result<(), StrapiError> {
        self.record(Call::DeleteImage(id));
        self.check(Op::DeleteImage)
    }
}
