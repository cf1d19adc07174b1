// SPDX-FileCopyrightText: 2025-2026 Zig Team <dev@zig-app.com.br>
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use role_strapi::{
    AuthResponse, Event, EventId, EventInput, MediaId, StrapiClient, StrapiError, User, UserId,
};

use crate::image::LocalImage;

/// Remote operations the domain layer needs from the server.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Signs in with an e-mail and password.
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, StrapiError>;

    /// Creates an account.
    async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, StrapiError>;

    /// The user owning the bearer token.
    async fn me(&self) -> Result<User, StrapiError>;

    /// All published events.
    async fn list_events(&self) -> Result<Vec<Event>, StrapiError>;

    /// Events created by `owner`.
    async fn list_events_by_owner(&self, owner: UserId) -> Result<Vec<Event>, StrapiError>;

    /// Publishes a new event.
    async fn create_event(&self, input: &EventInput) -> Result<Event, StrapiError>;

    /// Replaces the fields of an existing event.
    async fn update_event(&self, id: EventId, input: &EventInput) -> Result<Event, StrapiError>;

    /// Deletes an event.
    async fn delete_event(&self, id: EventId) -> Result<(), StrapiError>;

    /// Uploads an image, returning the id of the stored file if the server
    /// reported one.
    async fn upload_image(&self, image: &LocalImage) -> Result<Option<MediaId>, StrapiError>;

    /// Deletes an uploaded image.
    async fn delete_image(&self, id: MediaId) -> Result<(), StrapiError>;
}

#[async_trait]
impl Backend for StrapiClient {
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, StrapiError> {
        StrapiClient::login(self, email, password).await
    }

    async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, StrapiError> {
        StrapiClient::register(self, username, email, password).await
    }

    async fn me(&self) -> Result<User, StrapiError> {
        StrapiClient::me(self).await
    }

    async fn list_events(&self) -> Result<Vec<Event>, StrapiError> {
        StrapiClient::list_events(self).await
    }

    async fn list_events_by_owner(&self, owner: UserId) -> Result<Vec<Event>, StrapiError> {
        StrapiClient::list_events_by_owner(self, owner).await
    }

    async fn create_event(&self, input: &EventInput) -> Result<Event, StrapiError> {
        StrapiClient::create_event(self, input).await
    }

    async fn update_event(&self, id: EventId, input: &EventInput) -> Result<Event, StrapiError> {
        StrapiClient::update_event(self, id, input).await
    }

    async fn delete_event(&self, id: EventId) -> Result<(), StrapiError> {
        StrapiClient::delete_event(self, id).await
    }

    async fn upload_image(&self, image: &LocalImage) -> Result<Option<MediaId>, StrapiError> {
        let uploaded = self.upload(&image.to_upload()).await?;
        if uploaded.len() > 1 {
            tracing::warn!(count = uploaded.len(), "server stored more files than uploaded");
        }
        Ok(uploaded.first().map(|a| a.id))
    }

    async fn delete_image(&self, id: MediaId) -> Result<(), StrapiError> {
        self.delete_upload(id).await
    }
}
