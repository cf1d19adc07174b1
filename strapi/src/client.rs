// SPDX-FileCopyrightText: 2025-2026 Zig Team <dev@zig-app.com.br>
//
// SPDX-License-Identifier: Apache-2.0

//! Strapi client for authentication, event and media operations.

use std::sync::Arc;

use reqwest::multipart::{Form, Part};
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;

use crate::config::StrapiConfig;
use crate::error::StrapiError;
use crate::http::HttpClient;
use crate::types::{
    AuthResponse, Envelope, Event, EventId, EventInput, Media, MediaId, UploadFile, User, UserId,
};

/// Client for the Strapi REST API.
///
/// # Example
///
/// ```ignore
/// use role_strapi::{StrapiClient, StrapiConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = StrapiConfig {
///     base_url: "https://zig-app.onrender.com/api".to_string(),
///     ..Default::default()
/// };
///
/// let client = StrapiClient::new(&config)?;
/// let auth = client.login("ana@example.com", "s3cretpass").await?;
/// let client = client.with_token(auth.jwt);
/// let events = client.list_events().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct StrapiClient {
    http: Arc<HttpClient>,
    token: Option<String>,
}

impl StrapiClient {
    /// Creates a new anonymous client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client initialization fails.
    pub fn new(config: &StrapiConfig) -> Result<Self, StrapiError> {
        let http = HttpClient::new(config)?;
        Ok(Self {
            http: Arc::new(http),
            token: None,
        })
    }

    /// Returns a client sending the given bearer token on authenticated calls.
    #[must_use]
    pub fn with_token(&self, token: impl Into<String>) -> Self {
        Self {
            http: self.http.clone(),
            token: Some(token.into()),
        }
    }

    /// Whether a bearer token is attached.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Signs in with an e-mail (or username) and password.
    pub async fn login(&self, identifier: &str, password: &str) -> Result<AuthResponse, StrapiError> {
        let body = serde_json::json!({
            "identifier": identifier,
            "password": password,
        });
        let req = self
            .http
            .build_request(Method::POST, "/auth/local", None)
            .json(&body);
        self.fetch(req).await
    }

    /// Registers a new account.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, StrapiError> {
        let body = serde_json::json!({
            "username": username,
            "email": email,
            "password": password,
        });
        let req = self
            .http
            .build_request(Method::POST, "/auth/local/register", None)
            .json(&body);
        self.fetch(req).await
    }

    /// Returns the user the bearer token belongs to.
    pub async fn me(&self) -> Result<User, StrapiError> {
        let token = self.require_token()?;
        let req = self
            .http
            .build_request(Method::GET, "/users/me", Some(token));
        self.fetch(req).await
    }

    /// Lists every event, with relations populated.
    pub async fn list_events(&self) -> Result<Vec<Event>, StrapiError> {
        let req = self
            .http
            .build_request(Method::GET, "/events", self.token())
            .query(&[("populate", "*")]);
        self.fetch::<Envelope<Vec<Event>>>(req).await.map(|e| e.data)
    }

    /// Lists the events owned by the given user.
    pub async fn list_events_by_owner(&self, owner: UserId) -> Result<Vec<Event>, StrapiError> {
        let owner = owner.to_string();
        let req = self
            .http
            .build_request(Method::GET, "/events", self.token())
            .query(&[("populate", "*"), ("filters[ownerID][$eq]", owner.as_str())]);
        self.fetch::<Envelope<Vec<Event>>>(req).await.map(|e| e.data)
    }

    /// Creates an event.
    pub async fn create_event(&self, input: &EventInput) -> Result<Event, StrapiError> {
        let token = self.require_token()?;
        let req = self
            .http
            .build_request(Method::POST, "/events", Some(token))
            .json(&Envelope { data: input });
        self.fetch::<Envelope<Event>>(req).await.map(|e| e.data)
    }

    /// Replaces the fields of an existing event.
    pub async fn update_event(&self, id: EventId, input: &EventInput) -> Result<Event, StrapiError> {
        let token = self.require_token()?;
        let req = self
            .http
            .build_request(Method::PUT, &format!("/events/{id}"), Some(token))
            .json(&Envelope { data: input });
        self.fetch::<Envelope<Event>>(req).await.map(|e| e.data)
    }

    /// Deletes an event.
    pub async fn delete_event(&self, id: EventId) -> Result<(), StrapiError> {
        let token = self.require_token()?;
        let req = self
            .http
            .build_request(Method::DELETE, &format!("/events/{id}"), Some(token));
        self.http.execute(req).await?;
        Ok(())
    }

    /// Uploads a single file and returns the media records the server created.
    pub async fn upload(&self, file: &UploadFile) -> Result<Vec<Media>, StrapiError> {
        let token = self.require_token()?;
        let bytes = tokio::fs::read(&file.path)
            .await
            .map_err(|e| StrapiError::File {
                path: file.path.display().to_string(),
                message: e.to_string(),
            })?;

        let part = Part::bytes(bytes)
            .file_name(file.file_name.clone())
            .mime_str(&file.mime)?;
        let form = Form::new().part("files", part);

        tracing::debug!(path = %file.path.display(), mime = %file.mime, "uploading file");
        let req = self
            .http
            .build_request(Method::POST, "/upload", Some(token))
            .multipart(form);
        self.fetch(req).await
    }

    /// Deletes an uploaded file.
    pub async fn delete_upload(&self, id: MediaId) -> Result<(), StrapiError> {
        let token = self.require_token()?;
        let req = self
            .http
            .build_request(Method::DELETE, &format!("/upload/files/{id}"), Some(token));
        self.http.execute(req).await?;
        Ok(())
    }

    /// Resolves the URL of a media file against the server origin.
    ///
    /// Absolute URLs (e.g., files served by a CDN) are returned unchanged.
    #[must_use]
    pub fn media_url(&self, media: &Media) -> String {
        Url::parse(self.http.base_url())
            .and_then(|base| base.join(&media.url))
            .map_or_else(|_| media.url.clone(), String::from)
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn require_token(&self) -> Result<&str, StrapiError> {
        self.token()
            .ok_or_else(|| StrapiError::Unauthorized("no bearer token".to_string()))
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<T, StrapiError> {
        let resp = self.http.execute(req).await?;
        let text = resp.text().await?;
        serde_json::from_str(&text).map_err(|e| StrapiError::InvalidResponse(e.to_string()))
    }
}
