// SPDX-FileCopyrightText: 2025-2026 Zig Team <dev@zig-app.com.br>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use jiff::Zoned;
use role_strapi::{Media, StrapiClient, User};

use crate::account::{self, Registration};
use crate::auth::{AuthError, AuthSession};
use crate::composer::Composer;
use crate::config::Config;
use crate::feed::{EventFeed, FeedScope};
use crate::session::{SessionStore, StoredCredentials};

/// Role application core.
#[derive(Debug, Clone)]
pub struct Role {
    now: Zoned,
    config: Config,
    client: StrapiClient,
    sessions: SessionStore,
}

impl Role {
    /// Creates a new Role instance with the given configuration.
    pub async fn new(mut config: Config) -> Result<Self, Box<dyn Error>> {
        let now = Zoned::now();

        config.normalize()?;
        let state_dir = config
            .state_dir
            .clone()
            .ok_or("State directory is not configured")?;
        tokio::fs::create_dir_all(&state_dir)
            .await
            .map_err(|e| format!("Failed to create state directory: {e}"))?;

        let client = StrapiClient::new(&config.server)
            .map_err(|e| format!("Failed to initialize client: {e}"))?;
        let sessions = SessionStore::new(&state_dir);

        Ok(Self {
            now,
            config,
            client,
            sessions,
        })
    }

    /// The current time in the Role instance.
    #[must_use]
    pub fn now(&self) -> &Zoned {
        &self.now
    }

    /// Refresh the current time to now.
    pub fn refresh_now(&mut self) {
        self.now = Zoned::now();
    }

    /// The normalized configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Signs in and remembers the credentials for later runs.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, Box<dyn Error>> {
        let auth = account::login(&self.client, email, password).await?;
        let credentials = StoredCredentials {
            jwt: auth.jwt,
            user: auth.user,
        };
        self.sessions.save(&credentials).await?;
        tracing::info!(user = %credentials.user.id, "signed in");
        Ok(AuthSession::decode(&credentials)?)
    }

    /// Creates an account. The user signs in separately afterwards.
    pub async fn register(&self, form: &Registration) -> Result<User, Box<dyn Error>> {
        let auth = account::register(&self.client, form).await?;
        tracing::info!(user = %auth.user.id, "account created");
        Ok(auth.user)
    }

    /// Forgets the stored credentials. Returns whether anyone was signed in.
    pub async fn logout(&self) -> Result<bool, Box<dyn Error>> {
        self.sessions.clear().await
    }

    /// The signed-in session.
    pub async fn session(&self) -> Result<AuthSession, AuthError> {
        let credentials = self
            .sessions
            .load()
            .await
            .map_err(|e| AuthError::Storage(e.to_string()))?
            .ok_or(AuthError::NotSignedIn)?;

        let session = AuthSession::decode(&credentials)?;
        if session.is_expired(self.now.timestamp()) {
            tracing::warn!(user = %session.user_id, "stored session token has expired");
        }
        Ok(session)
    }

    /// The user the server associates with the stored token.
    pub async fn whoami(&self) -> Result<User, Box<dyn Error>> {
        let session = self.session().await?;
        Ok(self.backend_for(&session).me().await?)
    }

    /// An anonymous client.
    #[must_use]
    pub fn client(&self) -> &StrapiClient {
        &self.client
    }

    /// A client acting on behalf of the session's user.
    #[must_use]
    pub fn backend_for(&self, session: &AuthSession) -> StrapiClient {
        self.client.with_token(session.token.clone())
    }

    /// The client `scope` is read with. Only the owner scope sends the session
    /// token; the public listing is always fetched anonymously.
    #[must_use]
    pub fn feed_backend(&self, scope: FeedScope, session: Option<&AuthSession>) -> StrapiClient {
        match (scope, session) {
            (FeedScope::Owner(_), Some(session)) => self.backend_for(session),
            _ => self.client.clone(),
        }
    }

    /// A composer for a new event starting now.
    #[must_use]
    pub fn composer(&self) -> Composer {
        Composer::new(&self.now, self.config.time_snap())
    }

    /// The home feed with every published event.
    #[must_use]
    pub fn home_feed(&self) -> EventFeed {
        EventFeed::new(FeedScope::All)
    }

    /// The profile feed with the session user's events.
    #[must_use]
    pub fn profile_feed(&self, session: &AuthSession) -> EventFeed {
        EventFeed::new(FeedScope::Owner(session.user_id))
    }

    /// Absolute URL of an event image.
    #[must_use]
    pub fn media_url(&self, media: &Media) -> String {
        self.client.media_url(media)
    }
}
