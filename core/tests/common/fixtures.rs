// SPDX-FileCopyrightText: 2025-2026 Zig Team <dev@zig-app.com.br>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use std::path::{Path, PathBuf};

use jiff::Zoned;
use role_core::{
    AuthSession, Composer, Config, Event, EventId, Media, MediaId, StrapiConfig, TextField,
    TimeSnap, UserId,
};

/// A fixed point in time.
#[must_use]
pub fn test_now() -> Zoned {
    "2025-03-01T14:07:00-03:00[America/Sao_Paulo]".parse().unwrap()
}

/// A configuration pointing at `base_url` with state kept in `state_dir`.
#[must_use]
pub fn test_config(base_url: &str, state_dir: &Path) -> Config {
    let mut config = Config::new(StrapiConfig {
        base_url: base_url.to_string(),
        ..Default::default()
    });
    config.state_dir = Some(state_dir.to_path_buf());
    config
}

/// A signed-in session for `user`.
#[must_use]
pub fn test_session(user: u64) -> AuthSession {
    AuthSession {
        user_id: UserId(user),
        username: "ana".to_string(),
        token: "a.b.c".to_string(),
        expires_at: None,
    }
}

/// Writes a small PNG file into `dir`.
pub fn test_image(dir: &Path) -> PathBuf {
    let path = dir.join("praia.png");
    std::fs::write(&path, b"\x89PNG\r\n\x1a\n").unwrap();
    path
}

/// A published event.
#[must_use]
pub fn test_event(id: u64, owner: u64, title: &str) -> Event {
    Event {
        id: EventId(id),
        title: title.to_string(),
        start_date: Some("2025-03-08T12:00:00Z".parse().unwrap()),
        end_date: Some("2025-03-08T15:00:00Z".parse().unwrap()),
        location: "Ipanema".to_string(),
        description: "Dia de sol".to_string(),
        image: Some(Media {
            id: MediaId(id * 10),
            url: format!("/uploads/{id}.png"),
            name: None,
            mime: Some("image/png".to_string()),
        }),
        owner_id: Some(UserId(owner)),
    }
}

/// A composer with every required field filled and a local image attached.
pub fn filled_composer(image: &Path) -> Composer {
    let mut composer = Composer::new(&test_now(), TimeSnap::Exact);
    composer.pick_image(image).unwrap();
    composer.set_text(TextField::Title, "Praia");
    composer.set_text(TextField::Description, "Dia de sol");
    composer.set_text(TextField::Location, "Ipanema");
    composer
}
