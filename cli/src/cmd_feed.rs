// SPDX-FileCopyrightText: 2025-2026 Zig Team <dev@zig-app.com.br>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::Command;
use role_core::{AuthError, Role};

use crate::tui;

/// Browse every published event.
#[derive(Debug, Clone, Copy)]
pub struct CmdHome;

impl CmdHome {
    pub const NAME: &str = "home";

    pub fn command() -> Command {
        Command::new(Self::NAME).about("Browse all events (default)")
    }

    pub async fn run(self, role: &mut Role) -> Result<(), Box<dyn Error>> {
        tracing::debug!("opening the home feed...");
        let session = match role.session().await {
            Ok(session) => Some(session),
            Err(AuthError::NotSignedIn) => None,
            Err(e) => {
                tracing::warn!("ignoring the stored session: {e}");
                None
            }
        };

        let feed = role.home_feed();
        tui::browse_feed(role, session.as_ref(), feed).await
    }
}

/// Browse and manage the signed-in user's events.
#[derive(Debug, Clone, Copy)]
pub struct CmdProfile;

impl CmdProfile {
    pub const NAME: &str = "profile";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("me")
            .about("Browse, edit and delete your own events")
    }

    pub async fn run(self, role: &mut Role) -> Result<(), Box<dyn Error>> {
        tracing::debug!("opening the profile feed...");
        let session = role.session().await?;
        let feed = role.profile_feed(&session);
        tui::browse_feed(role, Some(&session), feed).await
    }
}
