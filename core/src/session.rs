// SPDX-FileCopyrightText: 2025-2026 Zig Team <dev@zig-app.com.br>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::{Path, PathBuf};

use role_strapi::User;
use tokio::fs;

/// What a successful sign-in leaves on disk.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StoredCredentials {
    /// The bearer token.
    pub jwt: String,
    /// The signed-in user as returned by the server.
    pub user: User,
}

/// Persists the signed-in credentials as a JSON file.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// File name of the session inside the state directory.
    pub const FILE_NAME: &str = "session.json";

    /// A store keeping the session under the given state directory.
    #[must_use]
    pub fn new(state_dir: &Path) -> Self {
        Self {
            path: state_dir.join(Self::FILE_NAME),
        }
    }

    /// Path of the session file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored credentials, if any.
    pub async fn load(&self) -> Result<Option<StoredCredentials>, Box<dyn Error>> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(format!("Failed to read session file: {e}").into()),
        };

        let credentials = serde_json::from_str(&raw)
            .map_err(|e| format!("Failed to parse session file: {e}"))?;
        Ok(Some(credentials))
    }

    /// Stores the credentials, replacing previous ones.
    pub async fn save(&self, credentials: &StoredCredentials) -> Result<(), Box<dyn Error>> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| format!("Failed to create state directory: {e}"))?;
        }

        let raw = serde_json::to_string_pretty(credentials)?;
        fs::write(&self.path, raw)
            .await
            .map_err(|e| format!("Failed to write session file: {e}"))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600)).await?;
        }

        tracing::debug!(path = %self.path.display(), "session saved");
        Ok(())
    }

    /// Removes the stored credentials. Returns whether there were any.
    pub async fn clear(&self) -> Result<bool, Box<dyn Error>> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(format!("Failed to remove session file: {e}").into()),
        }
    }
}
