// SPDX-FileCopyrightText: 2025-2026 Zig Team <dev@zig-app.com.br>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use jiff::Timestamp;
use serde::{Deserialize, Deserializer, Serialize};

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            /// Returns the raw numeric value.
            #[must_use]
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().trim_start_matches('#').parse().map(Self)
            }
        }
    };
}

numeric_id!(
    /// Server-assigned identifier of an event.
    EventId
);

numeric_id!(
    /// Server-assigned identifier of an uploaded media file.
    MediaId
);

numeric_id!(
    /// Server-assigned identifier of a user.
    UserId
);

/// A registered user, as returned by the users-permissions plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User identifier.
    pub id: UserId,
    /// Public user name.
    pub username: String,
    /// E-mail address.
    #[serde(default)]
    pub email: String,
}

/// Response of the login and register endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    /// Signed JSON web token.
    pub jwt: String,
    /// The authenticated user.
    pub user: User,
}

/// An uploaded media file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    /// Media identifier.
    pub id: MediaId,
    /// URL of the file, usually relative to the server origin.
    pub url: String,
    /// Original file name.
    #[serde(default)]
    pub name: Option<String>,
    /// MIME type of the file.
    #[serde(default)]
    pub mime: Option<String>,
}

/// An event stored on the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Event identifier.
    pub id: EventId,
    /// Title of the event.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// When the event starts.
    #[serde(default)]
    pub start_date: Option<Timestamp>,
    /// When the event ends.
    #[serde(default)]
    pub end_date: Option<Timestamp>,
    /// Where the event takes place.
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    /// Free-form description.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Cover image, when populated.
    #[serde(default)]
    pub image: Option<Media>,
    /// The user who created the event.
    #[serde(default, rename = "ownerID", deserialize_with = "owner_ref")]
    pub owner_id: Option<UserId>,
}

/// Payload used to create or replace an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventInput {
    /// Title of the event.
    pub title: String,
    /// When the event starts.
    pub start_date: Timestamp,
    /// When the event ends.
    pub end_date: Timestamp,
    /// Where the event takes place.
    pub location: String,
    /// Free-form description.
    pub description: String,
    /// Identifier of the uploaded cover image.
    pub image: MediaId,
    /// The user who owns the event.
    #[serde(rename = "ownerID")]
    pub owner_id: UserId,
}

/// A local file to be sent to the upload endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    /// Path of the file on disk.
    pub path: PathBuf,
    /// File name reported to the server.
    pub file_name: String,
    /// MIME type reported to the server.
    pub mime: String,
}

/// The `{ "data": ... }` wrapper used by Strapi content endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: T,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Accepts the owner either as a bare id or as a populated relation object.
fn owner_ref<'de, D>(deserializer: D) -> Result<Option<UserId>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value;

    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| match v {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.parse().ok(),
            Value::Object(o) => o.get("id").and_then(Value::as_u64),
            _ => None,
        })
        .map(UserId))
}
