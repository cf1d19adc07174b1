// SPDX-FileCopyrightText: 2025-2026 Zig Team <dev@zig-app.com.br>
//
// SPDX-License-Identifier: Apache-2.0

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use jiff::Timestamp;
use role_strapi::UserId;

use crate::session::StoredCredentials;

/// Why no usable session is available.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Nobody is signed in.
    #[error("You are not signed in")]
    NotSignedIn,

    /// The stored session could not be read.
    #[error("Failed to read the stored session: {0}")]
    Storage(String),

    /// The stored token could not be decoded.
    #[error("Failed to decode the session token: {0}")]
    Decode(String),
}

/// The signed-in user as derived from the stored token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    /// Id of the signed-in user, read from the token claims.
    pub user_id: UserId,
    /// Name of the signed-in user.
    pub username: String,
    /// The bearer token.
    pub token: String,
    /// When the token stops being accepted, if it says so.
    pub expires_at: Option<Timestamp>,
}

#[derive(Debug, serde::Deserialize)]
struct Claims {
    id: UserId,
    #[serde(default)]
    exp: Option<i64>,
}

impl AuthSession {
    /// Derives the session from stored credentials by decoding the token payload.
    ///
    /// The signature is not verified; the server does that on every call.
    pub fn decode(credentials: &StoredCredentials) -> Result<Self, AuthError> {
        let claims = decode_claims(&credentials.jwt)?;
        if claims.id != credentials.user.id {
            tracing::warn!(
                token = %claims.id,
                stored = %credentials.user.id,
                "stored user does not match token, using token"
            );
        }

        let expires_at = claims.exp.and_then(|exp| match Timestamp::from_second(exp) {
            Ok(t) => Some(t),
            Err(e) => {
                tracing::warn!(exp, "ignoring invalid token expiry: {e}");
                None
            }
        });

        Ok(Self {
            user_id: claims.id,
            username: credentials.user.username.clone(),
            token: credentials.jwt.clone(),
            expires_at,
        })
    }

    /// Whether the token has expired at `now`.
    #[must_use]
    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.expires_at.is_some_and(|exp| exp <= now)
    }
}

fn decode_claims(jwt: &str) -> Result<Claims, AuthError> {
    let mut parts = jwt.split('.');
    let payload = match (parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(payload), Some(_)) if parts.next().is_none() => payload,
        _ => return Err(AuthError::Decode("token is not a JWT".to_string())),
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| AuthError::Decode(format!("invalid base64 payload: {e}")))?;
    serde_json::from_slice(&bytes).map_err(|e| AuthError::Decode(format!("invalid claims: {e}")))
}
