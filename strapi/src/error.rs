// SPDX-FileCopyrightText: 2025-2026 Zig Team <dev@zig-app.com.br>
//
// SPDX-License-Identifier: Apache-2.0

/// Strapi client errors.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum StrapiError {
    /// Transport-level failure (connection, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(String),

    /// The server rejected the request with a Strapi error body.
    #[error("{message} (status {status})")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message reported by the server.
        message: String,
    },

    /// Missing or rejected credentials.
    #[error("Not authorized: {0}")]
    Unauthorized(String),

    /// Resource not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The response body could not be decoded.
    #[error("Invalid server response: {0}")]
    InvalidResponse(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Local file could not be read for upload.
    #[error("Failed to read {path}: {message}")]
    File {
        /// Path of the file.
        path: String,
        /// Underlying IO error.
        message: String,
    },
}

impl StrapiError {
    /// The message the server attached to the failure, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } | Self::Unauthorized(message) => Some(message),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for StrapiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::InvalidResponse(e.to_string())
        } else {
            Self::Http(e.to_string())
        }
    }
}
