// SPDX-FileCopyrightText: 2025-2026 Zig Team <dev@zig-app.com.br>
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client wrapper with bearer authentication and Strapi error decoding.

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};

use crate::config::StrapiConfig;
use crate::error::StrapiError;

/// HTTP client for Strapi operations.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is empty or HTTP client creation fails.
    pub fn new(config: &StrapiConfig) -> Result<Self, StrapiError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(StrapiError::Config("base_url must not be empty".to_string()));
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { client, base_url })
    }

    /// The API base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds a request for an API path, attaching the bearer token if given.
    pub fn build_request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let req = self
            .client
            .request(method, url)
            .header("Accept", "application/json");

        match token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Executes a request and turns non-success statuses into errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or returns an error status code.
    pub async fn execute(&self, req: RequestBuilder) -> Result<Response, StrapiError> {
        let resp = req.send().await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let url = resp.url().path().to_string();
        let text = resp
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read response".to_string());
        let message = error_message(&text).unwrap_or_else(|| {
            status
                .canonical_reason()
                .map_or_else(|| status.to_string(), str::to_string)
        });

        tracing::debug!(%status, %url, %message, "request rejected");
        Err(match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => StrapiError::Unauthorized(message),
            StatusCode::NOT_FOUND => StrapiError::NotFound(url),
            status => StrapiError::Api {
                status: status.as_u16(),
                message,
            },
        })
    }
}

/// Extracts `error.message` from a Strapi error body.
fn error_message(body: &str) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct Body {
        error: ErrorBody,
    }

    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: String,
    }

    serde_json::from_str::<Body>(body)
        .ok()
        .map(|b| b.error.message)
        .filter(|m| !m.trim().is_empty())
}
