// SPDX-FileCopyrightText: 2025-2026 Zig Team <dev@zig-app.com.br>
//
// SPDX-License-Identifier: Apache-2.0

/// Strapi server configuration.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct StrapiConfig {
    /// Base URL of the REST API, including the `/api` prefix
    /// (e.g., `https://zig-app.onrender.com/api`).
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// User agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

const fn default_timeout() -> u64 {
    10
}

fn default_user_agent() -> String {
    concat!("role-strapi/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for StrapiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}
