// SPDX-FileCopyrightText: 2025-2026 Zig Team <dev@zig-app.com.br>
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::OnceLock;

use regex::Regex;
use role_strapi::{AuthResponse, StrapiError};

use crate::backend::Backend;

const MIN_PASSWORD_LEN: usize = 8;

/// Why signing in or signing up did not succeed.
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    /// A required field is blank.
    #[error("Please fill in all fields.")]
    MissingFields,

    /// The e-mail address is malformed.
    #[error("Please enter a valid e-mail address.")]
    InvalidEmail,

    /// The password does not meet the rules.
    #[error("Password must be at least 8 characters long and contain letters and numbers.")]
    WeakPassword,

    /// The server refused the identifier/password pair.
    #[error("Invalid e-mail or password.")]
    InvalidCredentials,

    /// Signing in failed for any other reason.
    #[error("Failed to sign in. Please try again.")]
    SignInFailed(#[source] StrapiError),

    /// The server rejected the registration with a message for the user.
    #[error("{0}")]
    Rejected(String),

    /// Registration failed without a message from the server.
    #[error("Registration failed. Please try again later.")]
    RegistrationFailed(#[source] StrapiError),
}

/// The sign-up form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registration {
    /// Public user name.
    pub username: String,
    /// E-mail address, also used to sign in.
    pub email: String,
    /// Plain-text password.
    pub password: String,
}

/// Checks the sign-in form before anything is sent.
pub fn validate_login(email: &str, password: &str) -> Result<(), AccountError> {
    if email.trim().is_empty() || password.trim().is_empty() {
        return Err(AccountError::MissingFields);
    }
    Ok(())
}

/// Checks the sign-up form before anything is sent.
pub fn validate_registration(form: &Registration) -> Result<(), AccountError> {
    if [&form.username, &form.email, &form.password]
        .iter()
        .any(|a| a.trim().is_empty())
    {
        return Err(AccountError::MissingFields);
    }

    if !email_regex().is_match(form.email.trim()) {
        return Err(AccountError::InvalidEmail);
    }

    if !is_strong_password(&form.password) {
        return Err(AccountError::WeakPassword);
    }

    Ok(())
}

/// Signs in, translating the server's refusal into a user-facing message.
pub(crate) async fn login(
    backend: &dyn Backend,
    email: &str,
    password: &str,
) -> Result<AuthResponse, AccountError> {
    validate_login(email, password)?;
    backend.login(email.trim(), password).await.map_err(|e| {
        tracing::debug!("sign in rejected: {e}");
        match e.server_message() {
            Some(msg) if msg.trim().eq_ignore_ascii_case("invalid identifier or password") => {
                AccountError::InvalidCredentials
            }
            _ => AccountError::SignInFailed(e),
        }
    })
}

/// Creates an account, surfacing the server's message verbatim.
pub(crate) async fn register(
    backend: &dyn Backend,
    form: &Registration,
) -> Result<AuthResponse, AccountError> {
    validate_registration(form)?;
    backend
        .register(form.username.trim(), form.email.trim(), &form.password)
        .await
        .map_err(|e| match e.server_message() {
            Some(msg) => AccountError::Rejected(msg.to_string()),
            None => AccountError::RegistrationFailed(e),
        })
}

fn email_regex() -> &'static Regex {
    const RE: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(RE).unwrap())
}

fn is_strong_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
        && password.chars().any(|c| c.is_ascii_alphabetic())
        && password.chars().any(|c| c.is_ascii_digit())
}
