// SPDX-FileCopyrightText: 2025-2026 Zig Team <dev@zig-app.com.br>
//
// SPDX-License-Identifier: Apache-2.0

//! Client for the Strapi REST API backing Role: authentication, events and media uploads.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

mod client;
mod config;
mod error;
mod http;
mod types;

pub use crate::client::StrapiClient;
pub use crate::config::StrapiConfig;
pub use crate::error::StrapiError;
pub use crate::types::{
    AuthResponse, Event, EventId, EventInput, Media, MediaId, UploadFile, User, UserId,
};
