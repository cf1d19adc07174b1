// SPDX-FileCopyrightText: 2025-2026 Zig Team <dev@zig-app.com.br>
//
// SPDX-License-Identifier: Apache-2.0

//! # Role Core
//!
//! Domain layer of Role: authoring event drafts, publishing them to the Strapi
//! backend, and browsing the published events.
//!
//! The authoring flow lives in [`Composer`], which owns an [`EventDraft`], the
//! single open field [`Dialog`] and the submission logic. Listing screens are
//! modelled by [`EventFeed`]. All remote calls go through the [`Backend`] trait,
//! implemented for [`StrapiClient`].

#![warn(
    trivial_casts,
    trivial_numeric_casts,
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
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

mod account;
mod auth;
mod backend;
mod composer;
mod config;
mod dialog;
mod draft;
mod feed;
mod image;
mod picker;
mod role;
mod session;

pub use crate::account::{AccountError, Registration, validate_login, validate_registration};
pub use crate::auth::{AuthError, AuthSession};
pub use crate::backend::Backend;
pub use crate::composer::{ComposeMode, Composer, SubmitError};
pub use crate::config::{APP_NAME, Config};
pub use crate::dialog::{Dialog, TextField};
pub use crate::draft::{DraftField, DraftImage, EventDraft};
pub use crate::feed::{EventFeed, FeedError, FeedScope, ViewState};
pub use crate::image::{ImageError, LocalImage};
pub use crate::picker::{Pick, TimeSlot, TimeSnap};
pub use crate::role::Role;
pub use crate::session::{SessionStore, StoredCredentials};
pub use role_strapi::{
    AuthResponse, Event, EventId, EventInput, Media, MediaId, StrapiClient, StrapiConfig,
    StrapiError, User, UserId,
};
