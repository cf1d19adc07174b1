// SPDX-FileCopyrightText: 2025-2026 Zig Team <dev@zig-app.com.br>
//
// SPDX-License-Identifier: Apache-2.0

mod app;
mod component;
mod component_form;
mod component_page;
mod compose_store;
mod dispatcher;
mod editor;
mod feed;
mod feed_store;

pub use app::{browse_feed, compose_event};
