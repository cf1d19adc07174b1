// SPDX-FileCopyrightText: 2025-2026 Zig Team <dev@zig-app.com.br>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end workflow tests for the role-core crate.
//!
//! These tests drive the authoring and listing flows through several steps,
//! against an in-memory backend or a mock Strapi server.

mod account;
mod compose;
mod feed;
mod strapi_roundtrip;
