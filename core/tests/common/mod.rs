// SPDX-FileCopyrightText: 2025-2026 Zig Team <dev@zig-app.com.br>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Test data factories (fixtures)
//! - An in-memory backend recording every remote call

mod fake_backend;
mod fixtures;

#[allow(unused_imports)]
pub use fake_backend::{Call, FakeBackend, Op};
#[allow(unused_imports)]
pub use fixtures::{
    filled_composer, test_config, test_event, test_image, test_now, test_session,
};
