// SPDX-FileCopyrightText: 2025-2026 Zig Team <dev@zig-app.com.br>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface of Role: account commands, event commands with table
//! or JSON output, and the terminal event editor and feed browser.

mod arg;
mod cli;
mod cmd_account;
mod cmd_event;
mod cmd_feed;
mod cmd_generate_completion;
mod config;
mod event_formatter;
mod prompt;
mod table;
mod tui;
mod util;

pub use crate::cli::{Cli, Commands, run};
pub use crate::config::parse_config;
