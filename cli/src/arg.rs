// SPDX-FileCopyrightText: 2025-2026 Zig Team <dev@zig-app.com.br>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use clap::{Arg, ArgMatches, ValueHint, arg, value_parser};
use role_core::EventId;

use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn verbose() -> Arg {
        arg!(-v --verbose "Show more detailed information")
    }

    pub fn get_verbose(matches: &ArgMatches) -> bool {
        matches.get_flag("verbose")
    }

    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn get_output_format(matches: &ArgMatches) -> OutputFormat {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }

    pub fn yes() -> Arg {
        arg!(-y --yes "Skip the confirmation prompt")
    }

    pub fn get_yes(matches: &ArgMatches) -> bool {
        matches.get_flag("yes")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EventArgs;

impl EventArgs {
    pub fn id(action: &str) -> Arg {
        arg!(id: <ID>)
            .help(format!("The id of the event to {action}"))
            .value_parser(value_parser!(EventId))
    }

    pub fn get_id(matches: &ArgMatches) -> Option<EventId> {
        matches.get_one("id").copied()
    }

    pub fn title() -> Arg {
        arg!(-t --title <TITLE> "Title of the event")
    }

    pub fn get_title(matches: &ArgMatches) -> Option<String> {
        matches.get_one("title").cloned()
    }

    pub fn start() -> Arg {
        arg!(--start <START> "Start date and time of the event")
    }

    pub fn get_start(matches: &ArgMatches) -> Option<String> {
        matches.get_one("start").cloned()
    }

    pub fn end() -> Arg {
        arg!(--end <END> "End date and time of the event")
    }

    pub fn get_end(matches: &ArgMatches) -> Option<String> {
        matches.get_one("end").cloned()
    }

    pub fn location() -> Arg {
        arg!(-l --location <LOCATION> "Where the event takes place")
    }

    pub fn get_location(matches: &ArgMatches) -> Option<String> {
        matches.get_one("location").cloned()
    }

    pub fn description() -> Arg {
        arg!(-d --description <DESCRIPTION> "Description of the event")
    }

    pub fn get_description(matches: &ArgMatches) -> Option<String> {
        matches.get_one("description").cloned()
    }

    pub fn image() -> Arg {
        arg!(-i --image <IMAGE> "Path to the cover image")
            .value_parser(value_parser!(PathBuf))
            .value_hint(ValueHint::FilePath)
    }

    pub fn get_image(matches: &ArgMatches) -> Option<PathBuf> {
        matches.get_one("image").cloned()
    }

    pub fn mine() -> Arg {
        arg!(-m --mine "Only list your own events")
    }

    pub fn get_mine(matches: &ArgMatches) -> bool {
        matches.get_flag("mine")
    }

    pub fn expand() -> Arg {
        arg!(-e --expand "Show description and image of each event")
    }

    pub fn get_expand(matches: &ArgMatches) -> bool {
        matches.get_flag("expand")
    }
}
