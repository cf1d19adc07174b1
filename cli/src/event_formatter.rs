// SPDX-FileCopyrightText: 2025-2026 Zig Team <dev@zig-app.com.br>
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;
use std::fmt;

use colored::Color;
use jiff::tz::TimeZone;
use role_core::Event;

use crate::table::{PaddingDirection, Table, TableColumn, TableStyleBasic, TableStyleJson};
use crate::util::{OutputFormat, format_time_span};

/// An event ready to be printed.
#[derive(Debug)]
pub struct EventRow<'a> {
    pub event: &'a Event,
    /// Absolute URL of the cover image.
    pub image_url: Option<String>,
}

#[derive(Debug)]
pub struct EventFormatter {
    columns: Vec<EventColumn>,
    format: OutputFormat,
}

impl EventFormatter {
    pub fn new(columns: Vec<EventColumn>) -> Self {
        Self {
            columns,
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, rows: &'a [EventRow<'a>]) -> Display<'a> {
        Display {
            rows,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    rows: &'a [EventRow<'a>],
    formatter: &'a EventFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = &self.formatter.columns;
        match self.formatter.format {
            OutputFormat::Json => write!(f, "{}", Table::new(TableStyleJson::new(), columns, self.rows)),
            OutputFormat::Table => write!(f, "{}", Table::new(TableStyleBasic::new(), columns, self.rows)),
        }
    }
}

#[derive(Debug, Clone)]
pub enum EventColumn {
    Id,
    Title,
    TimeSpan(TimeZone),
    Location,
    Description,
    Image,
}

impl EventColumn {
    pub fn id() -> Self {
        Self::Id
    }

    pub fn title() -> Self {
        Self::Title
    }

    pub fn time_span(tz: TimeZone) -> Self {
        Self::TimeSpan(tz)
    }

    pub fn location() -> Self {
        Self::Location
    }

    pub fn description() -> Self {
        Self::Description
    }

    pub fn image() -> Self {
        Self::Image
    }
}

impl<'r> TableColumn<EventRow<'r>> for EventColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::TimeSpan(_) => "time",
            Self::Location => "location",
            Self::Description => "description",
            Self::Image => "image",
        }
        .into()
    }

    fn format<'a>(&self, row: &'a EventRow<'r>) -> Cow<'a, str> {
        let event = row.event;
        match self {
            Self::Id => format!("#{}", event.id).into(),
            Self::Title => event.title.as_str().into(),
            Self::TimeSpan(tz) => format_time_span(event.start_date, event.end_date, tz).into(),
            Self::Location => event.location.as_str().into(),
            // keep table rows on one line
            Self::Description => event.description.replace('\n', " ").into(),
            Self::Image => row.image_url.as_deref().unwrap_or_default().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            Self::Id => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn color(&self, _row: &EventRow<'r>) -> Option<Color> {
        match self {
            Self::Id | Self::Image => Some(Color::BrightBlack),
            Self::TimeSpan(_) => Some(Color::Cyan),
            _ => None,
        }
    }
}
