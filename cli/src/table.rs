// SPDX-FileCopyrightText: 2025-2026 Zig Team <dev@zig-app.com.br>
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;
use std::fmt;

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

pub trait TableColumn<T> {
    /// Header of the column, also the key in JSON output.
    fn name(&self) -> Cow<'_, str>;

    fn format<'a>(&self, data: &'a T) -> Cow<'a, str>;

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn color(&self, _data: &T) -> Option<Color> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

pub trait TableStyle {
    fn fmt<T, C: TableColumn<T>>(
        &self,
        f: &mut fmt::Formatter<'_>,
        columns: &[C],
        data: &[T],
    ) -> fmt::Result;
}

#[derive(Debug)]
pub struct Table<'a, S: TableStyle, C, T> {
    style: S,
    columns: &'a [C],
    data: &'a [T],
}

impl<'a, S: TableStyle, C: TableColumn<T>, T> Table<'a, S, C, T> {
    pub fn new(style: S, columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            style,
            columns,
            data,
        }
    }
}

impl<S: TableStyle, C: TableColumn<T>, T> fmt::Display for Table<'_, S, C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.style.fmt(f, self.columns, self.data)
    }
}

/// Aligned plain-text rows, colored per cell.
#[derive(Debug)]
pub struct TableStyleBasic {
    separator: &'static str,
    header: bool,
}

impl TableStyleBasic {
    pub fn new() -> Self {
        Self {
            separator: "  ",
            header: false,
        }
    }

    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }
}

impl TableStyle for TableStyleBasic {
    fn fmt<T, C: TableColumn<T>>(
        &self,
        f: &mut fmt::Formatter<'_>,
        columns: &[C],
        data: &[T],
    ) -> fmt::Result {
        let headers: Vec<_> = columns.iter().map(|c| c.name().into_owned()).collect();
        let rows: Vec<Vec<Cow<'_, str>>> = data
            .iter()
            .map(|d| columns.iter().map(|c| c.format(d)).collect())
            .collect();

        let mut widths = vec![0; columns.len()];
        if self.header {
            update_widths(&mut widths, headers.iter().map(String::as_str));
        }
        for row in &rows {
            update_widths(&mut widths, row.iter().map(AsRef::as_ref));
        }

        let last = columns.len().saturating_sub(1);
        if self.header {
            for (i, (name, width)) in headers.iter().zip(&widths).enumerate() {
                let cell = pad(name, *width, PaddingDirection::Left, i == last);
                write!(f, "{}", cell.bold())?;
                write!(f, "{}", if i == last { "\n" } else { self.separator })?;
            }
        }

        for (row, d) in rows.iter().zip(data) {
            for (i, ((col, cell), width)) in columns.iter().zip(row).zip(&widths).enumerate() {
                let cell = pad(cell, *width, col.padding_direction(), i == last);
                match col.color(d) {
                    Some(color) => write!(f, "{}", cell.color(color))?,
                    None => write!(f, "{cell}")?,
                }
                write!(f, "{}", if i == last { "\n" } else { self.separator })?;
            }
        }
        Ok(())
    }
}

/// A JSON array with one object per row, keyed by column name.
#[derive(Debug)]
pub struct TableStyleJson;

impl TableStyleJson {
    pub fn new() -> Self {
        Self
    }
}

impl TableStyle for TableStyleJson {
    fn fmt<T, C: TableColumn<T>>(
        &self,
        f: &mut fmt::Formatter<'_>,
        columns: &[C],
        data: &[T],
    ) -> fmt::Result {
        let rows: Vec<serde_json::Map<String, serde_json::Value>> = data
            .iter()
            .map(|d| {
                columns
                    .iter()
                    .map(|c| (c.name().into_owned(), c.format(d).into_owned().into()))
                    .collect()
            })
            .collect();

        let json = serde_json::to_string_pretty(&rows).map_err(|_| fmt::Error)?;
        writeln!(f, "{json}")
    }
}

fn update_widths<'a>(widths: &mut [usize], cells: impl Iterator<Item = &'a str>) {
    for (w, cell) in widths.iter_mut().zip(cells) {
        *w = (*w).max(cell.width());
    }
}

fn pad(cell: &str, width: usize, direction: PaddingDirection, last: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(cell.width()));
    match direction {
        // last column does not need padding if it's left-aligned
        PaddingDirection::Left if last => cell.to_string(),
        PaddingDirection::Left => format!("{cell}{fill}"),
        PaddingDirection::Right => format!("{fill}{cell}"),
    }
}
