// SPDX-FileCopyrightText: 2025-2026 Zig Team <dev@zig-app.com.br>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use jiff::civil;
use jiff::tz::TimeZone;
use jiff::{Timestamp, Zoned};

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

/// Parses a user supplied date and time in the time zone of `now`.
///
/// Accepts `YYYY-MM-DD HH:MM`, `HH:MM` (today) and RFC 3339.
pub fn parse_datetime(now: &Zoned, s: &str) -> Result<Zoned, Box<dyn Error>> {
    let s = s.trim();
    let tz = now.time_zone().clone();

    if let Ok(dt) = civil::DateTime::strptime("%Y-%m-%d %H:%M", s) {
        return Ok(dt.to_zoned(tz)?);
    }

    if let Ok(time) = civil::Time::strptime("%H:%M", s) {
        return Ok(now.date().to_datetime(time).to_zoned(tz)?);
    }

    if let Ok(ts) = s.parse::<Timestamp>() {
        return Ok(ts.to_zoned(tz));
    }

    Err(format!(
        "Invalid date format: '{s}'. Expected format: YYYY-MM-DD HH:MM, HH:MM or RFC 3339"
    )
    .into())
}

pub fn format_datetime(t: &Zoned) -> String {
    t.strftime("%Y-%m-%d %H:%M").to_string()
}

/// Formats the span of an event, e.g. `Sat 01 Mar, 14:00 to 18:00`.
pub fn format_time_span(start: Option<Timestamp>, end: Option<Timestamp>, tz: &TimeZone) -> String {
    const DAY: &str = "%a %d %b";
    const DAY_TIME: &str = "%a %d %b %H:%M";

    let start = start.map(|a| a.to_zoned(tz.clone()));
    let end = end.map(|a| a.to_zoned(tz.clone()));
    match (start, end) {
        (Some(s), Some(e)) if s.date() == e.date() => format!(
            "{}, {} to {}",
            s.strftime(DAY),
            s.strftime("%H:%M"),
            e.strftime("%H:%M")
        ),
        (Some(s), Some(e)) => format!("{} to {}", s.strftime(DAY_TIME), e.strftime(DAY_TIME)),
        (Some(s), None) => s.strftime(DAY_TIME).to_string(),
        (None, Some(e)) => format!("until {}", e.strftime(DAY_TIME)),
        (None, None) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> Zoned {
        "2025-03-01T14:07:00-03:00[America/Sao_Paulo]".parse().unwrap()
    }

    #[test]
    fn test_parse_datetime_full() {
        let dt = parse_datetime(&now(), "2025-03-08 19:30").unwrap();
        assert_eq!(format_datetime(&dt), "2025-03-08 19:30");
        assert_eq!(dt.time_zone(), now().time_zone());
    }

    #[test]
    fn test_parse_datetime_time_only_is_today() {
        let dt = parse_datetime(&now(), "09:15").unwrap();
        assert_eq!(format_datetime(&dt), "2025-03-01 09:15");
    }

    #[test]
    fn test_parse_datetime_rfc3339() {
        let dt = parse_datetime(&now(), "2025-03-08T22:30:00Z").unwrap();
        assert_eq!(format_datetime(&dt), "2025-03-08 19:30");
    }

    #[test]
    fn test_parse_datetime_invalid() {
        for s in ["", "tomorrow", "2025-13-01 10:00", "25:00"] {
            assert!(parse_datetime(&now(), s).is_err(), "{s}");
        }
    }

    #[test]
    fn test_format_time_span_same_day() {
        let tz = TimeZone::UTC;
        let start = "2025-03-01T14:00:00Z".parse().ok();
        let end = "2025-03-01T18:30:00Z".parse().ok();
        assert_eq!(format_time_span(start, end, &tz), "Sat 01 Mar, 14:00 to 18:30");
    }

    #[test]
    fn test_format_time_span_across_days() {
        let tz = TimeZone::UTC;
        let start = "2025-03-01T22:00:00Z".parse().ok();
        let end = "2025-03-02T02:00:00Z".parse().ok();
        assert_eq!(
            format_time_span(start, end, &tz),
            "Sat 01 Mar 22:00 to Sun 02 Mar 02:00"
        );
        assert_eq!(format_time_span(None, None, &tz), "");
    }
}
