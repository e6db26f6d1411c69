//! Working-hours text parsing.
//!
//! Clinic records carry office hours as free text like
//! `"Monday: 8:00 AM - 6:00 PM | Saturday: 9:00 AM - 4:00 PM"`. Parsing
//! extracts one entry per recognized weekday and cosmetically cleans the
//! time text (spacing around AM/PM, dashes, and commas). Times are never
//! validated: unparseable ranges come back cleaned, not rejected. Input
//! with no recognizable weekday yields the `Unstructured` sentinel and
//! callers fall back to a fixed default schedule.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// One `"<Day>: <hours>"` segment; segments are separated loosely by `|`.
    static ref DAY_SEGMENT: Regex = Regex::new(
        r"(?i)(Monday|Tuesday|Wednesday|Thursday|Friday|Saturday|Sunday)\s*:\s*([^|]+)"
    )
    .expect("day segment pattern");

    static ref TIME_TOKEN: Regex =
        Regex::new(r"(?i)(\d{1,2}):(\d{2})\s*(AM|PM)").expect("time token pattern");

    static ref DASH: Regex = Regex::new(r"\s*-\s*").expect("dash pattern");

    static ref COMMA: Regex = Regex::new(r"\s*,\s*").expect("comma pattern");

    static ref WHITESPACE: Regex = Regex::new(r"\s+").expect("whitespace pattern");
}

/// Day names recognized in working-hours text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl FromStr for Weekday {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "monday" => Ok(Weekday::Monday),
            "tuesday" => Ok(Weekday::Tuesday),
            "wednesday" => Ok(Weekday::Wednesday),
            "thursday" => Ok(Weekday::Thursday),
            "friday" => Ok(Weekday::Friday),
            "saturday" => Ok(Weekday::Saturday),
            "sunday" => Ok(Weekday::Sunday),
            _ => Err(format!("Unknown weekday: {}", s)),
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        };
        write!(f, "{}", name)
    }
}

/// Cleaned hours for one weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DayHours {
    pub weekday: Weekday,
    pub hours: String,
}

/// Parse result: structured entries in input order, or the sentinel for
/// text no weekday pattern matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeeklySchedule {
    Structured(Vec<DayHours>),
    Unstructured,
}

impl WeeklySchedule {
    pub fn is_unstructured(&self) -> bool {
        matches!(self, WeeklySchedule::Unstructured)
    }
}

/// Extracts per-weekday hours from free text.
pub fn parse_working_hours(text: &str) -> WeeklySchedule {
    let entries: Vec<DayHours> = DAY_SEGMENT
        .captures_iter(text)
        .filter_map(|caps| {
            let weekday = Weekday::from_str(&caps[1]).ok()?;
            Some(DayHours {
                weekday,
                hours: format_time_range(caps[2].trim()),
            })
        })
        .collect();

    if entries.is_empty() {
        WeeklySchedule::Unstructured
    } else {
        WeeklySchedule::Structured(entries)
    }
}

/// Cosmetic cleanup of a time-range string.
///
/// Normalizes whitespace, `H:MM AM/PM` spacing, and the spacing around
/// dashes and commas. Does not check that the result is a real or
/// ordered clock range.
pub fn format_time_range(raw: &str) -> String {
    if raw.is_empty() {
        return "Closed".to_string();
    }

    let text = WHITESPACE.replace_all(raw, " ");
    let text = TIME_TOKEN.replace_all(&text, |caps: &regex::Captures<'_>| {
        format!("{}:{} {}", &caps[1], &caps[2], caps[3].to_uppercase())
    });
    let text = DASH.replace_all(&text, " - ");
    let text = COMMA.replace_all(&text, ", ");
    text.trim().to_string()
}
