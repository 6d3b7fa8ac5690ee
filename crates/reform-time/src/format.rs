//! Output format presets and human-readable date/time text.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{DateError, DateResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum DateFormat {
    /// `2024-03-10 10:30:00`
    #[default]
    Full,
    /// `10:30 AM`. The hour stays on the 24-hour clock: `15:30 PM`.
    #[cfg_attr(feature = "serde", serde(rename = "hours"))]
    HoursOnly,
    /// `2024-03-10T10:30`
    TimeTag,
    /// `2024-03-10T15:30:00Z`, what date fields write back.
    Storage,
    /// `2024-03-10`
    #[cfg_attr(feature = "serde", serde(rename = "date"))]
    DateOnly,
}

impl DateFormat {
    pub const ALL: [DateFormat; 5] = [
        DateFormat::Full,
        DateFormat::HoursOnly,
        DateFormat::TimeTag,
        DateFormat::Storage,
        DateFormat::DateOnly,
    ];

    pub fn pattern(self) -> &'static str {
        match self {
            DateFormat::Full => "%Y-%m-%d %H:%M:%S",
            DateFormat::HoursOnly => "%H:%M %p",
            DateFormat::TimeTag => "%Y-%m-%dT%H:%M",
            DateFormat::Storage => "%Y-%m-%dT%H:%M:%SZ",
            DateFormat::DateOnly => "%Y-%m-%d",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DateFormat::Full => "full",
            DateFormat::HoursOnly => "hours",
            DateFormat::TimeTag => "time-tag",
            DateFormat::Storage => "storage",
            DateFormat::DateOnly => "date",
        }
    }
}

impl FromStr for DateFormat {
    type Err = DateError;

    fn from_str(s: &str) -> DateResult<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        DateFormat::ALL
            .into_iter()
            .find(|f| f.name() == wanted)
            .ok_or_else(|| DateError::UnknownFormat(s.to_string()))
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `June 1st, 2024`
pub fn long_date(date: NaiveDate) -> String {
    let day = date.day();
    format!("{} {day}{}, {}", date.format("%B"), ordinal_suffix(day), date.year())
}

/// `2:45 PM`
pub fn short_time(time: NaiveTime) -> String {
    let (is_pm, hour) = time.hour12();
    let period = if is_pm { "PM" } else { "AM" };
    format!("{hour}:{:02} {period}", time.minute())
}

fn ordinal_suffix(n: u32) -> &'static str {
    match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}
