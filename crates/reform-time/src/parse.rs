//! Lenient date/time parsing.
//!
//! Inputs either carry their own zone (`Z`, `+02:00`) or they don't. Which
//! zone a bare input is read in depends on the conversion direction, so the
//! parser only reports what it saw.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

use crate::{DateError, DateResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParsedDate {
    Zoned(DateTime<FixedOffset>),
    Naive(NaiveDateTime),
}

const ZONED_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

pub fn parse(input: &str) -> DateResult<ParsedDate> {
    let s = input.trim();
    if s.is_empty() {
        return Err(DateError::Absent);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(ParsedDate::Zoned(dt));
    }
    for fmt in ZONED_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Ok(ParsedDate::Zoned(dt));
        }
    }

    // A trailing `Z` on an otherwise bare timestamp means UTC.
    if let Some(bare) = s.strip_suffix('Z').or_else(|| s.strip_suffix('z')) {
        return parse_naive(bare)
            .map(|naive| ParsedDate::Zoned(naive.and_utc().fixed_offset()))
            .ok_or_else(|| DateError::Unparseable(input.to_string()));
    }

    parse_naive(s)
        .map(ParsedDate::Naive)
        .ok_or_else(|| DateError::Unparseable(input.to_string()))
}

fn parse_naive(s: &str) -> Option<NaiveDateTime> {
    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Parses a calendar date, ignoring any time or zone that follows it.
pub fn parse_calendar_date(input: &str) -> DateResult<NaiveDate> {
    let s = input.trim();
    if s.is_empty() {
        return Err(DateError::Absent);
    }
    let head = s.get(..10).unwrap_or(s);
    NaiveDate::parse_from_str(head, "%Y-%m-%d").map_err(|_| DateError::Unparseable(input.to_string()))
}

impl ParsedDate {
    /// Instant for a zoned input, or `naive` read as UTC.
    pub fn assume_utc(self) -> DateTime<Utc> {
        match self {
            ParsedDate::Zoned(dt) => dt.with_timezone(&Utc),
            ParsedDate::Naive(naive) => naive.and_utc(),
        }
    }

    /// Instant for a zoned input, or `naive` read as wall time at `offset`.
    /// `None` when shifting by the offset leaves chrono's range.
    pub fn assume_offset(self, offset: FixedOffset) -> Option<DateTime<Utc>> {
        match self {
            ParsedDate::Zoned(dt) => Some(dt.with_timezone(&Utc)),
            ParsedDate::Naive(naive) => naive.checked_sub_offset(offset).map(|n| n.and_utc()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_zoned_inputs() {
        let want = utc(2024, 3, 10, 15, 30, 0);
        for input in [
            "2024-03-10T15:30:00Z",
            "2024-03-10T15:30:00.000Z",
            "2024-03-10T10:30:00-05:00",
            "2024-03-10 15:30:00+00:00",
            "2024-03-10T15:30Z",
        ] {
            let parsed = parse(input).unwrap_or_else(|e| panic!("{input}: {e}"));
            assert!(matches!(parsed, ParsedDate::Zoned(_)), "{input}");
            assert_eq!(parsed.assume_utc(), want, "{input}");
        }
    }

    #[test]
    fn test_naive_inputs() {
        for (input, want) in [
            ("2024-03-10 10:30:00", utc(2024, 3, 10, 10, 30, 0)),
            ("2024-03-10T10:30", utc(2024, 3, 10, 10, 30, 0)),
            ("2024-03-10T10:30:15.250", utc(2024, 3, 10, 10, 30, 15) + chrono::Duration::milliseconds(250)),
            ("  2024-03-10  ", utc(2024, 3, 10, 0, 0, 0)),
        ] {
            let parsed = parse(input).unwrap_or_else(|e| panic!("{input}: {e}"));
            assert!(matches!(parsed, ParsedDate::Naive(_)), "{input}");
            assert_eq!(parsed.assume_utc(), want, "{input}");
        }
    }

    #[test]
    fn test_bare_input_at_offset() {
        let minus_five = FixedOffset::west_opt(5 * 3600).unwrap();
        let parsed = parse("2024-03-10 10:30:00").unwrap();
        assert_eq!(parsed.assume_offset(minus_five), Some(utc(2024, 3, 10, 15, 30, 0)));
    }

    #[test]
    fn test_offset_past_the_last_representable_day() {
        let parsed = parse("+262142-12-31 23:00:00").unwrap();
        let minus_five = FixedOffset::west_opt(5 * 3600).unwrap();
        assert_eq!(parsed.assume_offset(minus_five), None);
    }

    #[test]
    fn test_rejects() {
        assert_eq!(parse(""), Err(DateError::Absent));
        assert_eq!(parse("   "), Err(DateError::Absent));
        assert_eq!(
            parse("not-a-date"),
            Err(DateError::Unparseable("not-a-date".into()))
        );
        assert_eq!(
            parse("2024-13-01"),
            Err(DateError::Unparseable("2024-13-01".into()))
        );
        assert!(matches!(parse("garbageZ"), Err(DateError::Unparseable(_))));
    }

    #[test]
    fn test_calendar_date() {
        assert_eq!(
            parse_calendar_date("2024-06-01T23:00:00Z"),
            Ok(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
        );
        assert_eq!(parse_calendar_date(""), Err(DateError::Absent));
        assert!(parse_calendar_date("06/01/2024").is_err());
    }
}
