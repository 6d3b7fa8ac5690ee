//! Zones: where a conversion goes ([`TargetZone`]) and what "local" means
//! ([`LocalZone`]).

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Offset, Utc};
use chrono_tz::Tz;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{DateError, DateResult};

/// Direction of a conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TargetZone {
    /// Re-express in UTC (storage).
    #[cfg_attr(feature = "serde", serde(rename = "UTC"))]
    Utc,
    /// Re-express in the local zone (display).
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "TZ"))]
    Local,
}

impl FromStr for TargetZone {
    type Err = DateError;

    fn from_str(s: &str) -> DateResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utc" => Ok(TargetZone::Utc),
            "tz" | "local" => Ok(TargetZone::Local),
            _ => Err(DateError::InvalidTarget(s.to_string())),
        }
    }
}

impl fmt::Display for TargetZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TargetZone::Utc => "UTC",
            TargetZone::Local => "TZ",
        })
    }
}

/// The caller's local zone, pinned to one UTC offset.
///
/// Named zones are resolved once, at the instant passed to
/// [`LocalZone::named`]; a converter built from it keeps that offset for its
/// whole life, daylight-saving changes included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalZone {
    name: String,
    offset: FixedOffset,
}

impl LocalZone {
    pub fn utc() -> Self {
        Self {
            name: "UTC".to_string(),
            offset: Utc.fix(),
        }
    }

    /// A zone `seconds` east of UTC. Out-of-range offsets fall back to UTC.
    pub fn fixed(seconds: i32) -> Self {
        match FixedOffset::east_opt(seconds) {
            Some(offset) => Self {
                name: offset.to_string(),
                offset,
            },
            None => {
                log::warn!("offset of {seconds}s is out of range; using UTC");
                Self::utc()
            }
        }
    }

    /// Resolves `"UTC"`, `"±HH:MM"` / `"±HHMM"` or an IANA name such as
    /// `"America/New_York"` to its offset at `at`.
    pub fn named(name: &str, at: DateTime<Utc>) -> DateResult<Self> {
        let trimmed = name.trim();
        if trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("z") {
            return Ok(Self::utc());
        }
        if let Ok(offset) = trimmed.parse::<FixedOffset>() {
            return Ok(Self {
                name: trimmed.to_string(),
                offset,
            });
        }
        let tz: Tz = trimmed
            .parse()
            .map_err(|_| DateError::UnknownZone(trimmed.to_string()))?;
        let offset = at.with_timezone(&tz).offset().fix();
        log::debug!("resolved zone {trimmed} to {offset} at {at}");
        Ok(Self {
            name: trimmed.to_string(),
            offset,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }
}

impl Default for LocalZone {
    fn default() -> Self {
        Self::utc()
    }
}

impl fmt::Display for LocalZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_target_zone_parse() {
        assert_eq!("UTC".parse::<TargetZone>(), Ok(TargetZone::Utc));
        assert_eq!("TZ".parse::<TargetZone>(), Ok(TargetZone::Local));
        assert_eq!("local".parse::<TargetZone>(), Ok(TargetZone::Local));
        assert_eq!(
            "mars".parse::<TargetZone>(),
            Err(DateError::InvalidTarget("mars".into()))
        );
        assert_eq!(TargetZone::Local.to_string(), "TZ");
    }

    #[test]
    fn test_named_zone_freezes_offset_at_instant() {
        let winter = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let summer = Utc.with_ymd_and_hms(2024, 7, 15, 12, 0, 0).unwrap();

        let ny_winter = LocalZone::named("America/New_York", winter).unwrap();
        let ny_summer = LocalZone::named("America/New_York", summer).unwrap();
        assert_eq!(ny_winter.offset().local_minus_utc(), -5 * 3600);
        assert_eq!(ny_summer.offset().local_minus_utc(), -4 * 3600);
        assert_eq!(ny_winter.name(), "America/New_York");
    }

    #[test]
    fn test_fixed_offset_strings() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(
            LocalZone::named("+05:30", now).unwrap().offset().local_minus_utc(),
            5 * 3600 + 30 * 60
        );
        assert_eq!(
            LocalZone::named("-0500", now).unwrap().offset().local_minus_utc(),
            -5 * 3600
        );
        assert_eq!(LocalZone::named("utc", now).unwrap(), LocalZone::utc());
        assert!(LocalZone::named("+5", now).is_err());
        assert_eq!(
            LocalZone::named("Nowhere/City", now),
            Err(DateError::UnknownZone("Nowhere/City".into()))
        );
    }

    #[test]
    fn test_fixed_out_of_range_falls_back() {
        assert_eq!(LocalZone::fixed(100 * 3600), LocalZone::utc());
        assert_eq!(LocalZone::fixed(-5 * 3600).offset().local_minus_utc(), -18000);
    }
}
