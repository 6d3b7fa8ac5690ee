//! # Date conversion
//!
//! Date fields keep a UTC string in form state and show a local one. A
//! [`DateConverter`] moves between the two:
//!
//! ```rust
//! use reform_time::{DateConverter, DateFormat, LocalZone, TargetZone};
//!
//! let conv = DateConverter::new(LocalZone::fixed(-5 * 3600));
//!
//! // storage → display: bare or `Z` inputs are read as UTC
//! let shown = conv.for_date_input("2024-03-10T15:30:00Z", TargetZone::Local).unwrap();
//! assert_eq!(shown, "2024-03-10 10:30:00");
//!
//! // display → storage: bare inputs are read as local wall time
//! let stored = conv.convert(&shown, TargetZone::Utc, DateFormat::Storage).unwrap();
//! assert_eq!(stored, "2024-03-10T15:30:00Z");
//! ```
//!
//! Inputs carrying an explicit offset are honoured in both directions.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};

use crate::parse::parse;
use crate::{Clock, ConverterConfig, DateError, DateFormat, DateResult, LocalZone, TargetZone};

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct DateConverter {
    zone: LocalZone,
    default_format: DateFormat,
}

impl DateConverter {
    pub fn new(zone: LocalZone) -> Self {
        Self {
            zone,
            default_format: DateFormat::default(),
        }
    }

    pub fn utc() -> Self {
        Self::new(LocalZone::utc())
    }

    /// Resolves the configured zone against `clock` once; the resulting offset
    /// is kept for the converter's lifetime.
    pub fn from_config(config: &ConverterConfig, clock: &dyn Clock) -> DateResult<Self> {
        let zone = config.resolve_zone(clock.now())?;
        log::debug!("date converter using {zone}");
        Ok(Self {
            zone,
            default_format: config.format,
        })
    }

    pub fn zone(&self) -> &LocalZone {
        &self.zone
    }

    pub fn offset(&self) -> FixedOffset {
        self.zone.offset()
    }

    pub fn default_format(&self) -> DateFormat {
        self.default_format
    }

    /// The instant `input` denotes, expressed at the target zone's offset.
    ///
    /// Inputs whose local or UTC reading falls outside chrono's range are
    /// `Unparseable`, so the result always has a representable wall time.
    pub fn instant(&self, input: &str, target: TargetZone) -> DateResult<DateTime<FixedOffset>> {
        let parsed = parse(input)?;
        let out_of_range = || DateError::Unparseable(input.to_string());
        match target {
            TargetZone::Local => {
                let at = parsed.assume_utc();
                self.to_local(at).map_err(|_| out_of_range())?;
                Ok(at.with_timezone(&self.offset()))
            }
            TargetZone::Utc => parsed
                .assume_offset(self.offset())
                .map(|at| at.fixed_offset())
                .ok_or_else(out_of_range),
        }
    }

    /// Local wall time of a stored value (bare input read as UTC).
    pub fn local_time(&self, input: &str) -> DateResult<NaiveDateTime> {
        self.to_local(parse(input)?.assume_utc())
            .map_err(|_| DateError::Unparseable(input.to_string()))
    }

    pub fn convert(&self, input: &str, target: TargetZone, format: DateFormat) -> DateResult<String> {
        let at = self.instant(input, target)?;
        Ok(at.format(format.pattern()).to_string())
    }

    /// Converts with the configured default preset.
    pub fn convert_default(&self, input: &str, target: TargetZone) -> DateResult<String> {
        self.convert(input, target, self.default_format)
    }

    /// `None` and empty input are `Ok(None)`; malformed input is still an error.
    pub fn convert_opt(
        &self,
        input: Option<&str>,
        target: TargetZone,
        format: DateFormat,
    ) -> DateResult<Option<String>> {
        match input.map(|s| self.convert(s, target, format)) {
            None | Some(Err(DateError::Absent)) => Ok(None),
            Some(Ok(s)) => Ok(Some(s)),
            Some(Err(e)) => Err(e),
        }
    }

    /// Rendering path: never fails. Malformed input is logged and shown as an
    /// empty string.
    pub fn display(&self, input: Option<&str>, target: TargetZone, format: DateFormat) -> String {
        match self.convert_opt(input, target, format) {
            Ok(out) => out.unwrap_or_default(),
            Err(e) => {
                log::warn!("date display: {e}");
                String::new()
            }
        }
    }

    /// `YYYY-MM-DD HH:mm:ss`
    pub fn for_date_input(&self, input: &str, target: TargetZone) -> DateResult<String> {
        self.convert(input, target, DateFormat::Full)
    }

    /// `HH:mm AM/PM`
    pub fn hours_only(&self, input: &str, target: TargetZone) -> DateResult<String> {
        self.convert(input, target, DateFormat::HoursOnly)
    }

    /// `YYYY-MM-DDTHH:mm`
    pub fn time_tag(&self, input: &str, target: TargetZone) -> DateResult<String> {
        self.convert(input, target, DateFormat::TimeTag)
    }

    pub fn to_local(&self, at: DateTime<Utc>) -> DateResult<NaiveDateTime> {
        at.naive_utc()
            .checked_add_offset(self.offset())
            .ok_or_else(|| DateError::Unparseable(at.to_string()))
    }

    pub fn from_local(&self, wall: NaiveDateTime) -> DateResult<DateTime<Utc>> {
        wall.checked_sub_offset(self.offset())
            .map(|n| n.and_utc())
            .ok_or_else(|| DateError::Unparseable(wall.to_string()))
    }

    pub fn storage_string(&self, at: DateTime<Utc>) -> String {
        at.format(DateFormat::Storage.pattern()).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedClock;
    use chrono::TimeZone;

    fn minus_five() -> DateConverter {
        DateConverter::new(LocalZone::fixed(-5 * 3600))
    }

    #[test]
    fn test_storage_to_display_presets() {
        let conv = minus_five();
        let s = "2024-03-10T15:30:00Z";
        insta::assert_snapshot!(conv.for_date_input(s, TargetZone::Local).unwrap(), @"2024-03-10 10:30:00");
        insta::assert_snapshot!(conv.hours_only(s, TargetZone::Local).unwrap(), @"10:30 AM");
        insta::assert_snapshot!(conv.time_tag(s, TargetZone::Local).unwrap(), @"2024-03-10T10:30");
    }

    #[test]
    fn test_hours_only_keeps_24_hour_clock() {
        let conv = DateConverter::utc();
        assert_eq!(
            conv.hours_only("2024-03-10T15:30:00Z", TargetZone::Local).unwrap(),
            "15:30 PM"
        );
    }

    #[test]
    fn test_round_trip_through_display() {
        let conv = minus_five();
        let original = "2024-03-10T15:30:00Z";
        let shown = conv.for_date_input(original, TargetZone::Local).unwrap();
        let back = conv.convert(&shown, TargetZone::Utc, DateFormat::Storage).unwrap();
        assert_eq!(back, original);

        // minute granularity: the time tag drops seconds only
        let tagged = conv.time_tag("2024-03-10T15:30:42Z", TargetZone::Local).unwrap();
        let back = conv.convert(&tagged, TargetZone::Utc, DateFormat::Storage).unwrap();
        assert_eq!(back, "2024-03-10T15:30:00Z");
    }

    #[test]
    fn test_utc_target_is_reformat_for_zoned_input() {
        let conv = minus_five();
        assert_eq!(
            conv.for_date_input("2024-03-10T15:30:00Z", TargetZone::Utc).unwrap(),
            "2024-03-10 15:30:00"
        );
        assert_eq!(
            conv.for_date_input("2024-03-10T12:30:00+02:00", TargetZone::Utc).unwrap(),
            "2024-03-10 10:30:00"
        );
    }

    #[test]
    fn test_utc_zone_is_identity_for_bare_input() {
        let conv = DateConverter::utc();
        for target in [TargetZone::Utc, TargetZone::Local] {
            assert_eq!(
                conv.for_date_input("2024-03-10 15:30:00", target).unwrap(),
                "2024-03-10 15:30:00"
            );
        }
    }

    #[test]
    fn test_bad_input() {
        let conv = minus_five();
        assert_eq!(
            conv.for_date_input("not-a-date", TargetZone::Local),
            Err(DateError::Unparseable("not-a-date".into()))
        );
        assert_eq!(
            conv.display(Some("not-a-date"), TargetZone::Local, DateFormat::Full),
            ""
        );
    }

    #[test]
    fn test_absent_is_not_an_error() {
        let conv = minus_five();
        assert_eq!(conv.convert_opt(None, TargetZone::Local, DateFormat::Full), Ok(None));
        assert_eq!(conv.convert_opt(Some(""), TargetZone::Local, DateFormat::Full), Ok(None));
        assert_eq!(conv.display(None, TargetZone::Local, DateFormat::Full), "");
        assert_eq!(conv.convert("", TargetZone::Utc, DateFormat::Full), Err(DateError::Absent));
    }

    #[test]
    fn test_from_config_freezes_offset() {
        let january = FixedClock(Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap());
        let config = ConverterConfig::default()
            .with_zone("America/New_York")
            .with_format(DateFormat::TimeTag);
        let conv = DateConverter::from_config(&config, &january).unwrap();

        // a July instant still uses the January offset (-05:00)
        assert_eq!(
            conv.convert_default("2024-07-04T16:00:00Z", TargetZone::Local).unwrap(),
            "2024-07-04T11:00"
        );
    }

    #[test]
    fn test_local_helpers() {
        let conv = minus_five();
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 2, 0, 0).unwrap();
        let wall = conv.to_local(at).unwrap();
        assert_eq!(wall.to_string(), "2024-05-31 21:00:00");
        assert_eq!(conv.from_local(wall), Ok(at));
        assert_eq!(conv.local_time("2024-06-01T02:00:00Z"), Ok(wall));
        assert_eq!(conv.storage_string(at), "2024-06-01T02:00:00Z");
    }

    #[test]
    fn test_out_of_range_is_an_error_not_a_panic() {
        let last_day = "+262142-12-31 23:00:00";

        // bare input read as wall time at -05:00 lands past the last UTC day
        let west = minus_five();
        assert_eq!(
            west.convert(last_day, TargetZone::Utc, DateFormat::Storage),
            Err(DateError::Unparseable(last_day.into()))
        );
        let wall = parse(last_day).map(|p| p.assume_utc().naive_utc()).unwrap();
        assert!(west.from_local(wall).is_err());

        // stored UTC shown at +05:00 lands past the last local day
        let east = DateConverter::new(LocalZone::fixed(5 * 3600));
        let stored = "+262142-12-31T23:00:00Z";
        assert!(east.for_date_input(stored, TargetZone::Local).is_err());
        assert_eq!(east.display(Some(stored), TargetZone::Local, DateFormat::Full), "");
        assert!(east.local_time(stored).is_err());
        assert!(east.to_local(wall.and_utc()).is_err());
    }
}
