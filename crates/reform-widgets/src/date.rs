//! # Date and date-time fields
//!
//! Form state holds the date as a UTC storage string (`2024-06-01T14:45:00Z`).
//! [`FormDate`] shows it in the converter's local zone and writes picks and
//! edits back in storage form.
//!
//! In [`DateMode::Date`] the value is a plain calendar date (`2024-06-01`) and
//! no zone shift applies.
//!
//! Time is edited on a 12-hour [`TimeDraft`]; nothing is written until
//! [`FormDate::apply_time`].

use std::fmt;
use std::rc::Rc;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use reform_core::{FieldBinder, FieldBinding, FormStore, ScalarField};
use reform_time::{
    Clock, DateConverter, DateError, DateFormat, DateResult, TargetZone, long_date,
    parse_calendar_date, short_time,
};

use crate::chrome::FieldChrome;
use crate::variant;
use crate::view::{Control, FieldView, Widget};
use crate::WidgetResult;

pub const DATE_PLACEHOLDER: &str = "Pick a date";
pub const TIME_PLACEHOLDER: &str = "Select time";

const CALENDAR_DATE: &str = "%Y-%m-%d";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DateMode {
    #[default]
    Date,
    DateTime,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Period {
    #[default]
    Am,
    Pm,
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Period::Am => "AM",
            Period::Pm => "PM",
        })
    }
}

/// 12-hour clock → 24-hour. `hour` must be in `1..=12`.
pub fn to_24_hour(hour: u32, period: Period) -> DateResult<u32> {
    if !(1..=12).contains(&hour) {
        return Err(DateError::InvalidTime { hour, minute: 0 });
    }
    Ok(match (hour, period) {
        (12, Period::Am) => 0,
        (12, Period::Pm) => 12,
        (h, Period::Am) => h,
        (h, Period::Pm) => h + 12,
    })
}

pub fn from_24_hour(hour: u32) -> (u32, Period) {
    let period = if hour >= 12 { Period::Pm } else { Period::Am };
    match hour % 12 {
        0 => (12, period),
        h => (h, period),
    }
}

/// The time picker's pending selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeDraft {
    pub hour: u32,
    pub minute: u32,
    pub period: Period,
}

impl Default for TimeDraft {
    fn default() -> Self {
        Self {
            hour: 12,
            minute: 0,
            period: Period::Am,
        }
    }
}

impl TimeDraft {
    pub fn from_time(time: NaiveTime) -> Self {
        let (hour, period) = from_24_hour(time.hour());
        Self {
            hour,
            minute: time.minute(),
            period,
        }
    }

    /// The draft as a wall-clock time with the given seconds.
    pub fn to_time(self, second: u32) -> DateResult<NaiveTime> {
        let invalid = DateError::InvalidTime {
            hour: self.hour,
            minute: self.minute,
        };
        let hour = to_24_hour(self.hour, self.period).map_err(|_| invalid.clone())?;
        NaiveTime::from_hms_opt(hour, self.minute, second).ok_or(invalid)
    }
}

pub fn hour_options() -> Vec<String> {
    (1..=12).map(|h| h.to_string()).collect()
}

pub fn minute_options() -> Vec<String> {
    (0..60).map(|m| format!("{m:02}")).collect()
}

/// Date picker, optionally with a time picker next to it.
#[derive(Clone)]
pub struct FormDate {
    field: ScalarField,
    pub chrome: FieldChrome,
    pub placeholder: String,
    mode: DateMode,
    converter: Rc<DateConverter>,
    clock: Rc<dyn Clock>,
    draft: TimeDraft,
}

impl FormDate {
    pub fn new(field: ScalarField, converter: Rc<DateConverter>, clock: Rc<dyn Clock>) -> Self {
        let mut date = Self {
            field,
            chrome: FieldChrome::default(),
            placeholder: DATE_PLACEHOLDER.to_string(),
            mode: DateMode::default(),
            converter,
            clock,
            draft: TimeDraft::default(),
        };
        date.sync_time_from_value();
        date
    }

    pub fn from_binding(
        binding: &FieldBinding,
        converter: Rc<DateConverter>,
        clock: Rc<dyn Clock>,
    ) -> WidgetResult<Self> {
        Ok(Self::new(variant::scalar(binding)?, converter, clock))
    }

    pub fn for_field<S>(
        binder: &FieldBinder<S>,
        name: &str,
        converter: Rc<DateConverter>,
        clock: Rc<dyn Clock>,
    ) -> WidgetResult<Self>
    where
        S: FormStore + Clone + 'static,
    {
        Self::from_binding(&*variant::lookup(binder, name)?, converter, clock)
    }

    pub fn mode(mut self, mode: DateMode) -> Self {
        self.mode = mode;
        self.sync_time_from_value();
        self
    }

    pub fn chrome(mut self, chrome: FieldChrome) -> Self {
        self.chrome = chrome;
        self
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    pub fn draft(&self) -> TimeDraft {
        self.draft
    }

    /// Resets the time draft to the stored value's local time, or 12:00 AM.
    pub fn sync_time_from_value(&mut self) {
        self.draft = self
            .local_or_log()
            .map(|dt| TimeDraft::from_time(dt.time()))
            .unwrap_or_default();
    }

    fn stored(&self) -> Option<&str> {
        self.field
            .value
            .as_deref()
            .filter(|raw| !raw.trim().is_empty())
    }

    /// The stored value as local wall time. `Ok(None)` when unset.
    pub fn local_value(&self) -> DateResult<Option<NaiveDateTime>> {
        let Some(raw) = self.stored() else {
            return Ok(None);
        };
        Ok(Some(match self.mode {
            DateMode::Date => parse_calendar_date(raw)?.and_time(NaiveTime::default()),
            DateMode::DateTime => self.converter.local_time(raw)?,
        }))
    }

    fn local_or_log(&self) -> Option<NaiveDateTime> {
        match self.local_value() {
            Ok(v) => v,
            Err(e) => {
                log::warn!("date field '{}': {e}", self.field.meta.name);
                None
            }
        }
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.local_or_log().map(|dt| dt.date())
    }

    /// `June 1st, 2024`, or empty when unset or unreadable.
    pub fn display_date(&self) -> String {
        self.selected_date().map(long_date).unwrap_or_default()
    }

    /// `2:45 PM`, or empty when unset or unreadable.
    pub fn display_time(&self) -> String {
        self.local_or_log()
            .map(|dt| short_time(dt.time()))
            .unwrap_or_default()
    }

    fn write_local(&self, wall: NaiveDateTime) -> DateResult<()> {
        let stored = self.converter.storage_string(self.converter.from_local(wall)?);
        log::debug!("date field '{}' ← {stored}", self.field.meta.name);
        self.field.set_text(stored);
        Ok(())
    }

    /// Calendar pick. In date-time mode the current local hour and minute are
    /// kept (seconds drop to zero); an unset field takes them from the clock.
    pub fn select_date(&self, date: NaiveDate) -> WidgetResult<()> {
        match self.mode {
            DateMode::Date => self.field.set_text(date.format(CALENDAR_DATE).to_string()),
            DateMode::DateTime => {
                let time = match self.local_or_log() {
                    Some(dt) => dt.time(),
                    None => self.converter.to_local(self.clock.now())?.time(),
                };
                let time = NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or_default();
                self.write_local(date.and_time(time))?;
            }
        }
        Ok(())
    }

    pub fn set_hour(&mut self, hour: u32) {
        self.draft.hour = hour;
    }

    pub fn set_minute(&mut self, minute: u32) {
        self.draft.minute = minute;
    }

    pub fn set_period(&mut self, period: Period) {
        self.draft.period = period;
    }

    /// Writes the draft time onto the stored local date, keeping its seconds.
    /// Does nothing while the field is unset.
    pub fn apply_time(&self) -> WidgetResult<()> {
        if self.mode == DateMode::Date {
            log::debug!("date field '{}': no time in date mode", self.field.meta.name);
            return Ok(());
        }
        let Some(current) = self.local_value()? else {
            log::debug!("date field '{}': pick a date before a time", self.field.meta.name);
            return Ok(());
        };
        let time = self.draft.to_time(current.second())?;
        self.write_local(current.date().and_time(time))?;
        Ok(())
    }

    /// Free-text edit in local time. A blank edit clears the field; anything
    /// unreadable is rejected without writing.
    pub fn edit(&self, raw_local: &str) -> WidgetResult<()> {
        if raw_local.trim().is_empty() {
            self.field.set_text("");
            return Ok(());
        }
        let stored = match self.mode {
            DateMode::Date => parse_calendar_date(raw_local)?
                .format(CALENDAR_DATE)
                .to_string(),
            DateMode::DateTime => {
                self.converter
                    .convert(raw_local, TargetZone::Utc, DateFormat::Storage)?
            }
        };
        self.field.set_text(stored);
        Ok(())
    }
}

impl Widget for FormDate {
    fn view(&self) -> FieldView {
        let meta = &self.field.meta;
        let date_text = self.display_date();
        let placeholder_shown = date_text.is_empty();
        let time_text = match self.mode {
            DateMode::Date => None,
            DateMode::DateTime => Some(match self.display_time() {
                t if t.is_empty() => TIME_PLACEHOLDER.to_string(),
                t => t,
            }),
        };
        FieldView {
            label: self.chrome.label_view(&meta.id, &meta.name),
            control: Control::DatePicker {
                id: meta.id.clone(),
                date_text: if placeholder_shown {
                    self.placeholder.clone()
                } else {
                    date_text
                },
                placeholder_shown,
                time_text,
            },
            description: self.chrome.description.clone(),
            error: self.chrome.error_line(meta.error.as_deref()),
        }
    }
}
