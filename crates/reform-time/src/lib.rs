//! Timezone-aware conversion for date fields.
//!
//! Date/time values are stored as UTC strings and shown in the user's zone.
//! [`DateConverter`] translates in both directions ([`TargetZone::Local`] for
//! display, [`TargetZone::Utc`] for write-back) into one of the
//! [`DateFormat`] presets. The local zone is configuration ([`LocalZone`],
//! [`ConverterConfig`]), resolved once when the converter is built.
//!
//! Parsing failures come back as [`DateError`]; [`DateConverter::display`]
//! is the forgiving variant for rendering code.

pub mod clock;
pub mod config;
pub mod converter;
pub mod error;
pub mod format;
pub mod parse;
pub mod zone;

pub use clock::*;
pub use config::*;
pub use converter::*;
pub use error::*;
pub use format::*;
pub use parse::{ParsedDate, parse_calendar_date};
pub use zone::*;
