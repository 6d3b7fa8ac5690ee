//! Converter configuration.
//!
//! ```rust
//! use reform_time::{ConverterConfig, DateFormat};
//!
//! let cfg = ConverterConfig::from_lookup(|key| match key {
//!     "REFORM_TZ" => Some("Europe/Berlin".to_string()),
//!     "REFORM_DATE_FORMAT" => Some("time-tag".to_string()),
//!     _ => None,
//! })
//! .unwrap();
//!
//! assert_eq!(cfg.zone.as_deref(), Some("Europe/Berlin"));
//! assert_eq!(cfg.format, DateFormat::TimeTag);
//! ```

use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{DateFormat, DateResult, LocalZone};

pub const ZONE_VAR: &str = "REFORM_TZ";
pub const FALLBACK_ZONE_VAR: &str = "TZ";
pub const FORMAT_VAR: &str = "REFORM_DATE_FORMAT";

#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct ConverterConfig {
    /// IANA name, `UTC` or `±HH:MM`. `None` means UTC.
    pub zone: Option<String>,
    /// Preset used when a caller does not name one.
    pub format: DateFormat,
}

impl ConverterConfig {
    pub fn from_env() -> DateResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DateResult<Self> {
        let zone = lookup(ZONE_VAR)
            .or_else(|| lookup(FALLBACK_ZONE_VAR))
            .filter(|z| !z.trim().is_empty());
        let format = match lookup(FORMAT_VAR) {
            Some(name) => name.parse()?,
            None => DateFormat::default(),
        };
        Ok(Self { zone, format })
    }

    pub fn with_zone(mut self, zone: impl Into<String>) -> Self {
        self.zone = Some(zone.into());
        self
    }

    pub fn with_format(mut self, format: DateFormat) -> Self {
        self.format = format;
        self
    }

    /// Resolves the configured zone to its offset at `at`.
    pub fn resolve_zone(&self, at: DateTime<Utc>) -> DateResult<LocalZone> {
        match &self.zone {
            Some(name) => LocalZone::named(name, at),
            None => {
                log::debug!("no local zone configured; using UTC");
                Ok(LocalZone::utc())
            }
        }
    }
}
