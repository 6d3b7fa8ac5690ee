use chrono::{DateTime, Utc};
use web_time::{SystemTime, UNIX_EPOCH};

/// Source of "now", injectable so date pickers are testable.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock. Works on wasm through `web-time`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(d) => DateTime::from_timestamp(d.as_secs() as i64, d.subsec_nanos()).unwrap_or_default(),
            Err(e) => {
                log::warn!("system clock is before the unix epoch: {e}");
                DateTime::<Utc>::default()
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
