#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Empty input. Distinct from a value that is present but malformed.
    #[error("no date/time value")]
    Absent,

    #[error("unrecognised date/time '{0}'")]
    Unparseable(String),

    #[error("unknown time zone '{0}'")]
    UnknownZone(String),

    #[error("'{0}' is not a target zone; expected UTC or TZ")]
    InvalidTarget(String),

    #[error("unknown date format preset '{0}'")]
    UnknownFormat(String),

    #[error("{hour}:{minute:02} is not a valid 12-hour clock time")]
    InvalidTime { hour: u32, minute: u32 },
}

pub type DateResult<T> = Result<T, DateError>;
