use std::fmt::Formatter;

use chrono::{Local, NaiveDateTime};

pub const RUN_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The local wall-clock time a run started at. Taken once and shared by every row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunTimestamp(NaiveDateTime);

impl RunTimestamp {
    pub fn now() -> Self {
        RunTimestamp(Local::now().naive_local())
    }
}

impl From<NaiveDateTime> for RunTimestamp {
    fn from(value: NaiveDateTime) -> Self {
        RunTimestamp(value)
    }
}

impl std::fmt::Display for RunTimestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(RUN_TIMESTAMP_FORMAT))
    }
}
