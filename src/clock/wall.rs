use chrono::{NaiveDateTime, TimeDelta};

use crate::foundation::core::Millis;

/// Source of wall-clock time for the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WallClock {
    /// Local system time; page-elapsed time is ignored.
    System,
    /// A fixed anchor that advances with the page's virtual time.
    Fixed(NaiveDateTime),
}

impl WallClock {
    /// Wall-clock instant after `elapsed` virtual time.
    pub fn at(&self, elapsed: Millis) -> NaiveDateTime {
        match self {
            Self::System => chrono::Local::now().naive_local(),
            Self::Fixed(anchor) => {
                let delta = i64::try_from(elapsed.0)
                    .ok()
                    .and_then(TimeDelta::try_milliseconds)
                    .unwrap_or(TimeDelta::MAX);
                anchor.checked_add_signed(delta).unwrap_or(NaiveDateTime::MAX)
            }
        }
    }
}
