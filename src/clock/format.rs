use chrono::NaiveDateTime;

use crate::foundation::error::{FolioError, FolioResult};

/// `Wed Jan 15 2:30:45 PM`: short weekday, short month, unpadded day,
/// unpadded 12-hour clock with seconds and an AM/PM marker.
pub const TIMESTAMP_FORMAT: &str = "%a %b %-d %-I:%M:%S %p";

/// Render `t` with [`TIMESTAMP_FORMAT`], e.g. `Wed Jan 15 2:30:45 PM`.
pub fn format_timestamp(t: &NaiveDateTime) -> String {
    t.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse an anchor instant given as `YYYY-MM-DDTHH:MM:SS` (or with a space
/// separator).
pub fn parse_instant(s: &str) -> FolioResult<NaiveDateTime> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S"))
        .map_err(|e| FolioError::validation(format!("invalid instant '{s}': {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/clock/format.rs"]
mod tests;
