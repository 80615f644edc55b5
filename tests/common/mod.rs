use chrono::{TimeZone, Utc};

// Pre-calculated Unix timestamp (in s) for 1972-01-01 00:00:00 UTC, the first
// leap-second threshold. Earlier timestamps carry no leap seconds.
#[allow(dead_code)]
pub const FIRST_LEAP: i64 = 63_072_000;

/// Unix timestamp in seconds of the given UTC date and time.
#[allow(dead_code)]
pub fn unix(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> i64 {
    Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
        .unwrap()
        .timestamp()
}
