//! Historical leap-second table.
//!
//! Entries are taken from <https://www.ietf.org/timezones/data/leap-seconds.list>.
//! The list stores NTP timestamps (seconds since 1900-01-01 00:00:00); the
//! UNIX timestamp of NTP timestamp `X` is `X - 2208988800`, where
//! `2208988800 = (70 * 365 + 17) * 86400`.
//!
//! Instants after the newest entry keep its offset. Announced leap seconds
//! are added by prepending a new entry to [`LEAP_SECONDS`].

/// A single leap-second insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LeapSecond {
    /// UNIX timestamp (seconds) from which `offset` applies.
    pub threshold: i64,
    /// Cumulative TAI - UTC difference in seconds.
    pub offset: i64,
}

impl LeapSecond {
    const fn new(threshold: i64, offset: i64) -> Self {
        Self { threshold, offset }
    }
}

/// Cumulative TAI - UTC offsets, newest first.
const ENTRIES: &[LeapSecond] = &[
    LeapSecond::new(1_483_228_800, 37), // 2017-01-01
    LeapSecond::new(1_435_708_800, 36), // 2015-07-01
    LeapSecond::new(1_341_100_800, 35), // 2012-07-01
    LeapSecond::new(1_230_768_000, 34), // 2009-01-01
    LeapSecond::new(1_136_073_600, 33), // 2006-01-01
    LeapSecond::new(915_148_800, 32),   // 1999-01-01
    LeapSecond::new(867_715_200, 31),   // 1997-07-01
    LeapSecond::new(820_454_400, 30),   // 1996-01-01
    LeapSecond::new(773_020_800, 29),   // 1994-07-01
    LeapSecond::new(741_484_800, 28),   // 1993-07-01
    LeapSecond::new(709_948_800, 27),   // 1992-07-01
    LeapSecond::new(662_688_000, 26),   // 1991-01-01
    LeapSecond::new(631_152_000, 25),   // 1990-01-01
    LeapSecond::new(567_993_600, 24),   // 1988-01-01
    LeapSecond::new(489_024_000, 23),   // 1985-07-01
    LeapSecond::new(425_865_600, 22),   // 1983-07-01
    LeapSecond::new(394_329_600, 21),   // 1982-07-01
    LeapSecond::new(362_793_600, 20),   // 1981-07-01
    LeapSecond::new(315_532_800, 19),   // 1980-01-01
    LeapSecond::new(283_996_800, 18),   // 1979-01-01
    LeapSecond::new(252_460_800, 17),   // 1978-01-01
    LeapSecond::new(220_924_800, 16),   // 1977-01-01
    LeapSecond::new(189_302_400, 15),   // 1976-01-01
    LeapSecond::new(157_766_400, 14),   // 1975-01-01
    LeapSecond::new(126_230_400, 13),   // 1974-01-01
    LeapSecond::new(94_694_400, 12),    // 1973-01-01
    LeapSecond::new(78_796_800, 11),    // 1972-07-01
    LeapSecond::new(63_072_000, 10),    // 1972-01-01
];

/// The leap-second table in effect.
pub const LEAP_SECONDS: LeapSecondTable = LeapSecondTable::new(ENTRIES);

/// Table of leap-second insertions, sorted by threshold in descending order.
///
/// Lookups scan the whole table, so every operation is `O(len)`. All
/// operations are total over `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeapSecondTable {
    entries: &'static [LeapSecond],
}

impl LeapSecondTable {
    /// Creates a table over `entries`, which must be sorted by threshold in
    /// descending order with non-decreasing offsets towards the front.
    pub const fn new(entries: &'static [LeapSecond]) -> Self {
        Self { entries }
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &'static [LeapSecond] {
        self.entries
    }

    /// The most recent leap second, if any.
    pub fn latest(&self) -> Option<LeapSecond> {
        self.entries.first().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of leap seconds in effect at the given UNIX timestamp.
    ///
    /// The boundary is inclusive: a timestamp equal to a threshold already
    /// carries that leap second.
    pub fn offset_for_unix(&self, unix_seconds: i64) -> i64 {
        self.entries
            .iter()
            .find(|ls| unix_seconds >= ls.threshold)
            .map_or(0, |ls| ls.offset)
    }

    /// Number of leap seconds contained in the given TAI seconds value.
    pub fn offset_for_tai(&self, tai_seconds: i64) -> i64 {
        // `tai - offset >= threshold`, rearranged so it cannot overflow.
        self.entries
            .iter()
            .find(|ls| tai_seconds >= ls.threshold.saturating_add(ls.offset))
            .map_or(0, |ls| ls.offset)
    }

    /// Adds leap seconds to the given UNIX timestamp.
    ///
    /// The sum saturates at `i64::MAX`, so [`remove_leap_seconds`] inverts
    /// this for every input up to `i64::MAX - offset`.
    ///
    /// [`remove_leap_seconds`]: Self::remove_leap_seconds
    pub fn add_leap_seconds(&self, unix_seconds: i64) -> i64 {
        unix_seconds.saturating_add(self.offset_for_unix(unix_seconds))
    }

    /// Removes leap seconds from a timestamp which includes them, returning
    /// the corresponding UNIX timestamp.
    pub fn remove_leap_seconds(&self, tai_seconds: i64) -> i64 {
        tai_seconds.saturating_sub(self.offset_for_tai(tai_seconds))
    }
}

/// Adds leap seconds to the given UNIX timestamp using [`LEAP_SECONDS`].
///
/// Saturates at `i64::MAX`; see [`LeapSecondTable::add_leap_seconds`].
pub fn add_leap_seconds(unix_seconds: i64) -> i64 {
    LEAP_SECONDS.add_leap_seconds(unix_seconds)
}

/// Removes leap seconds from the given TAI seconds using [`LEAP_SECONDS`].
pub fn remove_leap_seconds(tai_seconds: i64) -> i64 {
    LEAP_SECONDS.remove_leap_seconds(tai_seconds)
}
