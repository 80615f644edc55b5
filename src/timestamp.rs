use {
    crate::{
        epoch::{self, EPOCH_LABEL},
        error::{Tai64Error, Tai64Result},
        leap::{add_leap_seconds, remove_leap_seconds},
        radix::{self, DEFAULT_RADIX},
        source::{SystemClock, UnixClock},
    },
    chrono::{DateTime, Utc},
    std::{cmp::Ordering, ops::Sub, str::FromStr},
};

/// TAI64 label.
///
/// This is a wrapper around the raw 64-bit label of an instant on the TAI
/// scale, counted in whole seconds. The label of 1970-01-01 00:00:00 TAI is
/// 2^62 ([`EPOCH`](Self::EPOCH)).
///
/// Every instance holds a label in `[0, LABEL_MAX)`
/// (see [`LABEL_MAX`](crate::LABEL_MAX)); all constructors validate it and
/// return [`Tai64Error::LabelOutOfRange`] otherwise.
///
/// To create a label, use [`now()`](Self::now()) for the current time,
/// [`from_unix()`](Self::from_unix()) for a UNIX timestamp, or one of the
/// decoding constructors: [`from_byte_array()`](Self::from_byte_array()),
/// [`from_hex_string()`](Self::from_hex_string()) and
/// [`from_string()`](Self::from_string()).
///
/// Conversion between UNIX time and TAI accounts for leap seconds using
/// [`LEAP_SECONDS`](crate::LEAP_SECONDS).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tai64(u64);

impl Tai64 {
    /// 1970-01-01 00:00:00 TAI.
    pub const EPOCH: Tai64 = Tai64(EPOCH_LABEL);

    /// Creates a label for the current system time, truncated to whole
    /// seconds.
    pub fn now() -> Tai64Result<Self> {
        Self::now_from(&SystemClock)
    }

    /// Creates a label for the current time of the given clock.
    pub fn now_from<C: UnixClock>(clock: &C) -> Tai64Result<Self> {
        Self::from_unix(clock.unix_seconds())
    }

    /// Creates a label from a UNIX timestamp in seconds.
    pub fn from_unix(unix_seconds: i64) -> Tai64Result<Self> {
        epoch::label_from_tai_seconds(add_leap_seconds(unix_seconds)).map(Self)
    }

    /// Creates a label from a UTC date-time, truncated to whole seconds.
    pub fn from_datetime(datetime: &DateTime<Utc>) -> Tai64Result<Self> {
        Self::from_unix(datetime.timestamp())
    }

    /// Creates a label from its raw value.
    pub fn from_label(label: u64) -> Tai64Result<Self> {
        epoch::check_label(label as i128).map(Self)
    }

    /// Parses a label written in the given radix (`2..=36`).
    pub fn from_string(s: &str, radix: u32) -> Tai64Result<Self> {
        let label = radix::parse_label(s, radix)?;
        epoch::check_label(label).map(Self)
    }

    /// Parses a hexadecimal label.
    pub fn from_hex_string(s: &str) -> Tai64Result<Self> {
        Self::from_string(s, DEFAULT_RADIX)
    }

    /// Decodes an 8-byte big-endian label.
    ///
    /// The bytes are read as a signed integer, so any input with the top bit
    /// set is negative and out of range.
    pub fn from_bytes(bytes: [u8; 8]) -> Tai64Result<Self> {
        epoch::check_label(i64::from_be_bytes(bytes) as i128).map(Self)
    }

    /// Decodes a big-endian label from a slice, which must be exactly 8 bytes
    /// long.
    pub fn from_byte_array(bytes: &[u8]) -> Tai64Result<Self> {
        let bytes: [u8; 8] = bytes
            .try_into()
            .map_err(|_| Tai64Error::InvalidLength(bytes.len()))?;
        Self::from_bytes(bytes)
    }

    /// Returns the raw label.
    pub fn label(&self) -> u64 {
        self.0
    }

    /// Returns the corresponding UNIX timestamp in seconds.
    pub fn to_unix(&self) -> i64 {
        remove_leap_seconds(epoch::tai_seconds_from_label(self.0))
    }

    /// Returns the corresponding UTC date-time.
    pub fn to_datetime(&self) -> Tai64Result<DateTime<Utc>> {
        let unix_seconds = self.to_unix();
        DateTime::from_timestamp(unix_seconds, 0)
            .ok_or(Tai64Error::DateTimeOutOfRange(unix_seconds))
    }

    /// Returns the label written in the given radix (`2..=36`), lowercase and
    /// without padding.
    pub fn to_string_radix(&self, radix: u32) -> Tai64Result<String> {
        radix::format_label(self.0, radix)
    }

    /// Returns the label as lowercase hexadecimal without padding.
    pub fn to_hex_string(&self) -> String {
        format!("{:x}", self.0)
    }

    /// Returns the 8-byte big-endian encoding of the label.
    pub fn to_byte_array(&self) -> [u8; 8] {
        self.0.to_be_bytes()
    }

    /// Compares two labels.
    ///
    /// `Ordering` converts to the usual `-1`, `0`, `1` with `as i8`.
    pub fn compare_to(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }

    /// Returns `true` if `self` is strictly earlier than `other`.
    pub fn is_before(&self, other: &Self) -> bool {
        self.compare_to(other) == Ordering::Less
    }

    /// Returns `true` if `self` is strictly later than `other`.
    pub fn is_after(&self, other: &Self) -> bool {
        self.compare_to(other) == Ordering::Greater
    }

    /// Returns `true` if both labels denote the same instant.
    pub fn is_equal(&self, other: &Self) -> bool {
        self.compare_to(other) == Ordering::Equal
    }

    /// Returns a label shifted by the given number of TAI seconds.
    pub fn add_seconds(&self, seconds: i64) -> Tai64Result<Self> {
        epoch::check_label(self.0 as i128 + seconds as i128).map(Self)
    }
}

impl std::fmt::Display for Tai64 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:x}", self.0)
    }
}

impl std::fmt::LowerHex for Tai64 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::LowerHex::fmt(&self.0, f)
    }
}

impl FromStr for Tai64 {
    type Err = Tai64Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex_string(s)
    }
}

impl TryFrom<u64> for Tai64 {
    type Error = Tai64Error;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::from_label(value)
    }
}

impl TryFrom<i64> for Tai64 {
    type Error = Tai64Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        epoch::check_label(value as i128).map(Self)
    }
}

impl TryFrom<[u8; 8]> for Tai64 {
    type Error = Tai64Error;

    fn try_from(value: [u8; 8]) -> Result<Self, Self::Error> {
        Self::from_bytes(value)
    }
}

impl TryFrom<&[u8]> for Tai64 {
    type Error = Tai64Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Self::from_byte_array(value)
    }
}

impl TryFrom<DateTime<Utc>> for Tai64 {
    type Error = Tai64Error;

    fn try_from(value: DateTime<Utc>) -> Result<Self, Self::Error> {
        Self::from_datetime(&value)
    }
}

impl From<Tai64> for u64 {
    fn from(value: Tai64) -> Self {
        value.0
    }
}

impl From<Tai64> for [u8; 8] {
    fn from(value: Tai64) -> Self {
        value.to_byte_array()
    }
}

macro_rules! impl_sub {
    ($lhs:ty, $rhs:ty) => {
        impl Sub<$rhs> for $lhs {
            type Output = i64;

            /// Difference in TAI seconds.
            fn sub(self, rhs: $rhs) -> Self::Output {
                // Both labels are below 2^63.
                self.0 as i64 - rhs.0 as i64
            }
        }
    };
}

impl_sub!(Tai64, Tai64);
impl_sub!(&Tai64, &Tai64);
impl_sub!(Tai64, &Tai64);
impl_sub!(&Tai64, Tai64);
