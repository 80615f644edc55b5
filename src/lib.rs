//! TAI64 labels.
//!
//! A [`Tai64`] is an instant on the TAI scale, in whole seconds, encoded as
//! the 64-bit TAI64 label: `2^62` is 1970-01-01 00:00:00 TAI and every second
//! of atomic time adds one. Labels are exchanged as 8 big-endian bytes or as
//! hexadecimal text.
//!
//! Conversion to and from UNIX time goes through the [`LEAP_SECONDS`] table.
//! Instants after its newest entry assume no further leap seconds were
//! inserted.
//!
//! ```
//! use tai64::Tai64;
//!
//! let t = Tai64::from_unix(1_483_228_800).unwrap(); // 2017-01-01 00:00:00 UTC
//! assert_eq!(t.to_hex_string(), "40000000586846a5");
//! assert_eq!(t.to_unix(), 1_483_228_800);
//! assert!(t.is_after(&Tai64::EPOCH));
//!
//! let bytes = t.to_byte_array();
//! assert_eq!(Tai64::from_byte_array(&bytes), Ok(t));
//! ```

mod epoch;
pub mod error;
mod leap;
mod radix;
#[cfg(feature = "serde")]
mod serialize;
mod source;
mod timestamp;

pub use {
    epoch::{EPOCH_LABEL, LABEL_MAX},
    error::{Tai64Error, Tai64Result},
    leap::{LEAP_SECONDS, LeapSecond, LeapSecondTable, add_leap_seconds, remove_leap_seconds},
    radix::{DEFAULT_RADIX, MAX_RADIX, MIN_RADIX},
    source::{ManualClock, SystemClock, UnixClock},
    timestamp::Tai64,
};
