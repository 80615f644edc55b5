use crate::error::{Tai64Error, Tai64Result};

/// Label of 1970-01-01 00:00:00 TAI.
///
/// 2^62, hex `4000000000000000`.
pub const EPOCH_LABEL: u64 = 1 << 62;

/// Exclusive upper bound of valid labels.
///
/// Labels are signed 64-bit values in `[0, i64::MAX)`, so the top bit is
/// always clear and `7fffffffffffffff` itself is rejected.
pub const LABEL_MAX: u64 = i64::MAX as u64;

/// Validates a candidate label.
pub(crate) fn check_label(label: i128) -> Tai64Result<u64> {
    if label < 0 || label >= LABEL_MAX as i128 {
        return Err(Tai64Error::LabelOutOfRange(label));
    }
    Ok(label as u64)
}

/// Returns the label for the given number of TAI seconds since the epoch.
pub(crate) fn label_from_tai_seconds(tai_seconds: i64) -> Tai64Result<u64> {
    check_label(EPOCH_LABEL as i128 + tai_seconds as i128)
}

/// Returns the number of TAI seconds since the epoch for a valid label.
pub(crate) fn tai_seconds_from_label(label: u64) -> i64 {
    // Valid labels are below 2^63 so both operands fit in `i64`.
    label as i64 - EPOCH_LABEL as i64
}
