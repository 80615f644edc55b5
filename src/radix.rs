use crate::error::{Tai64Error, Tai64Result};

/// Smallest supported radix.
pub const MIN_RADIX: u32 = 2;

/// Largest supported radix.
pub const MAX_RADIX: u32 = 36;

/// Default radix of the text representation.
pub const DEFAULT_RADIX: u32 = 16;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn check_radix(radix: u32) -> Tai64Result<u32> {
    if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
        return Err(Tai64Error::UnsupportedRadix(radix));
    }
    Ok(radix)
}

/// Parses a candidate label in the given radix.
///
/// Only digits of the radix are accepted; signs, prefixes and whitespace are
/// malformed. Values too large for 128 bits are reported as out of range.
pub(crate) fn parse_label(input: &str, radix: u32) -> Tai64Result<i128> {
    let radix = check_radix(radix)?;
    if input.is_empty() || !input.chars().all(|c| c.is_digit(radix)) {
        return Err(Tai64Error::MalformedLabel {
            input: input.to_owned(),
            radix,
        });
    }
    // Digits only, so overflow is the sole remaining failure.
    i128::from_str_radix(input, radix).map_err(|_| Tai64Error::LabelOutOfRange(i128::MAX))
}

/// Formats a label in the given radix with lowercase digits and no padding.
pub(crate) fn format_label(mut label: u64, radix: u32) -> Tai64Result<String> {
    let radix = check_radix(radix)? as u64;

    // u64::MAX in base 2 needs 64 digits.
    let mut buf = [0u8; 64];
    let mut pos = buf.len();
    loop {
        pos -= 1;
        buf[pos] = DIGITS[(label % radix) as usize];
        label /= radix;
        if label == 0 {
            break;
        }
    }
    Ok(buf[pos..].iter().map(|&b| b as char).collect())
}
