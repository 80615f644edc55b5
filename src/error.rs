/// TAI64 error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Tai64Error {
    /// Candidate label falls outside the valid label range.
    #[error("Label out of range: {0} not in [0, {max})", max = crate::epoch::LABEL_MAX)]
    LabelOutOfRange(i128),

    /// Byte representation is not exactly 8 bytes long.
    #[error("Invalid byte length: expected 8, got {0}")]
    InvalidLength(usize),

    /// Text representation contains characters that are not digits of the
    /// radix, or is empty.
    #[error("Malformed label {input:?} for radix {radix}")]
    MalformedLabel { input: String, radix: u32 },

    /// Radix is not in `2..=36`.
    #[error("Unsupported radix: {0}")]
    UnsupportedRadix(u32),

    /// UNIX timestamp cannot be represented as a calendar date-time.
    #[error("UNIX timestamp not representable as a date-time: {0}")]
    DateTimeOutOfRange(i64),
}

impl Tai64Error {
    /// Returns `true` if the error was caused by malformed external input
    /// (wrong length, bad digits, bad radix) rather than by a value outside
    /// of the label range.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidLength(_) | Self::MalformedLabel { .. } | Self::UnsupportedRadix(_)
        )
    }
}

/// TAI64 result type.
pub type Tai64Result<T> = Result<T, Tai64Error>;
