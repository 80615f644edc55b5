use {chrono::Utc, parking_lot::RwLock};

/// Provides the current time in whole seconds since the Unix epoch.
pub trait UnixClock {
    /// Returns the current UNIX timestamp in seconds.
    fn unix_seconds(&self) -> i64;
}

/// Implementation of the `UnixClock` trait using the system clock (UTC).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl UnixClock for SystemClock {
    fn unix_seconds(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// Implementation of the `UnixClock` trait using a manually set time.
///
/// Useful for testing purposes.
#[derive(Debug, Default)]
pub struct ManualClock {
    /// The current UNIX timestamp in seconds.
    seconds: RwLock<i64>,
}

impl UnixClock for ManualClock {
    fn unix_seconds(&self) -> i64 {
        let r = self.seconds.read();
        *r
    }
}

impl ManualClock {
    /// Creates a new `ManualClock` set to the specified UNIX timestamp.
    pub fn new(seconds: i64) -> Self {
        Self {
            seconds: RwLock::new(seconds),
        }
    }

    /// Sets the current UNIX timestamp.
    pub fn set_unix_seconds(&self, seconds: i64) {
        let mut w = self.seconds.write();
        *w = seconds;
    }

    /// Moves the clock forward (or backward, for negative values).
    pub fn advance(&self, seconds: i64) {
        let mut w = self.seconds.write();
        *w = w.saturating_add(seconds);
    }
}
