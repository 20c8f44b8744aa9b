//! Time Decomposition
//!
//! Splits a millisecond distance into the four display fields.

/// Milliseconds per second
pub const SECOND_MS: i64 = 1000;
/// Milliseconds per minute
pub const MINUTE_MS: i64 = SECOND_MS * 60;
/// Milliseconds per hour
pub const HOUR_MS: i64 = MINUTE_MS * 60;
/// Milliseconds per day
pub const DAY_MS: i64 = HOUR_MS * 24;

/// Countdown display fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeParts {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeParts {
    /// Decompose a non-negative millisecond distance.
    ///
    /// Each field is floored, so a distance under one second reads as
    /// all zeros.
    pub fn from_millis(distance_ms: i64) -> Self {
        Self {
            days: distance_ms / DAY_MS,
            hours: (distance_ms % DAY_MS) / HOUR_MS,
            minutes: (distance_ms % HOUR_MS) / MINUTE_MS,
            seconds: (distance_ms % MINUTE_MS) / SECOND_MS,
        }
    }
}
