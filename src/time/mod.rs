//! Time value types used by recording configurations.
//!
//! [`Duration`] is elapsed time and never wraps. [`TimeOfDay`] is a position
//! on the 24 hour clock and is always reduced into `[00:00:00, 24:00:00)`.
//! Both store milliseconds and derive every component on demand.

pub mod duration;
pub mod format;
pub mod parse;
pub mod time_of_day;

pub use duration::Duration;
pub use format::TimeFormat;
pub use time_of_day::TimeOfDay;

pub const MILLIS_PER_SECOND: i64 = 1_000;
pub const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
pub const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
pub const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;
pub const SECONDS_PER_DAY: i64 = MILLIS_PER_DAY / MILLIS_PER_SECOND;

pub(crate) const fn millis_from_components(hours: i64, minutes: i64, seconds: i64) -> i64 {
    hours
        .saturating_mul(MILLIS_PER_HOUR)
        .saturating_add(minutes.saturating_mul(MILLIS_PER_MINUTE))
        .saturating_add(seconds.saturating_mul(MILLIS_PER_SECOND))
}
