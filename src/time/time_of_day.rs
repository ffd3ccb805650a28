use crate::errors::TimeParseError;
use crate::time::parse::{parse_millis_lenient, parse_millis_strict};
use crate::time::{
    millis_from_components, Duration, TimeFormat, MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE,
    MILLIS_PER_SECOND,
};
use chrono::{Local, NaiveTime, Timelike};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

/// A position on the 24 hour clock, in milliseconds since midnight.
///
/// Every constructor and every arithmetic result is reduced modulo one day,
/// so `23:30 + 1:00` is `00:30` and `-00:15` is `23:45`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeOfDay {
    millis: i64,
}

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { millis: 0 };

    pub const fn from_millis(millis: i64) -> Self {
        TimeOfDay {
            millis: millis.rem_euclid(MILLIS_PER_DAY),
        }
    }

    pub const fn from_components(hours: i64, minutes: i64, seconds: i64) -> Self {
        TimeOfDay::from_millis(millis_from_components(hours, minutes, seconds))
    }

    pub const fn from_hours(hours: i64) -> Self {
        TimeOfDay::from_components(hours, 0, 0)
    }

    pub const fn from_minutes(minutes: i64) -> Self {
        TimeOfDay::from_components(0, minutes, 0)
    }

    pub const fn from_seconds(seconds: i64) -> Self {
        TimeOfDay::from_components(0, 0, seconds)
    }

    pub fn from_duration(duration: Duration) -> Self {
        TimeOfDay::from_millis(duration.total_millis())
    }

    pub fn from_naive_time(time: NaiveTime) -> Self {
        // Leap-second nanos (>= 1e9) fold into the next second via the wrap.
        let millis = i64::from(time.num_seconds_from_midnight()) * MILLIS_PER_SECOND
            + i64::from(time.nanosecond() / 1_000_000);
        TimeOfDay::from_millis(millis)
    }

    /// Current local wall-clock time.
    pub fn now() -> Self {
        TimeOfDay::from_naive_time(Local::now().time())
    }

    pub fn parse_lenient(text: &str) -> Self {
        TimeOfDay::from_millis(parse_millis_lenient(text))
    }

    pub fn to_duration(self) -> Duration {
        Duration::from_millis(self.millis)
    }

    pub fn hours(&self) -> i64 {
        self.millis / MILLIS_PER_HOUR
    }

    pub fn minutes(&self) -> i64 {
        (self.millis % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE
    }

    pub fn seconds(&self) -> i64 {
        (self.millis % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND
    }

    pub fn total_hours(&self) -> i64 {
        self.hours()
    }

    pub fn total_minutes(&self) -> i64 {
        self.millis / MILLIS_PER_MINUTE
    }

    pub fn total_seconds(&self) -> i64 {
        self.millis / MILLIS_PER_SECOND
    }

    pub fn total_millis(&self) -> i64 {
        self.millis
    }

    pub fn format(&self, format: TimeFormat) -> String {
        format.render(self.millis)
    }
}

impl Add<Duration> for TimeOfDay {
    type Output = TimeOfDay;

    fn add(self, rhs: Duration) -> TimeOfDay {
        TimeOfDay::from_millis(self.millis + rhs.total_millis().rem_euclid(MILLIS_PER_DAY))
    }
}

impl Sub<Duration> for TimeOfDay {
    type Output = TimeOfDay;

    fn sub(self, rhs: Duration) -> TimeOfDay {
        TimeOfDay::from_millis(self.millis - rhs.total_millis().rem_euclid(MILLIS_PER_DAY))
    }
}

/// Forward distance on the clock from `rhs` to `self`, in `[0, 24h)`.
impl Sub<TimeOfDay> for TimeOfDay {
    type Output = Duration;

    fn sub(self, rhs: TimeOfDay) -> Duration {
        Duration::from_millis((self.millis - rhs.millis).rem_euclid(MILLIS_PER_DAY))
    }
}

impl From<Duration> for TimeOfDay {
    fn from(duration: Duration) -> Self {
        TimeOfDay::from_duration(duration)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(TimeFormat::HhMmSs))
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_millis_strict(s).map(TimeOfDay::from_millis)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.format(TimeFormat::HhMmSs))
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
