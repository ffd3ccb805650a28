use crate::errors::TimeParseError;
use crate::time::parse::{parse_millis_lenient, parse_millis_strict};
use crate::time::{millis_from_components, TimeFormat, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

/// Elapsed time in milliseconds. Unbounded and never wraps; used for record
/// and interval lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Duration {
    millis: i64,
}

impl Duration {
    pub const ZERO: Duration = Duration { millis: 0 };

    pub const fn from_millis(millis: i64) -> Self {
        Duration { millis }
    }

    pub const fn from_seconds(seconds: i64) -> Self {
        Duration::from_components(0, 0, seconds)
    }

    pub const fn from_minutes(minutes: i64) -> Self {
        Duration::from_components(0, minutes, 0)
    }

    pub const fn from_hours(hours: i64) -> Self {
        Duration::from_components(hours, 0, 0)
    }

    pub const fn from_components(hours: i64, minutes: i64, seconds: i64) -> Self {
        Duration {
            millis: millis_from_components(hours, minutes, seconds),
        }
    }

    /// Legacy parser: unreadable components count as zero.
    pub fn parse_lenient(text: &str) -> Self {
        Duration::from_millis(parse_millis_lenient(text))
    }

    pub fn hours(&self) -> i64 {
        self.millis.div_euclid(MILLIS_PER_HOUR)
    }

    pub fn minutes(&self) -> i64 {
        self.millis.rem_euclid(MILLIS_PER_HOUR) / MILLIS_PER_MINUTE
    }

    pub fn seconds(&self) -> i64 {
        self.millis.rem_euclid(MILLIS_PER_MINUTE) / MILLIS_PER_SECOND
    }

    pub fn total_hours(&self) -> i64 {
        self.hours()
    }

    pub fn total_minutes(&self) -> i64 {
        self.millis.div_euclid(MILLIS_PER_MINUTE)
    }

    pub fn total_seconds(&self) -> i64 {
        self.millis.div_euclid(MILLIS_PER_SECOND)
    }

    pub fn total_millis(&self) -> i64 {
        self.millis
    }

    pub fn is_negative(&self) -> bool {
        self.millis < 0
    }

    pub fn format(&self, format: TimeFormat) -> String {
        format.render(self.millis)
    }
}

impl Add for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Duration {
        Duration::from_millis(self.millis.saturating_add(rhs.millis))
    }
}

impl Sub for Duration {
    type Output = Duration;

    fn sub(self, rhs: Duration) -> Duration {
        Duration::from_millis(self.millis.saturating_sub(rhs.millis))
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(TimeFormat::HhMmSs))
    }
}

impl FromStr for Duration {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_millis_strict(s).map(Duration::from_millis)
    }
}

impl Serialize for Duration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.format(TimeFormat::HhMmSs))
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
