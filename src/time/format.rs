use crate::errors::TimeParseError;
use crate::time::{MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND};
use std::fmt;
use std::str::FromStr;

/// Rendering styles shared by `Duration` and `TimeOfDay`.
///
/// The clock styles are zero padded to two digits. `Mm`, `Ss` and the
/// minute/second parts of `MmSs` are cumulative totals, not components.
/// The verbose styles omit zero parts and pluralise unless the count is 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeFormat {
    #[default]
    HhMmSs,
    HhMm,
    MmSs,
    Hh,
    Mm,
    Ss,
    HoursMinutesSeconds,
    HoursMinutes,
    MinutesSeconds,
    Hours,
    Minutes,
    Seconds,
}

impl TimeFormat {
    pub const ALL: [TimeFormat; 12] = [
        TimeFormat::HhMmSs,
        TimeFormat::HhMm,
        TimeFormat::MmSs,
        TimeFormat::Hh,
        TimeFormat::Mm,
        TimeFormat::Ss,
        TimeFormat::HoursMinutesSeconds,
        TimeFormat::HoursMinutes,
        TimeFormat::MinutesSeconds,
        TimeFormat::Hours,
        TimeFormat::Minutes,
        TimeFormat::Seconds,
    ];

    pub fn specifier(self) -> &'static str {
        match self {
            TimeFormat::HhMmSs => "HH:MM:SS",
            TimeFormat::HhMm => "HH:MM",
            TimeFormat::MmSs => "MM:SS",
            TimeFormat::Hh => "HH",
            TimeFormat::Mm => "MM",
            TimeFormat::Ss => "SS",
            TimeFormat::HoursMinutesSeconds => "hh hours mm minutes ss seconds",
            TimeFormat::HoursMinutes => "hh hours mm minutes",
            TimeFormat::MinutesSeconds => "mm minutes ss seconds",
            TimeFormat::Hours => "hh hours",
            TimeFormat::Minutes => "mm minutes",
            TimeFormat::Seconds => "ss seconds",
        }
    }

    pub fn render(self, total_millis: i64) -> String {
        let hours = total_millis.div_euclid(MILLIS_PER_HOUR);
        let minutes = total_millis.rem_euclid(MILLIS_PER_HOUR) / MILLIS_PER_MINUTE;
        let seconds = total_millis.rem_euclid(MILLIS_PER_MINUTE) / MILLIS_PER_SECOND;
        let total_minutes = total_millis.div_euclid(MILLIS_PER_MINUTE);
        let total_seconds = total_millis.div_euclid(MILLIS_PER_SECOND);

        match self {
            TimeFormat::HhMmSs => format!("{:02}:{:02}:{:02}", hours, minutes, seconds),
            TimeFormat::HhMm => format!("{:02}:{:02}", hours, minutes),
            TimeFormat::MmSs => format!("{:02}:{:02}", total_minutes, seconds),
            TimeFormat::Hh => hours.to_string(),
            TimeFormat::Mm => total_minutes.to_string(),
            TimeFormat::Ss => total_seconds.to_string(),
            TimeFormat::HoursMinutesSeconds => {
                join_nonzero(&[(hours, "hour"), (minutes, "minute"), (seconds, "second")], "0 seconds")
            }
            TimeFormat::HoursMinutes => join_nonzero(&[(hours, "hour"), (minutes, "minute")], "0 minutes"),
            TimeFormat::MinutesSeconds => {
                join_nonzero(&[(total_minutes, "minute"), (seconds, "second")], "0 seconds")
            }
            TimeFormat::Hours => join_nonzero(&[(hours, "hour")], "0 hours"),
            TimeFormat::Minutes => join_nonzero(&[(total_minutes, "minute")], "0 minutes"),
            TimeFormat::Seconds => join_nonzero(&[(total_seconds, "second")], "0 seconds"),
        }
    }
}

fn plural(count: i64, unit: &str) -> String {
    format!("{} {}{}", count, unit, if count == 1 { "" } else { "s" })
}

fn join_nonzero(parts: &[(i64, &str)], when_empty: &str) -> String {
    let rendered: Vec<String> = parts
        .iter()
        .filter(|(count, _)| *count > 0)
        .map(|(count, unit)| plural(*count, unit))
        .collect();
    if rendered.is_empty() {
        when_empty.to_string()
    } else {
        rendered.join(" ")
    }
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.specifier())
    }
}

impl FromStr for TimeFormat {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        TimeFormat::ALL
            .iter()
            .copied()
            .find(|format| format.specifier() == wanted)
            .ok_or_else(|| TimeParseError::UnknownFormat(wanted.to_string()))
    }
}
