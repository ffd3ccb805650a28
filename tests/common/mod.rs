// Shared builders for the integration tests.
#![allow(dead_code)]

use gopro_interval::camera::{CaptureSettings, FrameRate, LensFov, Resolution};
use gopro_interval::recording::RecordingConfiguration;
use gopro_interval::time::{Duration, TimeOfDay};

pub fn settings_4k() -> CaptureSettings {
    CaptureSettings::new(Resolution::R4K, FrameRate::Fps30, LensFov::Wide)
}

pub fn constant(record_seconds: i64, interval_seconds: i64) -> RecordingConfiguration {
    RecordingConfiguration::constant(
        Duration::from_seconds(record_seconds),
        Duration::from_seconds(interval_seconds),
        settings_4k(),
    )
}

pub fn windowed(record_seconds: i64, interval_seconds: i64, start: &str, end: &str) -> RecordingConfiguration {
    RecordingConfiguration::dynamic(
        Duration::from_seconds(record_seconds),
        Duration::from_seconds(interval_seconds),
        settings_4k(),
        start.parse::<TimeOfDay>().unwrap(),
        end.parse::<TimeOfDay>().unwrap(),
    )
}
