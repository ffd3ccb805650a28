//! Camera command formatting
//!
//! Pure functions that turn a [`RecordingConfiguration`] into the plain-text
//! command the camera reads from an optical code. No I/O, just strings.
//!
//! ```text
//! settings_token   = "mV" resolution framerate lens
//! interval_core    = settings_token "!S!" record "E!" delay "N!" pause "RQ"
//! constant_command = interval_core
//! dynamic_command  = ">" start "<" end interval_core "!" start "R"
//! ```
//!
//! Durations are whole seconds with no padding; window times are `HH:MM`.

use crate::camera::CaptureSettings;
use crate::recording::config::{RecordingConfiguration, RecordingWindow};
use crate::time::{Duration, TimeFormat, TimeOfDay};
use chrono::NaiveDateTime;
use std::fmt::Write;

pub const DEFAULT_START_DELAY_SECONDS: u32 = 2;

/// Gap between window close and the explicit power-down step.
pub const WINDOW_SHUTDOWN_BUFFER: Duration = Duration::from_minutes(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Seconds the camera waits after arming before the first clip.
    pub start_delay_seconds: u32,
    /// Adds `~!<end+1min>N` to dynamic commands so the camera powers down
    /// right after the window closes.
    pub window_shutdown: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        EncodeOptions {
            start_delay_seconds: DEFAULT_START_DELAY_SECONDS,
            window_shutdown: false,
        }
    }
}

// Negative durations are outside the grammar; saturate them to zero.
fn whole_seconds(duration: Duration) -> i64 {
    duration.total_seconds().max(0)
}

/// `mV` followed by the resolution, framerate and lens codes.
///
/// # Example
/// ```
/// use gopro_interval::camera::{CaptureSettings, FrameRate, LensFov, Resolution};
/// use gopro_interval::recording::command_encoder::camera_settings_token;
/// let settings = CaptureSettings::new(Resolution::R4K, FrameRate::Fps30, LensFov::Wide);
/// assert_eq!(camera_settings_token(&settings), "mVr4p30fw");
/// ```
pub fn camera_settings_token(settings: &CaptureSettings) -> String {
    format!(
        "mV{}{}{}",
        settings.resolution.code(),
        settings.framerate.code(),
        settings.lens_fov.code()
    )
}

fn interval_core(record: Duration, pause: Duration, settings: &CaptureSettings, delay_seconds: u32) -> String {
    let mut command = camera_settings_token(settings);
    let _ = write!(
        &mut command,
        "!S!{}E!{}N!{}RQ",
        whole_seconds(record),
        delay_seconds,
        whole_seconds(pause)
    );
    command
}

/// Record `record`, wait `pause`, repeat forever.
pub fn encode_constant_interval(
    record: Duration,
    pause: Duration,
    settings: &CaptureSettings,
    delay_seconds: u32,
) -> String {
    interval_core(record, pause, settings, delay_seconds)
}

/// Same cycle as the constant command, bounded to the daily `start`..`end`
/// window and re-armed for `start` on the following day.
pub fn encode_dynamic_interval(
    start: TimeOfDay,
    end: TimeOfDay,
    record: Duration,
    pause: Duration,
    settings: &CaptureSettings,
    options: &EncodeOptions,
) -> String {
    let start_hhmm = start.format(TimeFormat::HhMm);
    let mut command = format!(">{}<{}", start_hhmm, end.format(TimeFormat::HhMm));
    command.push_str(&interval_core(record, pause, settings, options.start_delay_seconds));
    if options.window_shutdown {
        let shutdown_at = end + WINDOW_SHUTDOWN_BUFFER;
        let _ = write!(&mut command, "~!{}N", shutdown_at.format(TimeFormat::HhMm));
    }
    let _ = write!(&mut command, "!{}R", start_hhmm);
    command
}

pub fn encode_command(config: &RecordingConfiguration) -> String {
    encode_command_with(config, &EncodeOptions::default())
}

pub fn encode_command_with(config: &RecordingConfiguration, options: &EncodeOptions) -> String {
    match config.window {
        RecordingWindow::Constant => encode_constant_interval(
            config.record_duration,
            config.interval_duration,
            &config.settings,
            options.start_delay_seconds,
        ),
        RecordingWindow::Dynamic { start_time, end_time } => encode_dynamic_interval(
            start_time,
            end_time,
            config.record_duration,
            config.interval_duration,
            &config.settings,
            options,
        ),
    }
}

/// `oT` + `YYMMDDhhmmss`: sets the camera clock.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use gopro_interval::recording::command_encoder::clock_sync_command;
/// let at = NaiveDate::from_ymd_opt(2025, 9, 6).unwrap().and_hms_opt(7, 5, 9).unwrap();
/// assert_eq!(clock_sync_command(&at), "oT250906070509");
/// ```
pub fn clock_sync_command(timestamp: &NaiveDateTime) -> String {
    timestamp.format("oT%y%m%d%H%M%S").to_string()
}
