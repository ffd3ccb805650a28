use crate::camera::{CaptureSettings, FrameRate, LensFov, Resolution};
use crate::errors::AppError;
use crate::time::{Duration, TimeOfDay};
use serde::{Deserialize, Serialize};

/// Whether the record/pause cycle runs all day or only inside a daily window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RecordingWindow {
    Constant,
    Dynamic {
        #[serde(rename = "startTime")]
        start_time: TimeOfDay,
        #[serde(rename = "endTime")]
        end_time: TimeOfDay,
    },
}

/// Everything needed to build a camera command or a day schedule.
///
/// Serialises flat, e.g.
/// `{"recordDuration":"00:02:00","intervalDuration":"01:00:00","resolution":"r4",
/// "framerate":"p30","lensWidth":"fw","type":"dynamic","startTime":"06:00:00","endTime":"18:00:00"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordingConfiguration {
    pub record_duration: Duration,
    pub interval_duration: Duration,
    #[serde(flatten)]
    pub settings: CaptureSettings,
    #[serde(flatten)]
    pub window: RecordingWindow,
}

impl RecordingConfiguration {
    pub fn constant(record_duration: Duration, interval_duration: Duration, settings: CaptureSettings) -> Self {
        RecordingConfiguration {
            record_duration,
            interval_duration,
            settings,
            window: RecordingWindow::Constant,
        }
    }

    pub fn dynamic(
        record_duration: Duration,
        interval_duration: Duration,
        settings: CaptureSettings,
        start_time: TimeOfDay,
        end_time: TimeOfDay,
    ) -> Self {
        RecordingConfiguration {
            record_duration,
            interval_duration,
            settings,
            window: RecordingWindow::Dynamic { start_time, end_time },
        }
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self.window, RecordingWindow::Dynamic { .. })
    }

    pub fn active_window(&self) -> Option<(TimeOfDay, TimeOfDay)> {
        match self.window {
            RecordingWindow::Constant => None,
            RecordingWindow::Dynamic { start_time, end_time } => Some((start_time, end_time)),
        }
    }

    /// True for a dynamic window whose start equals its end. Such a window
    /// never opens, so the whole day is spent asleep.
    pub fn has_empty_window(&self) -> bool {
        matches!(self.window, RecordingWindow::Dynamic { start_time, end_time } if start_time == end_time)
    }

    /// Rejects negative durations. A record time longer than the interval is
    /// allowed; consumers clamp it to the interval.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.record_duration.is_negative() {
            return Err(AppError::Validation(format!(
                "record duration cannot be negative (got {} ms)",
                self.record_duration.total_millis()
            )));
        }
        if self.interval_duration.is_negative() {
            return Err(AppError::Validation(format!(
                "interval duration cannot be negative (got {} ms)",
                self.interval_duration.total_millis()
            )));
        }
        Ok(())
    }
}

impl Default for RecordingConfiguration {
    fn default() -> Self {
        RecordingConfiguration::dynamic(
            Duration::from_minutes(2),
            Duration::from_hours(1),
            CaptureSettings::new(Resolution::R4K, FrameRate::Fps30, LensFov::Wide),
            TimeOfDay::from_hours(6),
            TimeOfDay::from_hours(18),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dynamic_json_shape() {
        let config = RecordingConfiguration::default();
        let value = serde_json::to_value(config).unwrap();
        assert_eq!(value["type"], "dynamic");
        assert_eq!(value["recordDuration"], "00:02:00");
        assert_eq!(value["intervalDuration"], "01:00:00");
        assert_eq!(value["resolution"], "r4");
        assert_eq!(value["framerate"], "p30");
        assert_eq!(value["lensWidth"], "fw");
        assert_eq!(value["startTime"], "06:00:00");
        assert_eq!(value["endTime"], "18:00:00");
    }

    #[test]
    fn test_constant_json_omits_window() {
        let config = RecordingConfiguration::constant(
            Duration::from_seconds(10),
            Duration::from_components(0, 1, 50),
            CaptureSettings::default(),
        );
        let value = serde_json::to_value(config).unwrap();
        assert_eq!(value["type"], "constant");
        assert!(value.get("startTime").is_none());

        let back: RecordingConfiguration = serde_json::from_value(value).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_reads_legacy_preset_json() {
        let json = r#"{
            "id": "day-only-1",
            "name": "Record only day 2/60",
            "recordDuration": "00:02:00",
            "intervalDuration": "00:58:00",
            "startTime": "07:00:00",
            "endTime": "20:00:00",
            "resolution": "r27",
            "lensWidth": "fw",
            "framerate": "p30",
            "type": "dynamic"
        }"#;
        let config: RecordingConfiguration = serde_json::from_str(json).unwrap();
        assert_eq!(
            config.active_window(),
            Some((TimeOfDay::from_hours(7), TimeOfDay::from_hours(20)))
        );
        assert_eq!(config.settings.resolution, Resolution::R2_7K);
        assert_eq!(config.interval_duration, Duration::from_minutes(58));
    }

    #[test]
    fn test_validate_rejects_negative_durations() {
        let mut config = RecordingConfiguration::default();
        assert!(config.validate().is_ok());
        config.record_duration = Duration::from_seconds(-1);
        assert!(matches!(config.validate(), Err(AppError::Validation(_))));
        config.record_duration = Duration::from_hours(5);
        assert!(config.validate().is_ok());
        config.interval_duration = Duration::from_seconds(-30);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_window_detection() {
        let noon = TimeOfDay::from_hours(12);
        let config = RecordingConfiguration::dynamic(
            Duration::from_minutes(1),
            Duration::from_minutes(10),
            CaptureSettings::default(),
            noon,
            noon,
        );
        assert!(config.has_empty_window());
        assert!(!RecordingConfiguration::default().has_empty_window());
    }
}
