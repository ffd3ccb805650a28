use crate::camera::{CaptureSettings, FrameRate, LensFov, Resolution};
use crate::presets::RecordingPreset;
use crate::recording::RecordingConfiguration;
use crate::time::{Duration, TimeOfDay};

fn preset(id: &str, name: &str, configuration: RecordingConfiguration) -> RecordingPreset {
    RecordingPreset {
        id: id.to_string(),
        name: name.to_string(),
        configuration,
    }
}

/// Presets shipped with the tool. They cannot be deleted.
pub fn builtin_presets() -> Vec<RecordingPreset> {
    let settings = CaptureSettings::new(Resolution::R2_7K, FrameRate::Fps30, LensFov::Wide);
    let day_start = TimeOfDay::from_hours(7);
    let day_end = TimeOfDay::from_hours(20);
    let two_minutes = Duration::from_minutes(2);

    vec![
        preset(
            "day-only-1",
            "Record only day 2/60",
            RecordingConfiguration::dynamic(two_minutes, Duration::from_minutes(58), settings, day_start, day_end),
        ),
        preset(
            "day-only-2",
            "Record only day 2/30",
            RecordingConfiguration::dynamic(two_minutes, Duration::from_minutes(28), settings, day_start, day_end),
        ),
        preset(
            "testing",
            "Night and day (for testing)",
            RecordingConfiguration::constant(
                Duration::from_seconds(10),
                Duration::from_components(0, 1, 50),
                settings,
            ),
        ),
        preset(
            "night-and-day-1",
            "Night and day 2/20",
            RecordingConfiguration::constant(two_minutes, Duration::from_minutes(18), settings),
        ),
        preset(
            "night-and-day-2",
            "Night and day 2/30",
            RecordingConfiguration::constant(two_minutes, Duration::from_minutes(28), settings),
        ),
        preset(
            "night-and-day-3",
            "Night and day 2/60",
            RecordingConfiguration::constant(two_minutes, Duration::from_minutes(58), settings),
        ),
    ]
}

pub fn is_builtin_id(id: &str) -> bool {
    builtin_presets().iter().any(|p| p.id == id)
}
