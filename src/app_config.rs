use crate::recording::DEFAULT_START_DELAY_SECONDS;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ApplicationConfig {
    pub log_level: Option<String>, // Optional so CLI or RUST_LOG can take over
    pub presets_path: String,      // JSON file holding custom presets
    pub startup_delay_seconds: u32,
    pub window_shutdown: bool,        // power down one minute after a dynamic window closes
    pub schedule_time_format: String, // e.g. "hh hours mm minutes ss seconds", "HH:MM:SS"
    pub max_startup_delay_seconds: u32,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        ApplicationConfig {
            log_level: Some("info".to_string()),
            presets_path: "presets/custom-presets.json".to_string(),
            startup_delay_seconds: DEFAULT_START_DELAY_SECONDS,
            window_shutdown: false,
            schedule_time_format: "hh hours mm minutes ss seconds".to_string(),
            max_startup_delay_seconds: 3600,
        }
    }
}
