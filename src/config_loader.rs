use crate::app_config::ApplicationConfig;
use crate::common::logging_setup;
use crate::recording::RecordingConfiguration;
use crate::time::TimeFormat;
use anyhow::{bail, Context, Result};
use log::{debug, info, warn};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Instant;

pub const DEFAULT_CONFIG_PATH: &str = "config/gopro.yaml";

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct MasterConfig {
    #[serde(rename = "application", default)]
    pub app_settings: ApplicationConfig,
    /// Recording configuration used when the CLI is given no preset.
    #[serde(default)]
    pub defaults: RecordingConfiguration,
}

pub fn load_config(path: &str) -> Result<MasterConfig> {
    debug!("📄 Attempting to load config from: {}", path);
    let start_time = Instant::now();

    let config_str = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file '{}'. 📖", path))?;
    debug!("Read config file in {:?}", start_time.elapsed());

    let config = parse_config(&config_str).with_context(|| format!("Invalid configuration in '{}'", path))?;

    info!("✅ Successfully loaded and validated configuration from '{}' in {:?}", path, start_time.elapsed());
    Ok(config)
}

/// Like [`load_config`], but a missing file yields the built-in defaults.
/// A file that exists and fails to parse is still an error.
pub fn load_config_or_default(path: &str) -> Result<MasterConfig> {
    if !Path::new(path).exists() {
        warn!("⚠️ Configuration file '{}' not found, using built-in defaults.", path);
        return Ok(MasterConfig::default());
    }
    load_config(path)
}

pub fn parse_config(config_str: &str) -> Result<MasterConfig> {
    let parse_start_time = Instant::now();
    let config: MasterConfig =
        serde_yaml::from_str(config_str).context("Failed to parse YAML configuration. 💔")?;
    debug!("Parsed YAML in {:?}", parse_start_time.elapsed());

    validate_master_config(&config).context("Master configuration validation failed 👎")?;
    Ok(config)
}

fn validate_master_config(config: &MasterConfig) -> Result<()> {
    debug!("🕵️ Validating master configuration...");
    let validation_start_time = Instant::now();
    let app = &config.app_settings;

    if let Some(level) = &app.log_level {
        if logging_setup::resolve_level_filter(level).is_none() {
            bail!("❌ Unrecognized log_level '{}'.", level);
        }
    }
    if app.presets_path.trim().is_empty() {
        bail!("❌ Application presets_path cannot be empty.");
    }
    let presets_path = Path::new(&app.presets_path);
    if presets_path.is_dir() {
        bail!("❌ presets_path '{}' is a directory, expected a JSON file.", app.presets_path);
    }
    if app.startup_delay_seconds > app.max_startup_delay_seconds {
        bail!(
            "❌ startup_delay_seconds ({}) exceeds max_startup_delay_seconds ({}).",
            app.startup_delay_seconds,
            app.max_startup_delay_seconds
        );
    }
    app.schedule_time_format
        .parse::<TimeFormat>()
        .with_context(|| format!("❌ Invalid schedule_time_format '{}'", app.schedule_time_format))?;

    config
        .defaults
        .validate()
        .context("❌ Invalid recording defaults")?;
    if config.defaults.has_empty_window() {
        warn!("⚠️ Default recording window starts and ends at the same time; the camera will never record.");
    }

    info!("👍 Master configuration validated successfully in {:?}.", validation_start_time.elapsed());
    Ok(())
}
