use crate::camera::{FrameRate, LensFov, Resolution};
use crate::config_loader::MasterConfig;
use crate::presets::{JsonFilePresetRepository, PresetStore};
use crate::recording::{RecordingConfiguration, RecordingWindow};
use crate::time::{Duration, TimeFormat, TimeOfDay};
use anyhow::{anyhow, bail, Context, Result};
use clap::ArgMatches;
use log::{debug, info, warn};
use std::time::Instant;

pub fn open_preset_store(master_config: &MasterConfig) -> PresetStore<JsonFilePresetRepository> {
    debug!("📂 Using preset file '{}'", master_config.app_settings.presets_path);
    PresetStore::new(JsonFilePresetRepository::new(&master_config.app_settings.presets_path))
}

fn parse_duration_arg(value: &str, lenient: bool, arg_name: &str) -> Result<Duration> {
    if lenient {
        return Ok(Duration::parse_lenient(value));
    }
    value
        .parse::<Duration>()
        .with_context(|| format!("Invalid --{} value '{}'", arg_name, value))
}

fn parse_time_arg(value: &str, lenient: bool, arg_name: &str) -> Result<TimeOfDay> {
    if lenient {
        return Ok(TimeOfDay::parse_lenient(value));
    }
    value
        .parse::<TimeOfDay>()
        .with_context(|| format!("Invalid --{} value '{}'", arg_name, value))
}

/// Builds the recording configuration for a subcommand.
///
/// Starts from `--preset` when given, otherwise the `defaults` section of the
/// master config, then applies any explicit overrides. Giving `--start` or
/// `--end` switches to dynamic mode; `--constant` drops the window.
pub fn resolve_configuration<S>(
    master_config: &MasterConfig,
    preset_store: &PresetStore<S>,
    args: &ArgMatches,
) -> Result<RecordingConfiguration>
where
    S: crate::presets::PresetRepository,
{
    let resolve_start_time = Instant::now();
    let lenient = args.get_flag("lenient");

    let mut config = match args.get_one::<String>("preset") {
        Some(key) => {
            let preset = preset_store
                .find(key)
                .context("Failed to read presets")?
                .ok_or_else(|| anyhow!("❌ No preset with id or name '{}'", key))?;
            info!("📋 Using preset '{}' ({})", preset.name, preset.id);
            preset.configuration
        }
        None => {
            debug!("  No preset selected, starting from configured defaults.");
            master_config.defaults
        }
    };

    if let Some(value) = args.get_one::<String>("record") {
        config.record_duration = parse_duration_arg(value, lenient, "record")?;
    }
    if let Some(value) = args.get_one::<String>("interval") {
        config.interval_duration = parse_duration_arg(value, lenient, "interval")?;
    }
    if let Some(value) = args.get_one::<String>("resolution") {
        config.settings.resolution = value.parse::<Resolution>()?;
    }
    if let Some(value) = args.get_one::<String>("framerate") {
        config.settings.framerate = value.parse::<FrameRate>()?;
    }
    if let Some(value) = args.get_one::<String>("lens") {
        config.settings.lens_fov = value.parse::<LensFov>()?;
    }

    let start_arg = args
        .get_one::<String>("start")
        .map(|v| parse_time_arg(v, lenient, "start"))
        .transpose()?;
    let end_arg = args
        .get_one::<String>("end")
        .map(|v| parse_time_arg(v, lenient, "end"))
        .transpose()?;

    if args.get_flag("constant") {
        config.window = RecordingWindow::Constant;
    } else if start_arg.is_some() || end_arg.is_some() {
        config.window = match (config.window, start_arg, end_arg) {
            (_, Some(start_time), Some(end_time)) => RecordingWindow::Dynamic { start_time, end_time },
            (RecordingWindow::Dynamic { end_time, .. }, Some(start_time), None) => {
                RecordingWindow::Dynamic { start_time, end_time }
            }
            (RecordingWindow::Dynamic { start_time, .. }, None, Some(end_time)) => {
                RecordingWindow::Dynamic { start_time, end_time }
            }
            (RecordingWindow::Constant, _, _) => {
                bail!("❌ Both --start and --end are needed to add a window to a constant configuration.")
            }
            (window, None, None) => window,
        };
    }

    config.validate().context("Invalid recording configuration")?;
    if config.has_empty_window() {
        warn!("⚠️ Window start equals window end; the camera will never record.");
    }
    if config.record_duration > config.interval_duration {
        warn!(
            "⚠️ Record duration {} is longer than the interval {}; schedules clamp it to the interval.",
            config.record_duration, config.interval_duration
        );
    }
    debug!("Resolved configuration {:?} in {:?}", config, resolve_start_time.elapsed());
    Ok(config)
}

/// Indented, multi-line description of a configuration for terminal output.
pub fn describe_configuration(config: &RecordingConfiguration) -> Vec<String> {
    let mut lines = vec![
        format!("  Record:   {}", config.record_duration),
        format!("  Interval: {}", config.interval_duration),
        format!("  Camera:   {}", config.settings),
    ];
    match config.active_window() {
        Some((start_time, end_time)) => lines.push(format!(
            "  Window:   {} - {}",
            start_time.format(TimeFormat::HhMm),
            end_time.format(TimeFormat::HhMm)
        )),
        None => lines.push("  Window:   all day".to_string()),
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::build_cli;
    use crate::presets::InMemoryPresetRepository;

    fn sub_matches(args: &[&str]) -> ArgMatches {
        let mut full = vec!["gopro-interval", "encode"];
        full.extend_from_slice(args);
        let matches = build_cli().try_get_matches_from(full).unwrap();
        matches.subcommand_matches("encode").unwrap().clone()
    }

    fn resolve(args: &[&str]) -> Result<RecordingConfiguration> {
        let store = PresetStore::new(InMemoryPresetRepository::new());
        resolve_configuration(&MasterConfig::default(), &store, &sub_matches(args))
    }

    #[test]
    fn test_defaults_when_no_arguments() {
        assert_eq!(resolve(&[]).unwrap(), RecordingConfiguration::default());
    }

    #[test]
    fn test_preset_then_overrides() {
        let config = resolve(&["--preset", "night-and-day-1", "--record", "0:0:45", "--resolution", "4K"]).unwrap();
        assert!(!config.is_dynamic());
        assert_eq!(config.record_duration, Duration::from_seconds(45));
        assert_eq!(config.interval_duration, Duration::from_minutes(18));
        assert_eq!(config.settings.resolution, Resolution::R4K);
    }

    #[test]
    fn test_window_arguments() {
        let config = resolve(&["--start", "20:00", "--end", "6:00"]).unwrap();
        assert_eq!(config.active_window(), Some((TimeOfDay::from_hours(20), TimeOfDay::from_hours(6))));

        // Default configuration is dynamic, so one bound is enough.
        let config = resolve(&["--end", "17:30"]).unwrap();
        assert_eq!(
            config.active_window(),
            Some((TimeOfDay::from_hours(6), TimeOfDay::from_components(17, 30, 0)))
        );

        assert!(!resolve(&["--constant"]).unwrap().is_dynamic());
        assert!(resolve(&["--preset", "testing", "--start", "07:00"]).is_err());
    }

    #[test]
    fn test_strict_and_lenient_time_arguments() {
        assert!(resolve(&["--record", "2m"]).is_err());
        let config = resolve(&["--record", "0:2m", "--lenient"]).unwrap();
        assert_eq!(config.record_duration, Duration::from_minutes(2));
    }

    #[test]
    fn test_unknown_preset_and_setting() {
        assert!(resolve(&["--preset", "does-not-exist"]).is_err());
        assert!(resolve(&["--lens", "fisheye"]).is_err());
        assert!(resolve(&["--interval=-1:00"]).is_err());
    }

    #[test]
    fn test_describe_configuration() {
        let lines = describe_configuration(&RecordingConfiguration::default());
        assert_eq!(lines[0], "  Record:   00:02:00");
        assert_eq!(lines[1], "  Interval: 01:00:00");
        assert_eq!(lines[3], "  Window:   06:00 - 18:00");

        let constant = resolve(&["--constant"]).unwrap();
        assert_eq!(describe_configuration(&constant)[3], "  Window:   all day");
    }
}
