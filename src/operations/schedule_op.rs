use crate::camera::bitrate::{estimate_recording_size_mb, format_size};
use crate::config_loader::MasterConfig;
use crate::operations::op_helper;
use crate::recording::{build_day_schedule, DaySegment, DayScheduleSummary, RecordingConfiguration, SegmentKind};
use crate::time::{Duration, TimeFormat};
use anyhow::{Context, Result};
use clap::ArgMatches;
use log::{debug, info};
use std::time::Instant;

fn segment_line(segment: &DaySegment, format: TimeFormat) -> String {
    format!(
        "{}-{}  {:<9}  {}",
        segment.start_time().format(TimeFormat::HhMm),
        segment.end_time().format(TimeFormat::HhMm),
        segment.kind.label(),
        Duration::from_seconds(segment.duration_seconds).format(format)
    )
}

/// One-line description of what a day of this schedule produces.
pub fn summary_line(config: &RecordingConfiguration, summary: &DayScheduleSummary) -> String {
    let recorded = Duration::from_seconds(summary.recording_seconds).format(TimeFormat::HoursMinutesSeconds);
    let mut line = format!(
        "Will output {} recording segments ({}) every 24 hours",
        summary.recording_segments, recorded
    );
    if let Some(size_mb) = estimate_recording_size_mb(
        config.settings.resolution,
        config.settings.framerate,
        summary.recording_seconds,
    ) {
        line.push_str(&format!(" • Approximately {}", format_size(size_mb)));
    }
    line
}

/// Human-readable schedule: one line per segment, per-kind totals, summary.
pub fn render_schedule(config: &RecordingConfiguration, format: TimeFormat) -> Vec<String> {
    let segments = build_day_schedule(config);
    let summary = DayScheduleSummary::from_segments(&segments);

    let mut lines: Vec<String> = segments.iter().map(|s| segment_line(s, format)).collect();
    lines.push(String::new());
    for kind in [SegmentKind::Recording, SegmentKind::Idle, SegmentKind::Asleep] {
        let seconds = summary.seconds_for(kind);
        if seconds == 0 {
            continue;
        }
        lines.push(format!(
            "{:<9}  {:>5.1}%  {}",
            kind.label(),
            summary.percent(kind),
            Duration::from_seconds(seconds).format(format)
        ));
    }
    lines.push(summary_line(config, &summary));
    lines
}

pub fn handle_schedule_cli(master_config: &MasterConfig, args: &ArgMatches) -> Result<()> {
    let op_start_time = Instant::now();
    info!("📅 Building day schedule...");

    let store = op_helper::open_preset_store(master_config);
    let config = op_helper::resolve_configuration(master_config, &store, args)?;

    if args.get_flag("json") {
        let segments = build_day_schedule(&config);
        println!("{}", serde_json::to_string_pretty(&segments).context("Failed to serialize schedule")?);
        info!("✅ Wrote {} segments as JSON in {:?}", segments.len(), op_start_time.elapsed());
        return Ok(());
    }

    let format_spec = args
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or(master_config.app_settings.schedule_time_format.as_str());
    let format = format_spec
        .parse::<TimeFormat>()
        .with_context(|| format!("Invalid --format '{}'", format_spec))?;
    debug!("  Rendering durations as '{}'", format);

    let lines = render_schedule(&config, format);
    for line in &lines {
        println!("{}", line);
    }
    info!("✅ Schedule rendered in {:?}", op_start_time.elapsed());
    Ok(())
}
