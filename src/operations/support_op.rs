use crate::camera::{supported_cameras, CaptureSettings};
use crate::config_loader::MasterConfig;
use crate::operations::op_helper;
use anyhow::Result;
use clap::ArgMatches;
use log::{info, warn};
use std::time::Instant;

/// Camera labels able to record with `settings`, newest first.
pub fn support_lines(settings: &CaptureSettings) -> Vec<String> {
    supported_cameras(settings)
        .into_iter()
        .map(|model| model.label().to_string())
        .collect()
}

pub fn handle_support_cli(master_config: &MasterConfig, args: &ArgMatches) -> Result<()> {
    let op_start_time = Instant::now();
    let store = op_helper::open_preset_store(master_config);
    let config = op_helper::resolve_configuration(master_config, &store, args)?;
    info!("🎥 Checking camera support for {}...", config.settings);

    let lines = support_lines(&config.settings);
    if lines.is_empty() {
        warn!("⚠️ No known camera supports {}.", config.settings);
    }
    for line in &lines {
        println!("{}", line);
    }
    info!("✅ {} supported model(s) found in {:?}", lines.len(), op_start_time.elapsed());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{FrameRate, LensFov, Resolution};

    #[test]
    fn test_common_settings_are_widely_supported() {
        let lines = support_lines(&CaptureSettings::new(Resolution::R1080P, FrameRate::Fps30, LensFov::Wide));
        assert!(lines.len() > 5);
        assert_eq!(lines[0], "HERO13 Black");
    }
}
