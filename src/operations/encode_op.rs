use crate::config_loader::MasterConfig;
use crate::operations::op_helper;
use crate::recording::{encode_command_with, EncodeOptions};
use anyhow::{bail, Result};
use clap::ArgMatches;
use log::{debug, info};
use std::time::Instant;

pub fn encode_options(master_config: &MasterConfig, args: &ArgMatches) -> Result<EncodeOptions> {
    let app = &master_config.app_settings;
    let start_delay_seconds = args
        .get_one::<u32>("delay")
        .copied()
        .unwrap_or(app.startup_delay_seconds);
    if start_delay_seconds > app.max_startup_delay_seconds {
        bail!(
            "❌ Startup delay {}s exceeds the configured maximum of {}s.",
            start_delay_seconds,
            app.max_startup_delay_seconds
        );
    }
    Ok(EncodeOptions {
        start_delay_seconds,
        window_shutdown: app.window_shutdown || args.get_flag("window-shutdown"),
    })
}

pub fn handle_encode_cli(master_config: &MasterConfig, args: &ArgMatches) -> Result<()> {
    let op_start_time = Instant::now();
    info!("🧾 Encoding camera command...");

    let store = op_helper::open_preset_store(master_config);
    let config = op_helper::resolve_configuration(master_config, &store, args)?;
    let options = encode_options(master_config, args)?;
    debug!("  Encode options: {:?}", options);

    let command = encode_command_with(&config, &options);
    println!("{}", command);

    info!("✅ Encoded {} byte command in {:?}", command.len(), op_start_time.elapsed());
    Ok(())
}
