use anyhow::{bail, Result};
use gopro_interval::common::logging_setup;
use gopro_interval::config_loader::{self, DEFAULT_CONFIG_PATH};
use gopro_interval::{cli, operations};
use log::{debug, error, info};
use std::time::Instant;

fn main() -> Result<()> {
    let main_start_time = Instant::now();
    let matches = cli::build_cli().get_matches();

    // An explicit --config must exist; the default path may be absent.
    let explicit_config = matches.get_one::<String>("config").map(|s| s.as_str());
    let config_path = explicit_config.unwrap_or(DEFAULT_CONFIG_PATH);

    let config_load_start_time = Instant::now();
    let loaded = match explicit_config {
        Some(path) => config_loader::load_config(path),
        None => config_loader::load_config_or_default(DEFAULT_CONFIG_PATH),
    };
    let master_config = match loaded {
        Ok(cfg) => {
            logging_setup::initialize_logging(Some(&cfg), &matches);
            debug!("Configuration ready from '{}' in {:?}", config_path, config_load_start_time.elapsed());
            cfg
        }
        Err(e) => {
            logging_setup::initialize_logging(None, &matches);
            error!("❌ Failed to load master configuration from '{}': {:#}. Exiting.", config_path, e);
            return Err(e.context(format!("Failed to load master configuration from '{}'", config_path)));
        }
    };

    if let Some((operation_name, sub_matches)) = matches.subcommand() {
        debug!("🎬 Dispatching to subcommand: {}", operation_name);
        let op_start_time = Instant::now();

        let op_result: Result<()> = match operation_name {
            "encode" => operations::encode_op::handle_encode_cli(&master_config, sub_matches),
            "schedule" => operations::schedule_op::handle_schedule_cli(&master_config, sub_matches),
            "presets" => operations::preset_op::handle_presets_cli(&master_config, sub_matches),
            "support" => operations::support_op::handle_support_cli(&master_config, sub_matches),
            "clock-sync" => operations::clock_sync_op::handle_clock_sync_cli(),
            "share" => operations::share_op::handle_share_cli(&master_config, sub_matches),
            _ => bail!("Subcommand '{}' not implemented.", operation_name),
        };

        if let Err(e) = op_result {
            error!("❌ Operation '{}' failed after {:?}: {:#}", operation_name, op_start_time.elapsed(), e);
            return Err(e);
        }
        debug!("✅ Operation '{}' completed in {:?}.", operation_name, op_start_time.elapsed());
    }

    info!("🏁 Finished in {:?}.", main_start_time.elapsed());
    Ok(())
}
