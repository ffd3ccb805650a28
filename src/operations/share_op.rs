use crate::config_loader::MasterConfig;
use crate::operations::op_helper;
use crate::presets::share::{decode_share_token, encode_share_token};
use crate::recording::encode_command;
use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;
use std::time::Instant;

/// Describes the configuration carried by `token`, ending with its command.
pub fn decoded_token_lines(token: &str) -> Result<Vec<String>> {
    let config = decode_share_token(token).context("Failed to decode share token")?;
    let mut lines = op_helper::describe_configuration(&config);
    lines.push(format!("  Command:  {}", encode_command(&config)));
    Ok(lines)
}

pub fn handle_share_cli(master_config: &MasterConfig, args: &ArgMatches) -> Result<()> {
    let op_start_time = Instant::now();

    if let Some(token) = args.get_one::<String>("decode") {
        info!("🔓 Decoding share token...");
        for line in decoded_token_lines(token)? {
            println!("{}", line);
        }
    } else {
        info!("🔗 Creating share token...");
        let store = op_helper::open_preset_store(master_config);
        let config = op_helper::resolve_configuration(master_config, &store, args)?;
        let token = encode_share_token(&config).context("Failed to encode share token")?;
        println!("{}", token);
    }

    info!("✅ Share command finished in {:?}", op_start_time.elapsed());
    Ok(())
}
