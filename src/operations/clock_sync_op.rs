use crate::common::timestamp_utils;
use crate::recording::command_encoder::clock_sync_command;
use anyhow::Result;
use log::{debug, info};

pub fn handle_clock_sync_cli() -> Result<()> {
    let now = timestamp_utils::current_local_naive();
    debug!("🕒 Local time is {}", now);
    let command = clock_sync_command(&now);
    println!("{}", command);
    info!("✅ Clock sync command generated for {}", now.format("%Y-%m-%d %H:%M:%S"));
    Ok(())
}
