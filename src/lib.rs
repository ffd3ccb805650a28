//! Interval-recording commands and day schedules for action cameras that
//! read instructions from QR codes.

pub mod app_config;
pub mod camera;
pub mod cli;
pub mod common;
pub mod config_loader;
pub mod errors;
pub mod operations;
pub mod presets;
pub mod recording;
pub mod time;
