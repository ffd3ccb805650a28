use crate::config_loader::MasterConfig;
use env_logger::Builder;
use log::LevelFilter;

pub fn resolve_level_filter(level: &str) -> Option<LevelFilter> {
    match level.trim().to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

pub fn initialize_logging(config: Option<&MasterConfig>, cli_matches: &clap::ArgMatches) {
    let mut builder = Builder::new();

    // Determine log level from CLI, then config, then default
    let log_level_str = if cli_matches.get_flag("debug") {
        "debug".to_string()
    } else {
        config
            .and_then(|c| c.app_settings.log_level.clone())
            .unwrap_or_else(|| "info".to_string())
    };

    let unrecognized = match resolve_level_filter(&log_level_str) {
        Some(filter) => {
            builder.filter_level(filter);
            false
        }
        None => {
            builder.filter_level(LevelFilter::Info);
            true
        }
    };

    // RUST_LOG still wins for module-level overrides.
    builder.parse_default_env();

    builder.try_init().unwrap_or_else(|e| {
        eprintln!("Failed to initialize logger: {}. Logging might not work as expected.", e);
    });
    if unrecognized {
        log::warn!("Unrecognized log level '{}', defaulting to info.", log_level_str);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_names() {
        assert_eq!(resolve_level_filter("DEBUG"), Some(LevelFilter::Debug));
        assert_eq!(resolve_level_filter(" warn "), Some(LevelFilter::Warn));
        assert_eq!(resolve_level_filter("loud"), None);
    }
}
