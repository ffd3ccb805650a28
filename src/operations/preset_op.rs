use crate::config_loader::MasterConfig;
use crate::operations::op_helper;
use crate::presets::defaults::is_builtin_id;
use crate::presets::{PresetRepository, PresetStore, RecordingPreset};
use crate::recording::encode_command;
use anyhow::{anyhow, bail, Context, Result};
use clap::ArgMatches;
use log::{debug, info, warn};
use std::time::Instant;

fn preset_row(preset: &RecordingPreset) -> String {
    let origin = if is_builtin_id(&preset.id) { "built-in" } else { "custom" };
    format!("{:<24} {:<8} {}", preset.id, origin, preset.name)
}

pub fn list_lines<R: PresetRepository>(store: &PresetStore<R>) -> Result<Vec<String>> {
    let presets = store.all().context("Failed to read presets")?;
    Ok(presets.iter().map(preset_row).collect())
}

pub fn show_lines<R: PresetRepository>(store: &PresetStore<R>, key: &str) -> Result<Vec<String>> {
    let preset = store
        .find(key)
        .context("Failed to read presets")?
        .ok_or_else(|| anyhow!("❌ No preset with id or name '{}'", key))?;
    let mut lines = vec![format!("{} ({})", preset.name, preset.id)];
    lines.extend(op_helper::describe_configuration(&preset.configuration));
    lines.push(format!("  Command:  {}", encode_command(&preset.configuration)));
    Ok(lines)
}

pub fn handle_presets_cli(master_config: &MasterConfig, args: &ArgMatches) -> Result<()> {
    let op_start_time = Instant::now();
    let store = op_helper::open_preset_store(master_config);

    match args.subcommand() {
        Some(("list", _)) => {
            info!("📋 Listing presets...");
            for line in list_lines(&store)? {
                println!("{}", line);
            }
        }
        Some(("show", sub_matches)) => {
            let key = sub_matches
                .get_one::<String>("key")
                .ok_or_else(|| anyhow!("Preset id or name is required"))?;
            for line in show_lines(&store, key)? {
                println!("{}", line);
            }
        }
        Some(("save", sub_matches)) => {
            let name = sub_matches
                .get_one::<String>("name")
                .ok_or_else(|| anyhow!("Preset name is required"))?;
            let configuration = op_helper::resolve_configuration(master_config, &store, sub_matches)?;
            if store.find(name).context("Failed to read presets")?.is_some() {
                warn!("⚠️ A preset named '{}' already exists; saving another one.", name);
            }
            let preset = store
                .add(name, configuration)
                .with_context(|| format!("Failed to save preset '{}'", name))?;
            debug!("Preset file now at '{}'", store.repository().path().display());
            println!("{}", preset.id);
        }
        Some(("delete", sub_matches)) => {
            let id = sub_matches
                .get_one::<String>("id")
                .ok_or_else(|| anyhow!("Preset id is required"))?;
            let removed = store
                .delete(id)
                .with_context(|| format!("Failed to delete preset '{}'", id))?;
            println!("Deleted {} ({})", removed.name, removed.id);
        }
        Some((name, _)) => bail!("Unknown presets subcommand '{}'", name),
        None => bail!("A presets subcommand is required"),
    }

    info!("✅ Presets command finished in {:?}", op_start_time.elapsed());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::InMemoryPresetRepository;
    use crate::recording::RecordingConfiguration;

    #[test]
    fn test_list_marks_origin() {
        let store = PresetStore::new(InMemoryPresetRepository::new());
        let saved = store.add("Porch", RecordingConfiguration::default()).unwrap();
        let lines = list_lines(&store).unwrap();
        assert!(lines[0].starts_with("day-only-1"));
        assert!(lines[0].contains("built-in"));
        let last = lines.last().unwrap();
        assert!(last.starts_with(&saved.id));
        assert!(last.contains("custom"));
        assert!(last.ends_with("Porch"));
    }

    #[test]
    fn test_show_includes_command() {
        let store = PresetStore::new(InMemoryPresetRepository::new());
        let lines = show_lines(&store, "testing").unwrap();
        assert!(lines[0].ends_with("(testing)"));
        assert!(lines.last().unwrap().starts_with("  Command:  "));
        assert!(show_lines(&store, "missing").is_err());
    }
}
