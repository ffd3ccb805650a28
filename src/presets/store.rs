use crate::common::timestamp_utils;
use crate::errors::AppError;
use crate::presets::defaults::{builtin_presets, is_builtin_id};
use crate::presets::repository::PresetRepository;
use crate::presets::RecordingPreset;
use crate::recording::RecordingConfiguration;
use log::{debug, info};

/// Built-in presets plus the custom ones held by a [`PresetRepository`].
pub struct PresetStore<R: PresetRepository> {
    repository: R,
}

impl<R: PresetRepository> PresetStore<R> {
    pub fn new(repository: R) -> Self {
        PresetStore { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn builtin(&self) -> Vec<RecordingPreset> {
        builtin_presets()
    }

    pub fn custom(&self) -> Result<Vec<RecordingPreset>, AppError> {
        self.repository.load_all()
    }

    pub fn all(&self) -> Result<Vec<RecordingPreset>, AppError> {
        let mut presets = self.builtin();
        presets.extend(self.custom()?);
        Ok(presets)
    }

    /// Looks up by exact id first, then by case-insensitive name.
    pub fn find(&self, id_or_name: &str) -> Result<Option<RecordingPreset>, AppError> {
        let wanted = id_or_name.trim();
        let presets = self.all()?;
        if let Some(found) = presets.iter().find(|p| p.id == wanted) {
            return Ok(Some(found.clone()));
        }
        Ok(presets.into_iter().find(|p| p.name.eq_ignore_ascii_case(wanted)))
    }

    pub fn add(&self, name: &str, configuration: RecordingConfiguration) -> Result<RecordingPreset, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Preset("preset name is required".to_string()));
        }
        configuration.validate()?;

        let mut custom = self.custom()?;
        let mut stamp = timestamp_utils::current_unix_millis();
        let mut id = format!("custom-{}", stamp);
        while is_builtin_id(&id) || custom.iter().any(|p| p.id == id) {
            stamp += 1;
            id = format!("custom-{}", stamp);
        }
        debug!("Assigned id '{}' to new preset '{}'", id, name);

        let preset = RecordingPreset {
            id,
            name: name.to_string(),
            configuration,
        };
        custom.push(preset.clone());
        self.repository.save_all(&custom)?;
        info!("✅ Preset '{}' saved as '{}'", preset.name, preset.id);
        Ok(preset)
    }

    pub fn delete(&self, id: &str) -> Result<RecordingPreset, AppError> {
        if is_builtin_id(id) {
            return Err(AppError::Preset(format!("built-in preset '{}' cannot be deleted", id)));
        }
        let mut custom = self.custom()?;
        let position = custom
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound(format!("custom preset '{}'", id)))?;
        let removed = custom.remove(position);
        self.repository.save_all(&custom)?;
        info!("🗑️ Preset '{}' ({}) deleted", removed.name, removed.id);
        Ok(removed)
    }
}
