use crate::common::file_utils;
use crate::errors::AppError;
use crate::presets::RecordingPreset;
use log::{debug, info};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Where custom presets live. Implementations load and save the whole list
/// at once.
pub trait PresetRepository {
    fn load_all(&self) -> Result<Vec<RecordingPreset>, AppError>;
    fn save_all(&self, presets: &[RecordingPreset]) -> Result<(), AppError>;
}

/// Presets stored as a pretty-printed JSON array.
#[derive(Debug, Clone)]
pub struct JsonFilePresetRepository {
    path: PathBuf,
}

impl JsonFilePresetRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFilePresetRepository { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PresetRepository for JsonFilePresetRepository {
    fn load_all(&self) -> Result<Vec<RecordingPreset>, AppError> {
        if !self.path.exists() {
            debug!("📄 Preset file '{}' does not exist yet, no custom presets.", self.path.display());
            return Ok(Vec::new());
        }
        let start_time = Instant::now();
        let contents = fs::read_to_string(&self.path)
            .map_err(|e| AppError::Io(format!("Failed to read preset file '{}': {}", self.path.display(), e)))?;
        let presets: Vec<RecordingPreset> = serde_json::from_str(&contents).map_err(|e| {
            AppError::Serialization(format!("Failed to parse preset file '{}': {}", self.path.display(), e))
        })?;
        debug!(
            "Loaded {} custom preset(s) from '{}' in {:?}",
            presets.len(),
            self.path.display(),
            start_time.elapsed()
        );
        Ok(presets)
    }

    fn save_all(&self, presets: &[RecordingPreset]) -> Result<(), AppError> {
        let start_time = Instant::now();
        file_utils::ensure_parent_directory(&self.path)?;
        let json = serde_json::to_string_pretty(presets)?;
        fs::write(&self.path, json)
            .map_err(|e| AppError::Io(format!("Failed to write preset file '{}': {}", self.path.display(), e)))?;
        info!(
            "💾 Saved {} custom preset(s) to '{}' in {:?}",
            presets.len(),
            self.path.display(),
            start_time.elapsed()
        );
        Ok(())
    }
}

/// Keeps presets in memory only. Useful for tests and dry runs.
#[derive(Debug, Default)]
pub struct InMemoryPresetRepository {
    presets: RefCell<Vec<RecordingPreset>>,
}

impl InMemoryPresetRepository {
    pub fn new() -> Self {
        InMemoryPresetRepository::default()
    }

    pub fn with_presets(presets: Vec<RecordingPreset>) -> Self {
        InMemoryPresetRepository {
            presets: RefCell::new(presets),
        }
    }
}

impl PresetRepository for InMemoryPresetRepository {
    fn load_all(&self) -> Result<Vec<RecordingPreset>, AppError> {
        Ok(self.presets.borrow().clone())
    }

    fn save_all(&self, presets: &[RecordingPreset]) -> Result<(), AppError> {
        *self.presets.borrow_mut() = presets.to_vec();
        Ok(())
    }
}
