pub mod defaults;
pub mod repository;
pub mod share;
pub mod store;

use crate::recording::RecordingConfiguration;
use serde::{Deserialize, Serialize};

pub use repository::{InMemoryPresetRepository, JsonFilePresetRepository, PresetRepository};
pub use store::PresetStore;

/// A named, saved recording configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordingPreset {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub configuration: RecordingConfiguration,
}
