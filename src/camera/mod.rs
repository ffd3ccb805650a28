pub mod bitrate;
pub mod models;
pub mod settings;

pub use models::{supported_cameras, CameraModel};
pub use settings::{CaptureSettings, FrameRate, LensFov, Resolution};
