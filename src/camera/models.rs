use crate::camera::settings::{CaptureSettings, FrameRate, LensFov, Resolution};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CameraModel {
    Hero13,
    Hero12,
    Hero11,
    Max11,
    Hero10,
    Hero9,
    Hero8,
    Hero7Black,
    Hero7Silver,
    Max,
}

impl CameraModel {
    pub const ALL: [CameraModel; 10] = [
        CameraModel::Hero13,
        CameraModel::Hero12,
        CameraModel::Hero11,
        CameraModel::Max11,
        CameraModel::Hero10,
        CameraModel::Hero9,
        CameraModel::Hero8,
        CameraModel::Hero7Black,
        CameraModel::Hero7Silver,
        CameraModel::Max,
    ];

    pub fn code(self) -> &'static str {
        match self {
            CameraModel::Hero13 => "H13",
            CameraModel::Hero12 => "H12",
            CameraModel::Hero11 => "H11",
            CameraModel::Max11 => "M11",
            CameraModel::Hero10 => "H10",
            CameraModel::Hero9 => "Bones",
            CameraModel::Hero8 => "H9",
            CameraModel::Hero7Black => "H8",
            CameraModel::Hero7Silver => "H7",
            CameraModel::Max => "MAX",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CameraModel::Hero13 => "HERO13 Black",
            CameraModel::Hero12 => "HERO12 Black",
            CameraModel::Hero11 => "HERO11 Black",
            CameraModel::Max11 => "MAX 11",
            CameraModel::Hero10 => "HERO10 Black",
            CameraModel::Hero9 => "HERO9 Black",
            CameraModel::Hero8 => "HERO8 Black",
            CameraModel::Hero7Black => "HERO7 Black",
            CameraModel::Hero7Silver => "HERO7 Silver",
            CameraModel::Max => "MAX",
        }
    }
}

impl fmt::Display for CameraModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn all_except(excluded: &[CameraModel]) -> Vec<CameraModel> {
    CameraModel::ALL
        .iter()
        .copied()
        .filter(|model| !excluded.contains(model))
        .collect()
}

pub fn models_supporting_resolution(resolution: Resolution) -> Vec<CameraModel> {
    match resolution {
        Resolution::R5_3K => vec![
            CameraModel::Hero10,
            CameraModel::Hero11,
            CameraModel::Hero12,
            CameraModel::Hero13,
        ],
        Resolution::R4K | Resolution::R2_7K | Resolution::R1440P | Resolution::R1080P => CameraModel::ALL.to_vec(),
    }
}

pub fn models_supporting_framerate(framerate: FrameRate) -> Vec<CameraModel> {
    match framerate {
        FrameRate::Fps200 | FrameRate::Fps240 => all_except(&[CameraModel::Hero7Silver, CameraModel::Max]),
        _ => CameraModel::ALL.to_vec(),
    }
}

pub fn models_supporting_lens(lens_fov: LensFov) -> Vec<CameraModel> {
    match lens_fov {
        LensFov::Narrow | LensFov::Medium | LensFov::Wide => CameraModel::ALL.to_vec(),
        LensFov::Linear => all_except(&[CameraModel::Hero7Silver]),
        LensFov::SuperView => all_except(&[CameraModel::Hero7Silver, CameraModel::Max]),
        LensFov::HyperView => vec![CameraModel::Hero11, CameraModel::Hero12, CameraModel::Hero13],
        LensFov::HorizonLinear => vec![
            CameraModel::Hero8,
            CameraModel::Hero10,
            CameraModel::Hero11,
            CameraModel::Hero12,
            CameraModel::Hero13,
        ],
        LensFov::MaxSuperView => Vec::new(),
    }
}

/// Camera models that support all three settings, in catalogue order.
pub fn supported_cameras(settings: &CaptureSettings) -> Vec<CameraModel> {
    let by_resolution = models_supporting_resolution(settings.resolution);
    let by_framerate = models_supporting_framerate(settings.framerate);
    let by_lens = models_supporting_lens(settings.lens_fov);

    CameraModel::ALL
        .iter()
        .copied()
        .filter(|model| by_resolution.contains(model) && by_framerate.contains(model) && by_lens.contains(model))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_settings_supported_everywhere() {
        let settings = CaptureSettings::new(Resolution::R2_7K, FrameRate::Fps30, LensFov::Wide);
        assert_eq!(supported_cameras(&settings), CameraModel::ALL.to_vec());
    }

    #[test]
    fn test_intersection_narrows_models() {
        let settings = CaptureSettings::new(Resolution::R5_3K, FrameRate::Fps240, LensFov::HyperView);
        assert_eq!(
            supported_cameras(&settings),
            vec![CameraModel::Hero13, CameraModel::Hero12, CameraModel::Hero11]
        );
    }

    #[test]
    fn test_max_superview_unsupported() {
        let settings = CaptureSettings::new(Resolution::R4K, FrameRate::Fps30, LensFov::MaxSuperView);
        assert!(supported_cameras(&settings).is_empty());
    }

    #[test]
    fn test_high_framerate_excludes_old_models() {
        let models = models_supporting_framerate(FrameRate::Fps200);
        assert!(!models.contains(&CameraModel::Max));
        assert!(!models.contains(&CameraModel::Hero7Silver));
        assert_eq!(models.len(), CameraModel::ALL.len() - 2);
    }
}
