use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// Serde names are the command codes so stored presets stay compatible with
// the codes embedded in commands. Labels are accepted as aliases.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    #[serde(rename = "r5", alias = "5.3K")]
    R5_3K,
    #[serde(rename = "r4", alias = "4K")]
    R4K,
    #[serde(rename = "r27", alias = "2.7K")]
    R2_7K,
    #[serde(rename = "r1440", alias = "1440p")]
    R1440P,
    #[serde(rename = "r1080", alias = "1080p")]
    R1080P,
}

impl Resolution {
    pub const ALL: [Resolution; 5] = [
        Resolution::R5_3K,
        Resolution::R4K,
        Resolution::R2_7K,
        Resolution::R1440P,
        Resolution::R1080P,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Resolution::R5_3K => "r5",
            Resolution::R4K => "r4",
            Resolution::R2_7K => "r27",
            Resolution::R1440P => "r1440",
            Resolution::R1080P => "r1080",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Resolution::R5_3K => "5.3K",
            Resolution::R4K => "4K",
            Resolution::R2_7K => "2.7K",
            Resolution::R1440P => "1440p",
            Resolution::R1080P => "1080p",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameRate {
    #[serde(rename = "p25", alias = "25")]
    Fps25,
    #[serde(rename = "p30", alias = "30")]
    Fps30,
    #[serde(rename = "p50", alias = "50")]
    Fps50,
    #[serde(rename = "p60", alias = "60")]
    Fps60,
    #[serde(rename = "p100", alias = "100")]
    Fps100,
    #[serde(rename = "p120", alias = "120")]
    Fps120,
    #[serde(rename = "p200", alias = "200")]
    Fps200,
    #[serde(rename = "p240", alias = "240")]
    Fps240,
}

impl FrameRate {
    pub const ALL: [FrameRate; 8] = [
        FrameRate::Fps25,
        FrameRate::Fps30,
        FrameRate::Fps50,
        FrameRate::Fps60,
        FrameRate::Fps100,
        FrameRate::Fps120,
        FrameRate::Fps200,
        FrameRate::Fps240,
    ];

    pub fn code(self) -> &'static str {
        match self {
            FrameRate::Fps25 => "p25",
            FrameRate::Fps30 => "p30",
            FrameRate::Fps50 => "p50",
            FrameRate::Fps60 => "p60",
            FrameRate::Fps100 => "p100",
            FrameRate::Fps120 => "p120",
            FrameRate::Fps200 => "p200",
            FrameRate::Fps240 => "p240",
        }
    }

    pub fn frames_per_second(self) -> u32 {
        match self {
            FrameRate::Fps25 => 25,
            FrameRate::Fps30 => 30,
            FrameRate::Fps50 => 50,
            FrameRate::Fps60 => 60,
            FrameRate::Fps100 => 100,
            FrameRate::Fps120 => 120,
            FrameRate::Fps200 => 200,
            FrameRate::Fps240 => 240,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LensFov {
    #[serde(rename = "fn", alias = "Narrow")]
    Narrow,
    #[serde(rename = "fm", alias = "Medium")]
    Medium,
    #[serde(rename = "fw", alias = "Wide")]
    Wide,
    #[serde(rename = "fl", alias = "Linear")]
    Linear,
    #[serde(rename = "fs", alias = "SuperView")]
    SuperView,
    #[serde(rename = "fv", alias = "HyperView")]
    HyperView,
    #[serde(rename = "fh", alias = "Horizon")]
    HorizonLinear,
    #[serde(rename = "fx", alias = "Max SuperView")]
    MaxSuperView,
}

impl LensFov {
    pub const ALL: [LensFov; 8] = [
        LensFov::Narrow,
        LensFov::Medium,
        LensFov::Wide,
        LensFov::Linear,
        LensFov::SuperView,
        LensFov::HyperView,
        LensFov::HorizonLinear,
        LensFov::MaxSuperView,
    ];

    pub fn code(self) -> &'static str {
        match self {
            LensFov::Narrow => "fn",
            LensFov::Medium => "fm",
            LensFov::Wide => "fw",
            LensFov::Linear => "fl",
            LensFov::SuperView => "fs",
            LensFov::HyperView => "fv",
            LensFov::HorizonLinear => "fh",
            LensFov::MaxSuperView => "fx",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LensFov::Narrow => "Narrow",
            LensFov::Medium => "Medium",
            LensFov::Wide => "Wide",
            LensFov::Linear => "Linear",
            LensFov::SuperView => "SuperView",
            LensFov::HyperView => "HyperView",
            LensFov::HorizonLinear => "Horizon",
            LensFov::MaxSuperView => "Max SuperView",
        }
    }
}

/// The three camera settings that make up the `mV` settings token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaptureSettings {
    pub resolution: Resolution,
    pub framerate: FrameRate,
    #[serde(rename = "lensWidth")]
    pub lens_fov: LensFov,
}

impl CaptureSettings {
    pub fn new(resolution: Resolution, framerate: FrameRate, lens_fov: LensFov) -> Self {
        CaptureSettings {
            resolution,
            framerate,
            lens_fov,
        }
    }
}

impl Default for CaptureSettings {
    fn default() -> Self {
        CaptureSettings::new(Resolution::R4K, FrameRate::Fps30, LensFov::Wide)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} fps", self.frames_per_second())
    }
}

impl fmt::Display for LensFov {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for CaptureSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {} / {}", self.resolution, self.framerate, self.lens_fov)
    }
}

// Accepts the command code or the label, ignoring case and surrounding space.
impl FromStr for Resolution {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Resolution::ALL
            .iter()
            .copied()
            .find(|r| r.code().eq_ignore_ascii_case(wanted) || r.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AppError::UnknownSetting {
                kind: "resolution",
                value: wanted.to_string(),
            })
    }
}

// Also accepts a bare number or a "<n>fps" suffix.
impl FromStr for FrameRate {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        let numeric = wanted.trim_end_matches("fps").trim();
        FrameRate::ALL
            .iter()
            .copied()
            .find(|r| r.code() == wanted || r.frames_per_second().to_string() == numeric)
            .ok_or_else(|| AppError::UnknownSetting {
                kind: "framerate",
                value: s.trim().to_string(),
            })
    }
}

impl FromStr for LensFov {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        LensFov::ALL
            .iter()
            .copied()
            .find(|l| l.code().eq_ignore_ascii_case(wanted) || l.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AppError::UnknownSetting {
                kind: "lens field of view",
                value: wanted.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique() {
        let mut codes: Vec<&str> = Resolution::ALL.iter().map(|r| r.code()).collect();
        codes.extend(FrameRate::ALL.iter().map(|f| f.code()));
        codes.extend(LensFov::ALL.iter().map(|l| l.code()));
        let total = codes.len();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), total);
    }

    #[test]
    fn test_parse_by_code_and_label() {
        assert_eq!("r27".parse::<Resolution>().unwrap(), Resolution::R2_7K);
        assert_eq!("2.7k".parse::<Resolution>().unwrap(), Resolution::R2_7K);
        assert_eq!("60".parse::<FrameRate>().unwrap(), FrameRate::Fps60);
        assert_eq!("240 fps".parse::<FrameRate>().unwrap(), FrameRate::Fps240);
        assert_eq!("P120".parse::<FrameRate>().unwrap(), FrameRate::Fps120);
        assert_eq!("horizon".parse::<LensFov>().unwrap(), LensFov::HorizonLinear);
        assert_eq!("fx".parse::<LensFov>().unwrap(), LensFov::MaxSuperView);
    }

    #[test]
    fn test_parse_unknown_setting() {
        let err = "8K".parse::<Resolution>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown resolution '8K'");
        assert!("24".parse::<FrameRate>().is_err());
        assert!("Fisheye".parse::<LensFov>().is_err());
    }

    #[test]
    fn test_serde_uses_codes() {
        let settings = CaptureSettings::new(Resolution::R1080P, FrameRate::Fps120, LensFov::Linear);
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(json, r#"{"resolution":"r1080","framerate":"p120","lensWidth":"fl"}"#);
        let aliased: CaptureSettings =
            serde_json::from_str(r#"{"resolution":"1080p","framerate":"120","lensWidth":"Linear"}"#).unwrap();
        assert_eq!(aliased, settings);
    }
}
