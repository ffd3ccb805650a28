use crate::camera::settings::{FrameRate, Resolution};

/// Approximate average bitrate in Mbps, `None` where the camera line has no
/// such mode. Rough figures; real output depends on the scene.
pub fn approximate_bitrate_mbps(resolution: Resolution, framerate: FrameRate) -> Option<u32> {
    use FrameRate::*;
    use Resolution::*;

    match (resolution, framerate) {
        (R5_3K, Fps25) => Some(60),
        (R5_3K, Fps30) => Some(80),
        (R5_3K, Fps50) => Some(100),
        (R5_3K, Fps60) => Some(120),
        (R5_3K, Fps100) => Some(150),
        (R5_3K, Fps120) => Some(180),

        (R4K, Fps25) => Some(45),
        (R4K, Fps30) => Some(60),
        (R4K, Fps50) => Some(90),
        (R4K, Fps60) => Some(100),
        (R4K, Fps100) => Some(135),
        (R4K, Fps120) => Some(160),
        (R4K, Fps240) => Some(200),

        (R2_7K, Fps25) => Some(35),
        (R2_7K, Fps30) => Some(45),
        (R2_7K, Fps60) => Some(75),
        (R2_7K, Fps120) => Some(120),

        (R1440P, Fps25) => Some(20),
        (R1440P, Fps30) => Some(25),
        (R1440P, Fps60) => Some(50),
        (R1440P, Fps120) => Some(80),

        (R1080P, Fps25) => Some(15),
        (R1080P, Fps30) => Some(20),
        (R1080P, Fps60) => Some(40),
        (R1080P, Fps120) => Some(60),
        (R1080P, Fps240) => Some(120),

        _ => None,
    }
}

/// Estimated size in megabytes of `seconds` of footage.
pub fn estimate_recording_size_mb(resolution: Resolution, framerate: FrameRate, seconds: i64) -> Option<f64> {
    let bitrate = approximate_bitrate_mbps(resolution, framerate)?;
    Some(f64::from(bitrate) / 8.0 * seconds.max(0) as f64)
}

pub fn format_size(size_mb: f64) -> String {
    if size_mb >= 1024.0 {
        format!("{:.2} GB", size_mb / 1024.0)
    } else {
        format!("{:.1} MB", size_mb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_for_known_mode() {
        // 60 Mbps for 120 s = 900 MB
        let size = estimate_recording_size_mb(Resolution::R4K, FrameRate::Fps30, 120).unwrap();
        assert!((size - 900.0).abs() < f64::EPSILON);
        assert_eq!(format_size(size), "900.0 MB");
    }

    #[test]
    fn test_unsupported_mode_has_no_estimate() {
        assert_eq!(estimate_recording_size_mb(Resolution::R5_3K, FrameRate::Fps240, 60), None);
        assert_eq!(approximate_bitrate_mbps(Resolution::R2_7K, FrameRate::Fps50), None);
    }

    #[test]
    fn test_format_size_switches_to_gigabytes() {
        assert_eq!(format_size(1024.0), "1.00 GB");
        assert_eq!(format_size(2560.0), "2.50 GB");
        assert_eq!(format_size(12.34), "12.3 MB");
    }
}
