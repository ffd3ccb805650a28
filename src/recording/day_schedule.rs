use crate::recording::config::{RecordingConfiguration, RecordingWindow};
use crate::time::{TimeOfDay, SECONDS_PER_DAY};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Recording,
    Idle,
    Asleep,
}

impl SegmentKind {
    pub fn label(self) -> &'static str {
        match self {
            SegmentKind::Recording => "Recording",
            SegmentKind::Idle => "Idle",
            SegmentKind::Asleep => "Asleep",
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One labelled stretch of the day, in seconds since midnight.
///
/// `end_second` is exclusive. Only the last segment of a schedule may wrap
/// past midnight, in which case `end_second < start_second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DaySegment {
    pub kind: SegmentKind,
    pub start_second: i64,
    pub end_second: i64,
    pub duration_seconds: i64,
}

impl DaySegment {
    fn new(kind: SegmentKind, start_second: i64, end_second: i64) -> Self {
        DaySegment {
            kind,
            start_second,
            end_second,
            duration_seconds: end_second - start_second,
        }
    }

    pub fn wraps_midnight(&self) -> bool {
        self.end_second < self.start_second
    }

    pub fn start_time(&self) -> TimeOfDay {
        TimeOfDay::from_seconds(self.start_second)
    }

    pub fn end_time(&self) -> TimeOfDay {
        TimeOfDay::from_seconds(self.end_second)
    }
}

/// Sub-intervals of `[0, 86400)` in which recording may happen, sorted by
/// start. A dynamic window that crosses midnight is split in two; one whose
/// start equals its end yields nothing.
pub fn allowed_windows(config: &RecordingConfiguration) -> Vec<(i64, i64)> {
    let mut windows = match config.window {
        RecordingWindow::Constant => vec![(0, SECONDS_PER_DAY)],
        RecordingWindow::Dynamic { start_time, end_time } => {
            let start = start_time.total_seconds();
            let end = end_time.total_seconds();
            if end > start {
                vec![(start, end)]
            } else if end < start {
                vec![(start, SECONDS_PER_DAY), (0, end)]
            } else {
                Vec::new()
            }
        }
    };
    windows.retain(|(start, end)| end > start);
    windows.sort_by_key(|(start, _)| *start);
    windows
}

// Appends, extending the previous segment when it is contiguous and the same kind.
fn push_segment(segments: &mut Vec<DaySegment>, kind: SegmentKind, start: i64, end: i64) {
    if end <= start {
        return;
    }
    if let Some(last) = segments.last_mut() {
        if last.kind == kind && last.end_second == start {
            last.end_second = end;
            last.duration_seconds += end - start;
            return;
        }
    }
    segments.push(DaySegment::new(kind, start, end));
}

/// Partitions one day into Recording, Idle and Asleep segments.
///
/// Each allowed window is tiled from its start with intervals of
/// `interval_duration` (at least one second). A tile records for
/// `record_duration`, clamped to the tile, and idles for the rest. Time
/// outside every window is asleep. The result is sorted, contiguous, sums to
/// 86 400 seconds, and never has two neighbours of the same kind.
pub fn build_day_schedule(config: &RecordingConfiguration) -> Vec<DaySegment> {
    let interval = config.interval_duration.total_seconds().max(1);
    let record = config.record_duration.total_seconds().clamp(0, interval);
    let windows = allowed_windows(config);

    let mut raw: Vec<DaySegment> = Vec::new();
    for &(window_start, window_end) in &windows {
        let mut t = window_start;
        while t < window_end {
            let tile_end = (t + interval).min(window_end);
            let record_end = (t + record).min(tile_end);
            push_segment(&mut raw, SegmentKind::Recording, t, record_end);
            push_segment(&mut raw, SegmentKind::Idle, record_end, tile_end);
            t = tile_end;
        }
    }

    if windows.is_empty() {
        push_segment(&mut raw, SegmentKind::Asleep, 0, SECONDS_PER_DAY);
    } else {
        for (idx, &(_, current_end)) in windows.iter().enumerate() {
            let (next_start, _) = windows[(idx + 1) % windows.len()];
            if next_start > current_end {
                push_segment(&mut raw, SegmentKind::Asleep, current_end, next_start);
            } else if next_start < current_end {
                // Gap runs through midnight; split below.
                push_segment(&mut raw, SegmentKind::Asleep, current_end, next_start + SECONDS_PER_DAY);
            }
        }
    }

    let mut normalized: Vec<DaySegment> = Vec::with_capacity(raw.len() + 1);
    for segment in raw {
        if segment.start_second >= SECONDS_PER_DAY {
            normalized.push(DaySegment::new(
                segment.kind,
                segment.start_second - SECONDS_PER_DAY,
                segment.end_second - SECONDS_PER_DAY,
            ));
        } else if segment.end_second > SECONDS_PER_DAY {
            normalized.push(DaySegment::new(segment.kind, segment.start_second, SECONDS_PER_DAY));
            normalized.push(DaySegment::new(segment.kind, 0, segment.end_second - SECONDS_PER_DAY));
        } else {
            normalized.push(segment);
        }
    }
    normalized.sort_by_key(|segment| segment.start_second);

    let mut merged: Vec<DaySegment> = Vec::with_capacity(normalized.len());
    for segment in normalized {
        push_segment(&mut merged, segment.kind, segment.start_second, segment.end_second);
    }

    // Fold the first segment into the last when they meet at midnight, so the
    // day boundary does not show up as a split.
    if merged.len() >= 2 {
        let first = merged[0];
        let last_idx = merged.len() - 1;
        let last = merged[last_idx];
        if first.kind == last.kind && first.start_second == 0 && last.end_second == SECONDS_PER_DAY {
            merged[last_idx] = DaySegment {
                kind: last.kind,
                start_second: last.start_second,
                end_second: first.end_second,
                duration_seconds: last.duration_seconds + first.duration_seconds,
            };
            merged.remove(0);
        }
    }

    merged
}

/// Totals per kind for one day's schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DayScheduleSummary {
    pub recording_segments: usize,
    pub recording_seconds: i64,
    pub idle_seconds: i64,
    pub asleep_seconds: i64,
}

impl DayScheduleSummary {
    pub fn from_segments(segments: &[DaySegment]) -> Self {
        let mut summary = DayScheduleSummary::default();
        for segment in segments {
            match segment.kind {
                SegmentKind::Recording => {
                    summary.recording_segments += 1;
                    summary.recording_seconds += segment.duration_seconds;
                }
                SegmentKind::Idle => summary.idle_seconds += segment.duration_seconds,
                SegmentKind::Asleep => summary.asleep_seconds += segment.duration_seconds,
            }
        }
        summary
    }

    pub fn total_seconds(&self) -> i64 {
        self.recording_seconds + self.idle_seconds + self.asleep_seconds
    }

    pub fn seconds_for(&self, kind: SegmentKind) -> i64 {
        match kind {
            SegmentKind::Recording => self.recording_seconds,
            SegmentKind::Idle => self.idle_seconds,
            SegmentKind::Asleep => self.asleep_seconds,
        }
    }

    pub fn percent(&self, kind: SegmentKind) -> f64 {
        let total = self.total_seconds();
        if total == 0 {
            return 0.0;
        }
        self.seconds_for(kind) as f64 * 100.0 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CaptureSettings;
    use crate::time::Duration;

    fn constant(record: i64, interval: i64) -> RecordingConfiguration {
        RecordingConfiguration::constant(
            Duration::from_seconds(record),
            Duration::from_seconds(interval),
            CaptureSettings::default(),
        )
    }

    fn dynamic(record: i64, interval: i64, start: TimeOfDay, end: TimeOfDay) -> RecordingConfiguration {
        RecordingConfiguration::dynamic(
            Duration::from_seconds(record),
            Duration::from_seconds(interval),
            CaptureSettings::default(),
            start,
            end,
        )
    }

    #[test]
    fn test_allowed_windows() {
        assert_eq!(allowed_windows(&constant(1, 2)), vec![(0, SECONDS_PER_DAY)]);
        let day = dynamic(1, 2, TimeOfDay::from_hours(7), TimeOfDay::from_hours(20));
        assert_eq!(allowed_windows(&day), vec![(25_200, 72_000)]);
        let night = dynamic(1, 2, TimeOfDay::from_hours(20), TimeOfDay::from_hours(6));
        assert_eq!(allowed_windows(&night), vec![(0, 21_600), (72_000, SECONDS_PER_DAY)]);
        let empty = dynamic(1, 2, TimeOfDay::from_hours(9), TimeOfDay::from_hours(9));
        assert!(allowed_windows(&empty).is_empty());
    }

    #[test]
    fn test_record_longer_than_interval_fills_the_day() {
        let segments = build_day_schedule(&constant(900, 600));
        assert_eq!(segments, vec![DaySegment::new(SegmentKind::Recording, 0, SECONDS_PER_DAY)]);
    }

    #[test]
    fn test_zero_record_is_all_idle() {
        let segments = build_day_schedule(&constant(0, 600));
        assert_eq!(segments, vec![DaySegment::new(SegmentKind::Idle, 0, SECONDS_PER_DAY)]);
    }

    #[test]
    fn test_zero_interval_floors_to_one_second() {
        let segments = build_day_schedule(&constant(0, 0));
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].kind, SegmentKind::Idle);

        // Sub-second intervals behave the same way.
        let config = RecordingConfiguration::constant(
            Duration::from_millis(400),
            Duration::from_millis(900),
            CaptureSettings::default(),
        );
        let segments = build_day_schedule(&config);
        assert_eq!(segments.len(), 1);
    }

    #[test]
    fn test_empty_window_sleeps_all_day() {
        let segments = build_day_schedule(&dynamic(60, 600, TimeOfDay::from_hours(8), TimeOfDay::from_hours(8)));
        assert_eq!(segments, vec![DaySegment::new(SegmentKind::Asleep, 0, SECONDS_PER_DAY)]);
    }

    #[test]
    fn test_last_tile_is_clipped_to_window() {
        // 07:00-07:25 with 10 minute tiles: two full tiles and a 5 minute stub.
        let segments = build_day_schedule(&dynamic(
            120,
            600,
            TimeOfDay::from_hours(7),
            TimeOfDay::from_components(7, 25, 0),
        ));
        let recording: Vec<i64> = segments
            .iter()
            .filter(|s| s.kind == SegmentKind::Recording)
            .map(|s| s.duration_seconds)
            .collect();
        assert_eq!(recording, vec![120, 120, 120]);
        let last_idle = segments
            .iter()
            .filter(|s| s.kind == SegmentKind::Idle)
            .last()
            .unwrap();
        assert_eq!(last_idle.end_second, 7 * 3600 + 25 * 60);
        assert_eq!(last_idle.duration_seconds, 180);
    }

    #[test]
    fn test_midnight_seam_merges_into_trailing_segment() {
        // Always recording inside 22:00-02:00: one wrapped Recording segment.
        let segments = build_day_schedule(&dynamic(600, 600, TimeOfDay::from_hours(22), TimeOfDay::from_hours(2)));
        assert_eq!(
            segments,
            vec![
                DaySegment::new(SegmentKind::Asleep, 7_200, 79_200),
                DaySegment {
                    kind: SegmentKind::Recording,
                    start_second: 79_200,
                    end_second: 7_200,
                    duration_seconds: 14_400,
                },
            ]
        );
        assert!(segments[1].wraps_midnight());
        assert_eq!(segments[1].start_time().format(crate::time::TimeFormat::HhMm), "22:00");
    }

    #[test]
    fn test_summary_percentages() {
        let segments = build_day_schedule(&constant(120, 600));
        let summary = DayScheduleSummary::from_segments(&segments);
        assert_eq!(summary.recording_segments, 144);
        assert_eq!(summary.total_seconds(), SECONDS_PER_DAY);
        assert!((summary.percent(SegmentKind::Recording) - 20.0).abs() < 1e-9);
        assert_eq!(summary.percent(SegmentKind::Asleep), 0.0);
    }
}
