pub mod command_encoder;
pub mod config;
pub mod day_schedule;

pub use command_encoder::{encode_command, encode_command_with, EncodeOptions, DEFAULT_START_DELAY_SECONDS};
pub use config::{RecordingConfiguration, RecordingWindow};
pub use day_schedule::{build_day_schedule, DaySegment, DayScheduleSummary, SegmentKind};
