mod common;

use common::{constant, windowed};
use gopro_interval::presets::defaults::builtin_presets;
use gopro_interval::recording::command_encoder::clock_sync_command;
use gopro_interval::recording::{encode_command, encode_command_with, EncodeOptions};
use chrono::NaiveDate;

#[test]
fn constant_and_dynamic_commands() {
    assert_eq!(encode_command(&constant(120, 600)), "mVr4p30fw!S!120E!2N!600RQ");
    assert_eq!(
        encode_command(&windowed(120, 600, "07:00", "20:00")),
        ">07:00<20:00mVr4p30fw!S!120E!2N!600RQ!07:00R"
    );
    assert_eq!(
        encode_command(&windowed(60, 1800, "20:00", "06:00")),
        ">20:00<06:00mVr4p30fw!S!60E!2N!1800RQ!20:00R"
    );
}

#[test]
fn options_change_delay_and_add_shutdown() {
    let options = EncodeOptions {
        start_delay_seconds: 0,
        window_shutdown: true,
    };
    assert_eq!(
        encode_command_with(&windowed(120, 600, "07:00", "20:00"), &options),
        ">07:00<20:00mVr4p30fw!S!120E!0N!600RQ~!20:01N!07:00R"
    );
    // Shutdown only applies to windowed commands.
    assert_eq!(encode_command_with(&constant(120, 600), &options), "mVr4p30fw!S!120E!0N!600RQ");
}

#[test]
fn builtin_preset_commands() {
    let commands: Vec<(String, String)> = builtin_presets()
        .into_iter()
        .map(|p| (p.id, encode_command(&p.configuration)))
        .collect();
    let expected = [
        ("day-only-1", ">07:00<20:00mVr27p30fw!S!120E!2N!3480RQ!07:00R"),
        ("day-only-2", ">07:00<20:00mVr27p30fw!S!120E!2N!1680RQ!07:00R"),
        ("testing", "mVr27p30fw!S!10E!2N!110RQ"),
        ("night-and-day-1", "mVr27p30fw!S!120E!2N!1080RQ"),
        ("night-and-day-2", "mVr27p30fw!S!120E!2N!1680RQ"),
        ("night-and-day-3", "mVr27p30fw!S!120E!2N!3480RQ"),
    ];
    for ((id, command), (expected_id, expected_command)) in commands.iter().zip(expected) {
        assert_eq!(id, expected_id);
        assert_eq!(command, expected_command);
    }
}

#[test]
fn clock_sync_pads_every_field() {
    let at = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap().and_hms_opt(3, 4, 5).unwrap();
    assert_eq!(clock_sync_command(&at), "oT240102030405");
}
