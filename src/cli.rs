use clap::{Arg, ArgAction, Command};
use log::debug;
use std::time::Instant;

// Arguments shared by every subcommand that needs a recording configuration.
fn with_configuration_args(cmd: Command) -> Command {
    cmd.arg(Arg::new("preset").short('p').long("preset").value_name("ID|NAME").help("Start from a saved or built-in preset").action(ArgAction::Set))
        .arg(Arg::new("record").short('r').long("record").value_name("H:MM:SS").help("Length of each clip").action(ArgAction::Set))
        .arg(Arg::new("interval").short('i').long("interval").value_name("H:MM:SS").help("Pause between clips").action(ArgAction::Set))
        .arg(Arg::new("start").long("start").value_name("HH:MM").help("Daily window start (switches to dynamic mode)").action(ArgAction::Set))
        .arg(Arg::new("end").long("end").value_name("HH:MM").help("Daily window end (switches to dynamic mode)").action(ArgAction::Set))
        .arg(Arg::new("constant").long("constant").help("Record around the clock, ignoring any window").action(ArgAction::SetTrue).conflicts_with_all(["start", "end"]))
        .arg(Arg::new("resolution").long("resolution").value_name("RES").help("Video resolution, e.g. 4K, 2.7K, 1080p").action(ArgAction::Set))
        .arg(Arg::new("framerate").long("framerate").value_name("FPS").help("Frames per second, e.g. 30, 60, 240").action(ArgAction::Set))
        .arg(Arg::new("lens").long("lens").value_name("FOV").help("Lens field of view, e.g. Wide, Linear, SuperView").action(ArgAction::Set))
        .arg(Arg::new("lenient").long("lenient").help("Treat unreadable time components as zero instead of failing").action(ArgAction::SetTrue))
}

pub fn build_cli() -> Command {
    debug!("⚙️ Building CLI interface...");
    let start_time = Instant::now();
    let cmd = Command::new("gopro-interval")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Builds interval-recording commands and day schedules for cameras that read QR commands.")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Sets a custom configuration file")
                .global(true)
                .action(ArgAction::Set)
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Enable debug logging")
                .global(true)
                .action(ArgAction::SetTrue)
        )
        .subcommand(
            with_configuration_args(Command::new("encode").about("Prints the camera command for a configuration"))
                .arg(Arg::new("delay").long("delay").value_name("SECONDS").help("Seconds the camera waits before the first clip").value_parser(clap::value_parser!(u32)).action(ArgAction::Set))
                .arg(Arg::new("window-shutdown").long("window-shutdown").help("Power the camera down one minute after the window closes").action(ArgAction::SetTrue))
        )
        .subcommand(
            with_configuration_args(Command::new("schedule").about("Shows how a configuration divides one day into recording, idle and asleep time"))
                .arg(Arg::new("format").short('f').long("format").value_name("FORMAT").help("Duration format, e.g. \"HH:MM:SS\" or \"mm minutes\"").action(ArgAction::Set))
                .arg(Arg::new("json").long("json").help("Print segments as JSON").action(ArgAction::SetTrue))
        )
        .subcommand(
            Command::new("presets")
                .about("Lists, shows, saves and deletes presets")
                .subcommand_required(true)
                .subcommand(Command::new("list").about("Lists built-in and custom presets"))
                .subcommand(
                    Command::new("show")
                        .about("Shows one preset and its command")
                        .arg(Arg::new("key").value_name("ID|NAME").required(true).action(ArgAction::Set))
                )
                .subcommand(
                    with_configuration_args(Command::new("save").about("Saves a configuration as a custom preset"))
                        .arg(Arg::new("name").value_name("NAME").required(true).action(ArgAction::Set))
                )
                .subcommand(
                    Command::new("delete")
                        .about("Deletes a custom preset")
                        .arg(Arg::new("id").value_name("ID").required(true).action(ArgAction::Set))
                )
        )
        .subcommand(
            with_configuration_args(Command::new("support").about("Lists camera models that support the chosen settings"))
        )
        .subcommand(
            Command::new("clock-sync").about("Prints the command that sets the camera clock to now")
        )
        .subcommand(
            with_configuration_args(Command::new("share").about("Prints a share token for a configuration, or decodes one"))
                .arg(Arg::new("decode").long("decode").value_name("TOKEN").help("Decode a share token instead of creating one").action(ArgAction::Set))
        );
    debug!("✅ CLI interface built in {:?}", start_time.elapsed());
    cmd
}
