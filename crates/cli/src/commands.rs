//! Clap command tree.

use clap::{Arg, ArgAction, Command};

/// Build the `solverstats` command.
pub fn build_cli() -> Command {
    Command::new("solverstats")
        .about("Record solver progress-log telemetry into a CSV store")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Print JSON instead of a table"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_name("FILE")
                .help("TOML file with recorder options"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("More log output (-v debug, -vv trace)"),
        )
        .subcommand(
            Command::new("init")
                .about("Create the store with its header if it does not exist")
                .arg(csv_arg()),
        )
        .subcommand(
            Command::new("record")
                .about("Append one solve to the store")
                .arg(csv_arg())
                .arg(
                    Arg::new("model")
                        .long("model")
                        .short('m')
                        .required(true)
                        .help("Model name"),
                )
                .arg(
                    Arg::new("summary")
                        .long("summary")
                        .short('s')
                        .required(true)
                        .value_name("FILE")
                        .help("Solver summary (.json or .toml)"),
                )
                .arg(
                    Arg::new("log")
                        .long("log")
                        .short('l')
                        .value_name("FILE")
                        .help("Solver progress log"),
                )
                .arg(strict_arg())
                .arg(
                    Arg::new("fsync")
                        .long("fsync")
                        .action(ArgAction::SetTrue)
                        .help("Sync the store to disk after writing"),
                ),
        )
        .subcommand(
            Command::new("trajectory")
                .about("Print the trajectory of a progress log without recording")
                .arg(
                    Arg::new("log")
                        .required(true)
                        .value_name("LOG")
                        .help("Solver progress log"),
                )
                .arg(strict_arg()),
        )
}

fn csv_arg() -> Arg {
    Arg::new("csv")
        .required(true)
        .value_name("CSV")
        .help("Path of the statistics store")
}

fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Make repaired log times strictly increasing")
}
