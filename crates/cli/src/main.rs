//! SolverStats CLI: record solver runs from the shell.
//!
//! - `solverstats init runs.csv`
//! - `solverstats record runs.csv -m circles -s summary.toml -l solve.log`
//! - `solverstats trajectory solve.log --json`

mod commands;
mod format;
mod parse;

use std::process;

use anyhow::Context;
use solverstats::{extract, SolverStats};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use format::{format_error, format_init, format_trajectory, OutputMode};
use parse::{load_summary, matches_to_action, options_from_matches, CliAction};

fn main() {
    let matches = build_cli().get_matches();

    init_tracing(matches.get_count("verbose"));

    // Determine output mode
    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let action = match matches_to_action(&matches) {
        Ok(action) => action,
        Err(e) => {
            eprintln!("(error) {}", e);
            process::exit(1);
        }
    };

    match run(action, &matches, output_mode) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            eprintln!("{}", format_error(&e, output_mode));
            process::exit(1);
        }
    }
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(action: CliAction, matches: &clap::ArgMatches, mode: OutputMode) -> anyhow::Result<String> {
    let options = options_from_matches(matches)?;
    debug!("Running {:?} with {:?}", action, options);

    match action {
        CliAction::Init { csv } => {
            let stats = SolverStats::with_options(&csv, options)?;
            let created = stats.ensure_header()?;
            Ok(format_init(created, &csv.display().to_string(), mode))
        }
        CliAction::Record {
            csv,
            model,
            summary,
            log,
        } => {
            let summary = load_summary(&summary)?;
            let log_text = match &log {
                Some(path) => Some(
                    std::fs::read_to_string(path)
                        .with_context(|| format!("Failed to read log {}", path.display()))?,
                ),
                None => None,
            };

            let stats = SolverStats::with_options(&csv, options)?;
            let trajectory = stats
                .write_stats(&summary, &model, log_text.as_deref())
                .with_context(|| format!("Failed to record {} into {}", model, csv.display()))?;
            Ok(format_trajectory(&trajectory, mode))
        }
        CliAction::Trajectory { log } => {
            let text = std::fs::read_to_string(&log)
                .with_context(|| format!("Failed to read log {}", log.display()))?;
            Ok(format_trajectory(
                &extract(&text, options.strict_monotonic),
                mode,
            ))
        }
    }
}
