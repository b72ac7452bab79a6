//! ArgMatches → CliAction conversion.
//!
//! Translates clap's parsed arguments into the action to run, and loads the
//! files the actions refer to.

use anyhow::{bail, Context};
use clap::ArgMatches;
use solverstats::{DurabilityMode, SolverSummary, StatsOptions};
use std::path::{Path, PathBuf};

/// The action requested on the command line.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Create the store header.
    Init { csv: PathBuf },
    /// Record one solve.
    Record {
        csv: PathBuf,
        model: String,
        summary: PathBuf,
        log: Option<PathBuf>,
    },
    /// Extract and print a trajectory.
    Trajectory { log: PathBuf },
}

/// Convert clap ArgMatches into a CliAction.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, String> {
    let (sub_name, m) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    match sub_name {
        "init" => Ok(CliAction::Init {
            csv: required_path(m, "csv")?,
        }),
        "record" => Ok(CliAction::Record {
            csv: required_path(m, "csv")?,
            model: m
                .get_one::<String>("model")
                .cloned()
                .ok_or("Missing --model")?,
            summary: required_path(m, "summary")?,
            log: m.get_one::<String>("log").map(PathBuf::from),
        }),
        "trajectory" => Ok(CliAction::Trajectory {
            log: required_path(m, "log")?,
        }),
        other => Err(format!("Unknown command: {}", other)),
    }
}

fn required_path(m: &ArgMatches, name: &str) -> Result<PathBuf, String> {
    m.get_one::<String>(name)
        .map(PathBuf::from)
        .ok_or_else(|| format!("Missing {}", name))
}

/// Recorder options: `--config` file first, then command-line flags.
pub fn options_from_matches(matches: &ArgMatches) -> anyhow::Result<StatsOptions> {
    let mut options = match matches.get_one::<String>("config") {
        Some(path) => StatsOptions::load(path)
            .with_context(|| format!("Failed to load config {}", path))?,
        None => StatsOptions::default(),
    };

    if let Some((_, m)) = matches.subcommand() {
        if flag(m, "strict") {
            options = options.strict_monotonic(true);
        }
        if flag(m, "fsync") {
            options = options.durability(DurabilityMode::Strict);
        }
    }
    Ok(options)
}

// `try_get_one` because not every subcommand defines every flag
fn flag(m: &ArgMatches, name: &str) -> bool {
    matches!(m.try_get_one::<bool>(name), Ok(Some(true)))
}

/// Load a solver summary from a `.json` or `.toml` file.
pub fn load_summary(path: &Path) -> anyhow::Result<SolverSummary> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read summary {}", path.display()))?;

    let summary = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(&text)
            .with_context(|| format!("Invalid JSON summary {}", path.display()))?,
        Some("toml") => toml::from_str(&text)
            .with_context(|| format!("Invalid TOML summary {}", path.display()))?,
        _ => bail!(
            "Summary {} must have a .json or .toml extension",
            path.display()
        ),
    };
    Ok(summary)
}
