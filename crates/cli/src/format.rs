//! Output formatting: human-readable table or JSON.

use solverstats::Trajectory;

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Format a trajectory.
pub fn format_trajectory(trajectory: &Trajectory, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(trajectory)
            .unwrap_or_else(|e| format!("{{\"error\":\"{}\"}}", e)),
        OutputMode::Human => format_table(trajectory),
    }
}

fn format_table(trajectory: &Trajectory) -> String {
    if trajectory.is_empty() {
        return "(empty trajectory)".to_string();
    }

    let mut out = format!(
        "{:>10}  {:>12}  {:>12}  {:>8}\n",
        "time_ms", "bound", "objective", "gap%"
    );
    for s in trajectory {
        let gap = match s.gap_percent {
            Some(gap) => format!("{:.2}", gap),
            None => "-".to_string(),
        };
        out.push_str(&format!(
            "{:>10}  {:>12}  {:>12}  {:>8}\n",
            s.time_ms, s.bound, s.objective, gap
        ));
    }
    out.push_str(&format!(
        "{} samples, domain bound {}, {}",
        trajectory.len(),
        trajectory
            .domain_bound()
            .map_or_else(|| "-".to_string(), |b| b.to_string()),
        if trajectory.is_terminated() {
            "terminated"
        } else {
            "not terminated"
        }
    ));
    out
}

/// Format a status line for `init`.
pub fn format_init(created: bool, path: &str, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::json!({ "path": path, "created": created }).to_string(),
        OutputMode::Human if created => format!("Created {}", path),
        OutputMode::Human => format!("{} already exists", path),
    }
}

/// Format an error.
pub fn format_error(error: &anyhow::Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::json!({ "error": format!("{:#}", error) }).to_string(),
        OutputMode::Human => format!("(error) {:#}", error),
    }
}
