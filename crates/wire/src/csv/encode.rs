//! CSV encoding for statistics rows
//!
//! Implements minimal quoting: a field is wrapped in quotes only when it
//! contains the delimiter, the quote character or a line break. Numbers are
//! rendered with `Display`, which is locale-independent.

use super::schema::{COLUMN_COUNT, DELIMITER, HEADER, QUOTE, ROW_TERMINATOR};
use solverstats_core::{StatsRow, TrajectoryPoint};
use std::borrow::Cow;

/// Encode one field, quoting it if needed
pub fn encode_field(field: &str) -> Cow<'_, str> {
    if !needs_quoting(field) {
        return Cow::Borrowed(field);
    }

    let mut result = String::with_capacity(field.len() + 2);
    result.push(QUOTE);
    for c in field.chars() {
        if c == QUOTE {
            result.push(QUOTE);
        }
        result.push(c);
    }
    result.push(QUOTE);
    Cow::Owned(result)
}

fn needs_quoting(field: &str) -> bool {
    field
        .chars()
        .any(|c| c == DELIMITER || c == QUOTE || c == '\r' || c == '\n')
}

/// Encode a complete record, terminator included
pub fn encode_record<S: AsRef<str>>(fields: &[S]) -> String {
    let encoded: Vec<Cow<'_, str>> = fields.iter().map(|f| encode_field(f.as_ref())).collect();
    let mut line = encoded.join(&DELIMITER.to_string());
    line.push_str(ROW_TERMINATOR);
    line
}

/// Encode the header record
pub fn encode_header() -> String {
    encode_record(&HEADER)
}

/// Render a row as its column values, in file order
///
/// Absent trajectory triples become empty cells.
pub fn row_fields(row: &StatsRow) -> [String; COLUMN_COUNT] {
    let [time1, bound1, objective1] = point_fields(row.best_objective_point);
    let [time2, bound2, objective2] = point_fields(row.final_point);

    [
        row.recorded_at.clone(),
        row.model_name.clone(),
        row.objective.to_string(),
        row.user_time_ms.to_string(),
        row.num_booleans.to_string(),
        row.num_branches.to_string(),
        row.num_conflicts.to_string(),
        row.parameters.clone(),
        row.solver_log.clone(),
        time1,
        bound1,
        objective1,
        time2,
        bound2,
        objective2,
    ]
}

fn point_fields(point: Option<TrajectoryPoint>) -> [String; 3] {
    match point {
        Some(p) => [
            p.time_ms.to_string(),
            p.bound.to_string(),
            p.objective.to_string(),
        ],
        None => Default::default(),
    }
}

/// Encode a statistics row as one complete record
pub fn encode_row(row: &StatsRow) -> String {
    encode_record(&row_fields(row))
}
