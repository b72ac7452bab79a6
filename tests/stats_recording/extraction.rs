//! Trajectory extraction through the public API

use proptest::prelude::*;
use solverstats::{extract, SolverStats};

const REPAIR_LOG: &str = "#1 5s next:[2,40]\n#2 3s next:[3,30]\n#3 3s next:[4,30]\n#4 9s next:[5,30]\n";

fn times(log: &str, strict: bool) -> Vec<u64> {
    extract(log, strict).iter().map(|s| s.time_ms).collect()
}

#[test]
fn repair_keeps_order_without_strict() {
    assert_eq!(times(REPAIR_LOG, false), vec![5000, 5000, 5000, 9000]);
}

#[test]
fn repair_separates_ties_with_strict() {
    assert_eq!(times(REPAIR_LOG, true), vec![5000, 5001, 5002, 9000]);
}

#[test]
fn recorder_uses_configured_policy() {
    let dir = tempfile::tempdir().unwrap();
    let mut stats = SolverStats::open(dir.path().join("stats.csv")).unwrap();

    let relaxed = stats
        .write_stats(&crate::circles_summary(), "m", Some(REPAIR_LOG))
        .unwrap();
    stats.set_strict_monotonic(true);
    let strict = stats
        .write_stats(&crate::circles_summary(), "m", Some(REPAIR_LOG))
        .unwrap();

    assert_eq!(relaxed.samples()[2].time_ms, 5000);
    assert_eq!(strict.samples()[2].time_ms, 5002);
}

#[test]
fn reparsing_is_idempotent() {
    assert_eq!(extract(crate::SCENARIO_LOG, false), extract(crate::SCENARIO_LOG, false));
}

proptest! {
    #[test]
    fn columns_stay_in_step(log in "(#[0-9]{1,2}|#Bound|#Done|[0-9]{1,2}\\.[0-9]s|next:\\[[0-9]{1,2},[0-9]{1,2}\\]|next:\\[\\]|[a-z]{1,4}|[ \n]){0,60}",
                            strict in any::<bool>()) {
        let trajectory = extract(&log, strict);
        let columns = trajectory.columns();
        prop_assert!(columns.check().is_ok());
        prop_assert_eq!(columns.times.len(), trajectory.len());
        prop_assert_eq!(columns.bounds.len(), trajectory.len());
        prop_assert_eq!(columns.objectives.len(), trajectory.len());
    }
}
