//! The documented end-to-end scenario

use solverstats::{SolverStats, TrajectoryPoint};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-2
}

#[test]
fn scenario_trajectory_and_row() {
    let dir = tempfile::tempdir().unwrap();
    let stats = SolverStats::open(dir.path().join("stats.csv")).unwrap();

    let trajectory = stats
        .write_stats_at(
            &crate::circles_summary(),
            "circles-5x5",
            Some(crate::SCENARIO_LOG),
            crate::fixed_time(),
        )
        .unwrap();

    let points: Vec<TrajectoryPoint> = trajectory.iter().map(|s| s.point()).collect();
    assert_eq!(
        points,
        vec![
            TrajectoryPoint { time_ms: 500, bound: 10, objective: 21 },
            TrajectoryPoint { time_ms: 1200, bound: 15, objective: 26 },
            TrajectoryPoint { time_ms: 2000, bound: 15, objective: 26 },
        ]
    );
    let gaps: Vec<f64> = trajectory.iter().map(|s| s.gap_percent.unwrap()).collect();
    assert!(close(gaps[0], 52.38));
    assert!(close(gaps[1], 42.31));
    assert!(close(gaps[2], 42.31));

    let rows = stats.rows().unwrap();
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row[0], "2024-05-21_14-05");
    assert_eq!(row[1], "circles-5x5");
    assert_eq!(row[2], "26");
    assert_eq!(row[3], "2045");
    assert_eq!(row[4], "1250");
    assert_eq!(row[5], "48213");
    assert_eq!(row[6], "7902");
    assert_eq!(row[7], crate::circles_summary().parameters);
    assert!(row[8].starts_with("objective: minimize sum(border)\r\n#1 0.50s"));
    assert!(row[8].ends_with("status: OPTIMAL"));
    assert_eq!(&row[9..12], &["1200", "15", "26"]);
    assert_eq!(&row[12..15], &["2000", "15", "26"]);
}

#[test]
fn empty_log_short_circuits() {
    let dir = tempfile::tempdir().unwrap();
    let stats = SolverStats::open(dir.path().join("stats.csv")).unwrap();

    let trajectory = stats
        .write_stats_at(&crate::circles_summary(), "m", Some(""), crate::fixed_time())
        .unwrap();
    assert!(trajectory.is_empty());

    let rows = stats.rows().unwrap();
    let row = &rows[0];
    assert_eq!(row[2], "26");
    assert!(row[8..].iter().all(|cell| cell.is_empty()));
}

#[test]
fn optimum_proven_late_keeps_early_best_point() {
    let dir = tempfile::tempdir().unwrap();
    let stats = SolverStats::open(dir.path().join("stats.csv")).unwrap();
    let log = "objective lines follow\n\
               #1 0.1s next:[0,29]\n\
               #2 0.4s next:[5,19]\n\
               #Bound 3.0s next:[12,19]\n\
               #Bound 9.5s next:[19,19]\n\
               #Done 9.6s next:[]\n";

    stats
        .write_stats_at(&crate::circles_summary(), "m", Some(log), crate::fixed_time())
        .unwrap();

    let rows = stats.rows().unwrap();
    assert_eq!(&rows[0][9..12], &["400", "5", "20"]);
    assert_eq!(&rows[0][12..15], &["9600", "19", "20"]);
}

#[test]
fn best_point_is_never_the_first_of_several_samples() {
    let dir = tempfile::tempdir().unwrap();
    let stats = SolverStats::open(dir.path().join("stats.csv")).unwrap();

    stats
        .write_stats_at(
            &crate::circles_summary(),
            "m",
            Some("obj\n#1 0.5s next:[20,20]\n#Done 1s next:[]\n"),
            crate::fixed_time(),
        )
        .unwrap();

    let rows = stats.rows().unwrap();
    assert_eq!(&rows[0][9..12], &["1000", "20", "21"]);
    assert_eq!(&rows[0][12..15], &["1000", "20", "21"]);
}

#[test]
fn best_point_counts_matches_before_a_worse_objective() {
    let dir = tempfile::tempdir().unwrap();
    let stats = SolverStats::open(dir.path().join("stats.csv")).unwrap();
    let log = "#1 1s next:[0,9]\n\
               #2 2s next:[0,9]\n\
               #3 3s next:[0,11]\n\
               #Done 4s next:[0,9]\n";

    stats
        .write_stats_at(&crate::circles_summary(), "m", Some(log), crate::fixed_time())
        .unwrap();

    let rows = stats.rows().unwrap();
    assert_eq!(&rows[0][9..12], &["2000", "0", "10"]);
    assert_eq!(&rows[0][12..15], &["4000", "0", "10"]);
}

#[test]
fn log_without_progress_lines_records_zero_points() {
    let dir = tempfile::tempdir().unwrap();
    let stats = SolverStats::open(dir.path().join("stats.csv")).unwrap();

    let trajectory = stats
        .write_stats_at(
            &crate::circles_summary(),
            "m",
            Some("objective: minimize\nno progress\n"),
            crate::fixed_time(),
        )
        .unwrap();
    assert!(trajectory.is_empty());

    let rows = stats.rows().unwrap();
    assert_eq!(rows[0][8], "objective: minimize\r\nno progress");
    assert!(rows[0][9..].iter().all(|cell| cell == "0"));
}
