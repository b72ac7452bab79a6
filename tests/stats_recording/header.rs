//! Header lifecycle of the store

use solverstats::{ensure_header, SolverStats, HEADER};

#[test]
fn ensure_header_twice_leaves_one_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stats.csv");

    assert!(ensure_header(&path).unwrap());
    assert!(!ensure_header(&path).unwrap());

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text, format!("{}\r\n", HEADER.join(";")));
}

#[test]
fn ensure_header_on_existing_store_keeps_rows() {
    let dir = tempfile::tempdir().unwrap();
    let stats = SolverStats::open(dir.path().join("stats.csv")).unwrap();

    stats
        .write_stats(&crate::circles_summary(), "a", None)
        .unwrap();
    let before = std::fs::read_to_string(stats.path()).unwrap();

    assert!(!stats.ensure_header().unwrap());
    let after = std::fs::read_to_string(stats.path()).unwrap();
    assert_eq!(before, after);
}

#[test]
fn header_is_written_before_first_row() {
    let dir = tempfile::tempdir().unwrap();
    let stats = SolverStats::open(dir.path().join("stats.csv")).unwrap();

    stats
        .write_stats(&crate::circles_summary(), "a", Some(crate::SCENARIO_LOG))
        .unwrap();

    let text = std::fs::read_to_string(stats.path()).unwrap();
    assert!(text.starts_with("Date;ModelName;Objective;UserTime;#Booleans;#Branches;#Conflicts;SolverParameters;SolverLog;time1;bound1;objective1;time2;bound2;objective2\r\n"));
}
