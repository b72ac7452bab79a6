//! Append-only growth of the store

use solverstats::{SolverStats, SolverSummary};

#[test]
fn n_writes_add_n_rows() {
    let dir = tempfile::tempdir().unwrap();
    let stats = SolverStats::open(dir.path().join("stats.csv")).unwrap();

    let logs = [
        None,
        Some(crate::SCENARIO_LOG),
        Some(""),
        Some("no progress here\n"),
        Some("#1 1s next:[0,9]\n"),
    ];
    for (i, log) in logs.iter().enumerate() {
        stats
            .write_stats_at(
                &crate::circles_summary(),
                &format!("model-{}", i),
                *log,
                crate::fixed_time(),
            )
            .unwrap();
    }

    let rows = stats.rows().unwrap();
    assert_eq!(rows.len(), logs.len());
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row.len(), 15);
        assert_eq!(row[1], format!("model-{}", i));
    }
    // absent and empty logs leave the points empty, a log without
    // progress lines records zeros
    assert!(rows[0][9..].iter().all(|cell| cell.is_empty()));
    assert!(rows[2][9..].iter().all(|cell| cell.is_empty()));
    assert!(rows[3][9..].iter().all(|cell| cell == "0"));
    assert_eq!(&rows[4][12..15], &["1000", "0", "10"]);

    let text = std::fs::read_to_string(stats.path()).unwrap();
    assert_eq!(text.matches("Date;ModelName").count(), 1);
}

#[test]
fn existing_store_is_appended_to() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stats.csv");

    SolverStats::open(&path)
        .unwrap()
        .write_stats(&SolverSummary::default(), "first", None)
        .unwrap();

    // a fresh recorder on the same file
    let stats = SolverStats::open(&path).unwrap();
    stats
        .write_stats(&SolverSummary::default(), "second", None)
        .unwrap();
    stats
        .write_stats(&SolverSummary::default(), "third", None)
        .unwrap();

    let names: Vec<String> = stats
        .rows()
        .unwrap()
        .into_iter()
        .map(|row| row[1].clone())
        .collect();
    assert_eq!(names, vec!["first", "second", "third"]);
}

#[test]
fn awkward_text_stays_in_its_cell() {
    let dir = tempfile::tempdir().unwrap();
    let stats = SolverStats::open(dir.path().join("stats.csv")).unwrap();

    let summary = SolverSummary {
        parameters: "a; b \"quoted\"\nnext line".to_string(),
        ..Default::default()
    };
    stats
        .write_stats(&summary, "model;with;semicolons", Some("obj 1;2\n#1 1s next:[1,2]\n"))
        .unwrap();

    let rows = stats.rows().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][1], "model;with;semicolons");
    assert_eq!(rows[0][7], summary.parameters);
    assert_eq!(rows[0][8], "obj 1;2\r\n#1 1s next:[1,2]");
}

#[test]
fn failed_write_persists_nothing() {
    let dir = tempfile::tempdir().unwrap();
    // a directory where the store file should be
    let path = dir.path().join("stats.csv");
    std::fs::create_dir(&path).unwrap();

    let stats = SolverStats::open(&path).unwrap();
    let err = stats
        .write_stats(&crate::circles_summary(), "m", Some(crate::SCENARIO_LOG))
        .unwrap_err();
    assert!(err.is_io());
    assert!(path.is_dir());
}
