use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

struct Report {
    _dir: TempDir,
    path: PathBuf,
}

impl Report {
    fn new(contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("create tempdir");
        let path = dir.path().join("hits.tsv");
        fs::write(&path, contents).expect("write report");
        Self { _dir: dir, path }
    }
}

fn covfilter() -> Command {
    Command::new(env!("CARGO_BIN_EXE_covfilter"))
}

#[test]
fn no_thresholds_is_rejected_with_a_user_message() {
    let report = Report::new("NC_000913.3\t250\t80\t90\n");
    covfilter()
        .arg(&report.path)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "set either a minimum PCT coverage or a minimum Q coverage",
        ));
}

#[test]
fn out_of_range_pct_is_rejected() {
    let report = Report::new("NC_000913.3\t250\t80\t90\n");
    // The `=` form keeps clap from treating a leading hyphen as a flag.
    for bad in ["--min-pct=-1", "--min-pct=101"] {
        covfilter()
            .arg(bad)
            .arg(&report.path)
            .assert()
            .failure()
            .stderr(predicate::str::contains("minimum PCT coverage must be a number between 0 and 100"));
    }
}

#[test]
fn out_of_range_q_is_rejected() {
    let report = Report::new("NC_000913.3\t250\t80\t90\n");
    covfilter()
        .args(["--min-q", "150"])
        .arg(&report.path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("minimum Q coverage must be a number between 0 and 100"));
}

#[test]
fn non_numeric_threshold_is_rejected() {
    let report = Report::new("NC_000913.3\t250\t80\t90\n");
    covfilter()
        .args(["--min-pct", "sixty"])
        .arg(&report.path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("got 'sixty'"));
}

#[test]
fn missing_report_file_is_reported_with_context() {
    covfilter()
        .args(["--min-pct", "60"])
        .arg("/nonexistent/hits.tsv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("loading hit report"))
        .stderr(predicate::str::contains("/nonexistent/hits.tsv"));
}

#[test]
fn malformed_report_line_is_reported() {
    let report = Report::new("NC_000913.3\t250\t80\n");
    covfilter()
        .args(["--min-pct", "60"])
        .arg(&report.path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed report line 1"));
}
