use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const REPORT: &str = "NC_000913.3\t250\t80\t90\nNR_074891.1\t88\t95\t50\n";

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
fn shows_help() {
    covfilter()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("covfilter"));
}

#[test]
fn min_pct_hides_rows_below_the_threshold() {
    let report = Report::new(REPORT);
    covfilter()
        .args(["--min-pct", "60"])
        .arg(&report.path)
        .assert()
        .success()
        .stdout(predicate::str::contains("NC_000913.3"))
        .stdout(predicate::str::contains("NR_074891.1").not())
        .stdout(predicate::str::contains("1 shown, 1 hidden."));
}

#[test]
fn both_thresholds_must_be_cleared() {
    let report = Report::new("NC_000913.3\t250\t80\t90\n");
    covfilter()
        .args(["--min-pct", "60", "--min-q", "85"])
        .arg(&report.path)
        .assert()
        .success()
        .stdout(predicate::str::contains("0 shown, 1 hidden."));
}

#[test]
fn min_q_alone_is_sufficient_criteria() {
    let report = Report::new(REPORT);
    covfilter()
        .args(["--min-q", "90"])
        .arg(&report.path)
        .assert()
        .success()
        .stdout(predicate::str::contains("NR_074891.1"))
        .stdout(predicate::str::contains("1 shown, 1 hidden."));
}

#[test]
fn json_output_carries_hits_and_counts() {
    let report = Report::new(REPORT);
    covfilter()
        .args(["--min-pct", "60", "--format", "json"])
        .arg(&report.path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"hits\""))
        .stdout(predicate::str::contains("\"shown\": 1"))
        .stdout(predicate::str::contains("\"hidden\": 1"));
}

#[test]
fn csv_output_has_a_header_row() {
    let report = Report::new(REPORT);
    covfilter()
        .args(["--min-pct", "0", "--format", "csv"])
        .arg(&report.path)
        .assert()
        .success()
        .stdout(predicate::str::contains("accession,score,pct_coverage,q_coverage"))
        .stdout(predicate::str::contains("NC_000913.3,250,90,80"));
}

#[test]
fn sort_orders_visible_rows() {
    let report = Report::new(REPORT);
    let output = covfilter()
        .args(["--min-pct", "0", "--format", "csv", "--sort", "score:desc"])
        .arg(&report.path)
        .output()
        .expect("run binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf-8 output");
    let first_hit = stdout.lines().nth(1).expect("at least one data row");
    assert!(first_hit.starts_with("NC_000913.3"), "got: {first_hit}");
}

#[test]
fn comment_lines_in_the_report_are_ignored() {
    let report = Report::new("# BLASTN 2.13.0+\nNC_000913.3\t250\t80\t90\n");
    covfilter()
        .args(["--min-pct", "60"])
        .arg(&report.path)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 shown, 0 hidden."));
}
