// crates/infra/src/report.rs
use std::fs;
use std::path::PathBuf;

use covfilter_ports::rows::{HitDto, HitSource};
use covfilter_shared_kernel::error::{InfraResult, InfrastructureError};
use covfilter_shared_kernel::value_objects::{Coverage, Score};

/// Parses a BLAST tabular report produced with
/// `-outfmt "6 sacc score qcovhsp pident"`.
///
/// One hit per line, four tab-separated columns. Comment lines (`#`) and
/// blank lines are skipped.
///
/// # Errors
/// Fails with `ReportParse` on the first malformed line: wrong column
/// count, unparsable numbers, or coverages outside [0, 100].
pub fn parse_report(text: &str) -> InfraResult<Vec<HitDto>> {
    let mut hits = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim_end_matches('\r');
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        hits.push(parse_line(idx + 1, line)?);
    }
    Ok(hits)
}

fn parse_line(line_no: usize, line: &str) -> InfraResult<HitDto> {
    let malformed = |details: String| InfrastructureError::ReportParse { line: line_no, details };

    let fields: Vec<&str> = line.split('\t').collect();
    let [accession, score, q_coverage, pct_coverage] = fields.as_slice() else {
        return Err(malformed(format!(
            "expected 4 tab-separated columns, found {}",
            fields.len()
        )));
    };

    let score = score
        .parse::<u64>()
        .map_err(|e| malformed(format!("bad score '{score}': {e}")))?;
    let q_coverage = parse_coverage(q_coverage)
        .ok_or_else(|| malformed(format!("query coverage '{q_coverage}' is not a number in [0, 100]")))?;
    let pct_coverage = parse_coverage(pct_coverage)
        .ok_or_else(|| malformed(format!("percent identity '{pct_coverage}' is not a number in [0, 100]")))?;

    Ok(HitDto {
        accession: (*accession).to_string(),
        score: Score::new(score),
        pct_coverage,
        q_coverage,
    })
}

fn parse_coverage(text: &str) -> Option<Coverage> {
    text.parse::<f64>().ok().and_then(Coverage::new)
}

/// File-backed [`HitSource`] reading a tabular report from disk.
#[derive(Debug, Clone)]
pub struct FileHitSource {
    path: PathBuf,
}

impl FileHitSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HitSource for FileHitSource {
    fn load(&self) -> covfilter_shared_kernel::Result<Vec<HitDto>> {
        let text = fs::read_to_string(&self.path).map_err(|source| InfrastructureError::FileRead {
            path: self.path.clone(),
            source,
        })?;
        Ok(parse_report(&text)?)
    }
}
