use covfilter_shared_kernel::value_objects::{Coverage, Score};
use serde::Serialize;

/// One alignment hit: subject accession together with its score and the
/// two coverage metrics shown in the table.
#[derive(Debug, Clone, Serialize)]
pub struct Hit {
    pub accession: String,
    pub score: Score,
    pub pct_coverage: Coverage,
    pub q_coverage: Coverage,
}
