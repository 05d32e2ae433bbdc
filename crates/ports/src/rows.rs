// crates/ports/src/rows.rs
use covfilter_shared_kernel::Result;
use covfilter_shared_kernel::value_objects::{Coverage, Score};

/// One hit record as produced by a report source.
#[derive(Debug, Clone)]
pub struct HitDto {
    pub accession: String,
    pub score: Score,
    pub pct_coverage: Coverage,
    pub q_coverage: Coverage,
}

/// Supplies the current set of hit records. The filter core only reads it.
pub trait HitSource {
    fn load(&self) -> Result<Vec<HitDto>>;
}
