// crates/domain/src/analytics.rs
use std::cmp::Ordering;

use crate::model::entities::{Hit, TableRow};
use crate::options::{SortKey, SortSpec};

/// Orders rows by the given multi-key spec; ties fall through to later keys.
pub fn sort_rows(rows: &mut [TableRow], spec: &SortSpec) {
    rows.sort_by(|a, b| {
        for (key, desc) in &spec.0 {
            let order = compare(&a.hit, &b.hit, *key);
            if order != Ordering::Equal {
                return if *desc { order.reverse() } else { order };
            }
        }
        Ordering::Equal
    });
}

fn compare(a: &Hit, b: &Hit, key: SortKey) -> Ordering {
    match key {
        SortKey::Score => a.score.cmp(&b.score),
        // Coverage values are finite by construction, so partial_cmp is total here.
        SortKey::Pct => a.pct_coverage.partial_cmp(&b.pct_coverage).unwrap_or(Ordering::Equal),
        SortKey::Q => a.q_coverage.partial_cmp(&b.q_coverage).unwrap_or(Ordering::Equal),
        SortKey::Accession => a.accession.cmp(&b.accession),
    }
}
