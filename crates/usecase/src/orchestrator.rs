use covfilter_domain::criteria::{CriteriaInput, FilterCriteria};
use covfilter_domain::matcher::ExactMatcher;
use covfilter_domain::model::entities::{Hit, TableRow};
use covfilter_ports::rows::{HitDto as PortHit, HitSource};
use covfilter_shared_kernel::{ApplicationError, Result};

use crate::dto::FilterOutcome;

/// Loads hit records from a source and wraps them as visible table rows.
pub struct LoadHits<'a> {
    source: &'a dyn HitSource,
}

impl<'a> LoadHits<'a> {
    pub fn new(source: &'a dyn HitSource) -> Self {
        Self { source }
    }

    pub fn run(&self) -> Result<Vec<TableRow>> {
        let hits = self.source.load()?;
        Ok(hits.into_iter().map(port_to_domain_row).collect())
    }
}

fn port_to_domain_row(hit: PortHit) -> TableRow {
    TableRow::new(Hit {
        accession: hit.accession,
        score: hit.score,
        pct_coverage: hit.pct_coverage,
        q_coverage: hit.q_coverage,
    })
}

/// The table filter controller: validates the form state, then recomputes
/// every row's visibility in one synchronous pass.
///
/// Validation fully precedes mutation, so a rejected invocation leaves the
/// table untouched. Each invocation is stateless and idempotent given the
/// same inputs and row data.
pub struct FilterTable<'a> {
    matcher: Option<&'a dyn ExactMatcher>,
}

impl<'a> FilterTable<'a> {
    pub fn new() -> Self {
        Self { matcher: None }
    }

    /// Installs the host-supplied exact-match predicate.
    pub fn with_matcher(matcher: &'a dyn ExactMatcher) -> Self {
        Self { matcher: Some(matcher) }
    }

    /// # Errors
    /// Propagates criteria validation failures, and fails with
    /// `ExactMatcherUnavailable` when exact-match mode is requested without
    /// a matcher installed. No row visibility changes on any error.
    pub fn run(&self, input: &CriteriaInput, rows: &mut [TableRow]) -> Result<FilterOutcome> {
        let criteria = FilterCriteria::from_input(input)?;
        match criteria {
            FilterCriteria::Thresholds(thresholds) => {
                for row in rows.iter_mut() {
                    row.visible = thresholds.matches(&row.hit);
                }
            }
            FilterCriteria::Exact => {
                let matcher = self.matcher.ok_or(ApplicationError::ExactMatcherUnavailable)?;
                for row in rows.iter_mut() {
                    row.visible = matcher.matches(&row.hit);
                }
            }
        }
        Ok(FilterOutcome::tally(rows))
    }
}

impl Default for FilterTable<'_> {
    fn default() -> Self {
        Self::new()
    }
}
