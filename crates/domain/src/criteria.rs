// crates/domain/src/criteria.rs
use covfilter_shared_kernel::error::{DomainError, DomainResult};
use covfilter_shared_kernel::value_objects::Coverage;

use crate::model::entities::Hit;

/// Raw form state as entered by the user. Empty threshold text means the
/// threshold is unset.
#[derive(Debug, Clone, Default)]
pub struct CriteriaInput {
    pub exact_match: bool,
    pub min_pct: String,
    pub min_q: String,
}

/// Validated minimum-coverage thresholds. At least one of the two is set.
#[derive(Debug, Clone, Copy)]
pub struct CoverageThresholds {
    pub min_pct: Option<Coverage>,
    pub min_q: Option<Coverage>,
}

impl CoverageThresholds {
    /// A hit stays visible when it clears every set threshold.
    #[inline]
    pub fn matches(&self, hit: &Hit) -> bool {
        self.min_pct.is_none_or(|m| hit.pct_coverage >= m)
            && self.min_q.is_none_or(|m| hit.q_coverage >= m)
    }
}

/// Validated filter criteria, constructed fresh from form state on every
/// invocation and never persisted.
#[derive(Debug, Clone, Copy)]
pub enum FilterCriteria {
    Thresholds(CoverageThresholds),
    /// Exact-match mode. The predicate itself is supplied by the host
    /// application through [`crate::matcher::ExactMatcher`].
    Exact,
}

impl FilterCriteria {
    /// Validates raw form state into usable criteria.
    ///
    /// Exact-match mode bypasses threshold validation entirely. Otherwise
    /// at least one threshold must be supplied, and every supplied
    /// threshold must be a number in [0, 100]. The PCT field is checked
    /// before the Q field.
    ///
    /// # Errors
    /// `MissingCriteria` when both fields are empty, `InvalidPct` or
    /// `InvalidQ` when a supplied field does not parse as a number in
    /// [0, 100].
    pub fn from_input(input: &CriteriaInput) -> DomainResult<Self> {
        if input.exact_match {
            return Ok(Self::Exact);
        }

        let pct_text = input.min_pct.trim();
        let q_text = input.min_q.trim();
        if pct_text.is_empty() && q_text.is_empty() {
            return Err(DomainError::MissingCriteria);
        }

        let min_pct = parse_threshold(pct_text, |input| DomainError::InvalidPct { input })?;
        let min_q = parse_threshold(q_text, |input| DomainError::InvalidQ { input })?;
        Ok(Self::Thresholds(CoverageThresholds { min_pct, min_q }))
    }
}

/// Explicit parse-and-validate step: empty text is an unset threshold,
/// anything else must be a finite number in [0, 100]. Non-numeric text is
/// rejected with the same error as an out-of-range number.
fn parse_threshold(
    text: &str,
    invalid: impl FnOnce(String) -> DomainError,
) -> DomainResult<Option<Coverage>> {
    if text.is_empty() {
        return Ok(None);
    }
    text.parse::<f64>()
        .ok()
        .and_then(Coverage::new)
        .map(Some)
        .ok_or_else(|| invalid(text.to_string()))
}
