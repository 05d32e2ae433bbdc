// crates/domain/src/matcher.rs
use crate::model::entities::Hit;

/// Predicate used by exact-match mode. Its matching rule is defined by the
/// host application; the filter core only dispatches to it.
pub trait ExactMatcher {
    fn matches(&self, hit: &Hit) -> bool;
}
