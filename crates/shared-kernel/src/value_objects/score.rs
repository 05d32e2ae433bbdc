// crates/shared-kernel/src/value_objects/score.rs
use serde::{Deserialize, Serialize};

/// Alignment bit score as reported in the tabular output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(u64);

impl Score {
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for Score {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

mod display {
    use std::fmt;

    use super::Score;

    impl fmt::Display for Score {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.value())
        }
    }
}
