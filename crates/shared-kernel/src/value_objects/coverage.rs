// crates/shared-kernel/src/value_objects/coverage.rs
use serde::{Deserialize, Serialize};

/// Percentage-style coverage metric, valid over the closed interval [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Coverage(f64);

impl Coverage {
    /// Returns `None` for non-finite values and values outside [0, 100].
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && (0.0..=100.0).contains(&value)).then_some(Self(value))
    }

    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Coverage {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("coverage must lie in [0, 100]: {value}"))
    }
}

impl From<Coverage> for f64 {
    fn from(coverage: Coverage) -> Self {
        coverage.0
    }
}

mod display {
    use std::fmt;

    use super::Coverage;

    impl fmt::Display for Coverage {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.value())
        }
    }
}
