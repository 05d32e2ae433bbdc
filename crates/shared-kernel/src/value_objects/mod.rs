// crates/shared-kernel/src/value_objects/mod.rs
mod coverage;
mod score;

pub use coverage::Coverage;
pub use score::Score;
