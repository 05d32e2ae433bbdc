// crates/domain/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod criteria;
pub mod matcher;
pub mod model;
pub mod options;
