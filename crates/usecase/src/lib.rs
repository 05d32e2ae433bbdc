// crates/usecase/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::FilterOutcome;
pub use orchestrator::{FilterTable, LoadHits};
