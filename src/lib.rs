// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod args;
pub mod config;
pub mod options;
pub mod presentation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
