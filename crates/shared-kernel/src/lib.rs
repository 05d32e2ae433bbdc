//! # Shared kernel
//!
//! Error types and value objects shared by every layer of the workspace.

// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod error;
pub mod value_objects;

pub use error::{
    ApplicationError, ApplicationResult, CovFilterError, DomainError, DomainResult, ErrorContext,
    InfraResult, InfrastructureError, Result,
};
