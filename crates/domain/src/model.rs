// crates/domain/src/model.rs
pub mod entities;
