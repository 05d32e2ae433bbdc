// crates/domain/src/model/entities.rs
mod hit;
mod table_row;

pub use hit::Hit;
pub use table_row::TableRow;
