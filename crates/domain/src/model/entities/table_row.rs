use super::Hit;

/// A hit together with its display state. Filtering toggles visibility;
/// rows are never removed from the collection.
#[derive(Debug, Clone)]
pub struct TableRow {
    pub hit: Hit,
    pub visible: bool,
}

impl TableRow {
    /// Rows start out visible, matching an unfiltered table.
    pub fn new(hit: Hit) -> Self {
        Self { hit, visible: true }
    }
}
