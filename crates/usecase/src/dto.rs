// crates/usecase/src/dto.rs
use covfilter_domain::model::entities::TableRow;

/// Visible/hidden row counts after one filter pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOutcome {
    pub visible: usize,
    pub hidden: usize,
}

impl FilterOutcome {
    pub fn tally(rows: &[TableRow]) -> Self {
        let visible = rows.iter().filter(|r| r.visible).count();
        Self { visible, hidden: rows.len() - visible }
    }
}
