// crates/usecase/src/dto.rs
use line_counter_domain::{FileRecord, Summary};

/// Sorted records and their totals, ready to render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountLinesOutput {
    pub records: Vec<FileRecord>,
    pub summary: Summary,
}

impl CountLinesOutput {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
