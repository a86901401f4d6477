// crates/domain/src/analytics/aggregate.rs
use line_counter_shared_kernel::LineCount;

use crate::model::FileRecord;

/// Grand totals printed under the report table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total_lines: LineCount,
    pub file_count: usize,
}

impl Summary {
    pub fn from_records(records: &[FileRecord]) -> Self {
        Self {
            total_lines: records.iter().map(FileRecord::lines).sum(),
            file_count: records.len(),
        }
    }
}
