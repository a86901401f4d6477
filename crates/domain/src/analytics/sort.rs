// domain analytics sorting utilities
use crate::model::FileRecord;

/// 行数の昇順で並べ替える（安定ソート）
///
/// Records with equal counts keep their traversal order.
pub fn sort_by_lines(records: &mut [FileRecord]) {
    records.sort_by_key(FileRecord::lines);
}
