// crates/domain/src/model.rs
use std::path::{Path, PathBuf};

use line_counter_shared_kernel::LineCount;

/// One counted file: where it lives and how many lines it has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    path: PathBuf,
    lines: LineCount,
}

impl FileRecord {
    pub fn new(path: impl Into<PathBuf>, lines: impl Into<LineCount>) -> Self {
        Self { path: path.into(), lines: lines.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines(&self) -> LineCount {
        self.lines
    }

    /// Path as printed in reports.
    pub fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}
