// crates/ports/src/filesystem.rs
use std::path::PathBuf;

use line_counter_shared_kernel::{LineCount, Result};

/// How far below the root a scan descends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanMode {
    /// Full subtree, minus hidden directories.
    #[default]
    Recursive,
    /// Direct children of the root only.
    Shallow,
}

impl ScanMode {
    pub fn is_recursive(self) -> bool {
        matches!(self, Self::Recursive)
    }
}

/// Input parameters controlling a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanPlan {
    pub root: PathBuf,
    pub mode: ScanMode,
}

/// DTO representing a file counted by a scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountedFile {
    pub path: PathBuf,
    pub lines: LineCount,
}

/// Which step failed for a skipped entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    /// The entry could not be reached while walking.
    Access,
    /// The file was found but could not be opened or read.
    Read,
}

/// A recovered, per-entry failure. The entry is left out of the results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanIssue {
    pub path: PathBuf,
    pub kind: IssueKind,
    pub reason: String,
}

impl ScanIssue {
    pub fn access(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self { path: path.into(), kind: IssueKind::Access, reason: reason.to_string() }
    }

    pub fn read(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self { path: path.into(), kind: IssueKind::Read, reason: reason.to_string() }
    }
}

/// Outcome for a single candidate file.
pub type ScanItem = std::result::Result<CountedFile, ScanIssue>;

/// Lazily produced scan results, in traversal order.
pub type ScanEntries<'a> = Box<dyn Iterator<Item = ScanItem> + 'a>;

/// Port for walking a tree and counting the code files in it.
///
/// `scan` fails only when the walk cannot start at all; everything after
/// that is reported per item.
pub trait SourceScanner {
    fn scan<'a>(&'a self, plan: &ScanPlan) -> Result<ScanEntries<'a>>;
}
