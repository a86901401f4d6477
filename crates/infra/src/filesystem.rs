// crates/infra/src/filesystem.rs
use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use ignore::{DirEntry, WalkBuilder};
use line_counter_domain::is_code_file;
use line_counter_ports::{
    filesystem::{CountedFile, ScanEntries, ScanIssue, ScanItem, ScanMode, ScanPlan, SourceScanner},
    measurement::LineCounter,
};
use line_counter_shared_kernel::{InfraResult, InfrastructureError, Result};
use tracing::debug;

use crate::measurement::NewlineCounter;

/// Filesystem adapter implementing the `SourceScanner` port.
///
/// Recursive scans walk depth-first with the `ignore` walker (all ignore
/// files disabled), pruning directories whose name starts with `.` below the
/// root. Shallow scans list the root only. Entries of a directory are visited
/// in file-name order.
#[derive(Debug, Default)]
pub struct WalkScanner<C = NewlineCounter> {
    counter: C,
}

impl WalkScanner {
    pub fn new() -> Self {
        Self::with_counter(NewlineCounter::new())
    }
}

impl<C: LineCounter> WalkScanner<C> {
    pub fn with_counter(counter: C) -> Self {
        Self { counter }
    }

    fn count_candidate(&self, path: PathBuf) -> ScanItem {
        let path = clean_path(path);
        match self.counter.count_lines(&path) {
            Ok(lines) => {
                debug!(path = %path.display(), lines = lines.value(), "counted file");
                Ok(CountedFile { path, lines })
            }
            Err(err) => Err(ScanIssue::read(path, err)),
        }
    }

    fn walk_recursive(&self, root: &Path) -> InfraResult<ScanEntries<'_>> {
        fs::metadata(root).map_err(|source| InfrastructureError::WalkStart { path: root.to_path_buf(), source })?;

        let walker = WalkBuilder::new(root)
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(|entry| !is_hidden_subdir(entry))
            .build();

        let root = root.to_path_buf();
        Ok(Box::new(walker.filter_map(move |result| match result {
            Ok(entry) => {
                if entry.file_type().is_some_and(|ft| ft.is_dir()) {
                    return None;
                }
                let is_code = is_code_file(&entry.file_name().to_string_lossy());
                is_code.then(|| self.count_candidate(entry.into_path()))
            }
            Err(err) => Some(Err(walk_issue(&root, &err))),
        })))
    }

    fn list_shallow(&self, root: &Path) -> InfraResult<ScanEntries<'_>> {
        let listing_error = |source: std::io::Error| InfrastructureError::DirectoryList { path: root.to_path_buf(), source };

        let mut entries = fs::read_dir(root)
            .map_err(listing_error)?
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(listing_error)?;
        entries.sort_by_key(fs::DirEntry::file_name);

        Ok(Box::new(entries.into_iter().filter_map(move |entry| {
            if !is_code_file(&entry.file_name().to_string_lossy()) {
                return None;
            }
            match entry.file_type() {
                Ok(ft) if ft.is_dir() => None,
                Ok(_) => Some(self.count_candidate(entry.path())),
                Err(err) => Some(Err(ScanIssue::access(clean_path(entry.path()), err))),
            }
        })))
    }
}

impl<C: LineCounter> SourceScanner for WalkScanner<C> {
    fn scan<'a>(&'a self, plan: &ScanPlan) -> Result<ScanEntries<'a>> {
        let entries = match plan.mode {
            ScanMode::Recursive => self.walk_recursive(&plan.root)?,
            ScanMode::Shallow => self.list_shallow(&plan.root)?,
        };
        Ok(entries)
    }
}

/// A directory below the root whose name starts with `.`.
fn is_hidden_subdir(entry: &DirEntry) -> bool {
    let hidden = entry.depth() > 0
        && entry.file_type().is_some_and(|ft| ft.is_dir())
        && entry.file_name().as_encoded_bytes().starts_with(b".");
    if hidden {
        debug!(path = %entry.path().display(), "skipping hidden directory");
    }
    hidden
}

fn walk_issue(root: &Path, err: &ignore::Error) -> ScanIssue {
    let (path, cause) = split_walk_error(err);
    ScanIssue::access(clean_path(path.unwrap_or(root).to_path_buf()), cause)
}

/// Drops `.` components, so `./src/a.py` reads as `src/a.py`.
fn clean_path(path: PathBuf) -> PathBuf {
    if !path.components().any(|c| c == Component::CurDir) {
        return path;
    }
    let cleaned: PathBuf = path.components().filter(|c| *c != Component::CurDir).collect();
    if cleaned.as_os_str().is_empty() { path } else { cleaned }
}

/// Peels the path/depth wrappers `ignore` puts around the underlying error.
fn split_walk_error(err: &ignore::Error) -> (Option<&Path>, &ignore::Error) {
    match err {
        ignore::Error::WithPath { path, err } => (Some(path.as_path()), split_walk_error(err).1),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => split_walk_error(err),
        other => (None, other),
    }
}
