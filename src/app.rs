// src/app.rs
use std::{fs, io::Write, path::Path};

use line_counter_infra::WalkScanner;
use line_counter_shared_kernel::{ApplicationError, ApplicationResult, ErrorContext, Result};
use line_counter_usecase::CountLines;

use crate::{
    config::Config,
    presentation::{self, WriterSink},
};

/// Runs one census: check the root, print the banner, scan, print the report.
///
/// Recovered per-file problems are printed inline; the returned error is
/// always fatal.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    ensure_root_exists(&config.root)?;
    presentation::write_banner(out, config)?;

    let scanner = WalkScanner::new();
    let mut sink = WriterSink::new(&mut *out);
    let output = CountLines::new(&scanner).run(&config.scan_plan(), &mut sink)?;

    presentation::write_report(out, &output).context("failed to write report")
}

/// Only a definite "not found" is fatal here; other stat failures surface later.
fn ensure_root_exists(root: &Path) -> ApplicationResult<()> {
    match fs::metadata(root) {
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            Err(ApplicationError::DirectoryNotFound { path: root.to_path_buf() })
        }
        _ => Ok(()),
    }
}
