// src/presentation.rs
use std::io::{self, Write};

use line_counter_ports::{
    diagnostics::DiagnosticSink,
    filesystem::{IssueKind, ScanIssue},
};
use line_counter_shared_kernel::{LineCount, Result};
use line_counter_usecase::CountLinesOutput;

use crate::config::Config;

/// Target width of the report table, in characters.
pub const REPORT_WIDTH: usize = 80;

pub const NO_FILES_MESSAGE: &str = "No code files found in the directory.";

pub fn write_banner<W: Write>(out: &mut W, config: &Config) -> io::Result<()> {
    writeln!(out, "Scanning directory: {}", config.root.display())?;
    if config.mode.is_recursive() {
        writeln!(out, "Mode: recursive (all subdirectories)")?;
    } else {
        writeln!(out, "Mode: current directory only")?;
    }
    writeln!(out)
}

/// Writes the sorted table and totals, or the "no files" notice.
pub fn write_report<W: Write>(out: &mut W, output: &CountLinesOutput) -> io::Result<()> {
    if output.is_empty() {
        return writeln!(out, "{NO_FILES_MESSAGE}");
    }

    writeln!(out, "{:<75} {:>10}", "FILE PATH", "LINES")?;
    writeln!(out, "{}", "-".repeat(REPORT_WIDTH))?;

    for record in &output.records {
        let path = record.display_path();
        let fill = "-".repeat(fill_width(&path, record.lines()));
        writeln!(out, "{path} {fill} {}", record.lines())?;
    }

    writeln!(out)?;
    writeln!(out, "TOTAL: {}", output.summary.total_lines)?;
    writeln!(out, "Total files: {}", output.summary.file_count)
}

/// Number of `-` between a path and its count; zero once the row is too long.
pub fn fill_width(path: &str, lines: LineCount) -> usize {
    let digits = lines.to_string().len();
    REPORT_WIDTH.saturating_sub(path.chars().count() + digits)
}

pub fn format_issue(issue: &ScanIssue) -> String {
    match issue.kind {
        IssueKind::Read => format!("Error reading file {}: {}", issue.path.display(), issue.reason),
        IssueKind::Access => format!("Error accessing {}: {}", issue.path.display(), issue.reason),
    }
}

/// Prints each recovered issue as one line on the wrapped writer.
pub struct WriterSink<W> {
    out: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> DiagnosticSink for WriterSink<W> {
    fn report(&mut self, issue: &ScanIssue) -> Result<()> {
        writeln!(self.out, "{}", format_issue(issue))?;
        Ok(())
    }
}
