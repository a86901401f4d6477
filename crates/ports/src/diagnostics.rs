// crates/ports/src/diagnostics.rs
use line_counter_shared_kernel::Result;

use crate::filesystem::ScanIssue;

/// Receives recovered problems as soon as they happen.
pub trait DiagnosticSink {
    fn report(&mut self, issue: &ScanIssue) -> Result<()>;
}
