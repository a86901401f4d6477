use line_counter_domain::{FileRecord, Summary, sort_by_lines};
use line_counter_ports::{
    diagnostics::DiagnosticSink,
    filesystem::{CountedFile, ScanPlan, SourceScanner},
};
use line_counter_shared_kernel::{ApplicationError, Result};
use tracing::{debug, info};

use crate::dto::CountLinesOutput;

pub struct CountLines<'a> {
    scanner: &'a dyn SourceScanner,
}

impl<'a> CountLines<'a> {
    pub fn new(scanner: &'a dyn SourceScanner) -> Self {
        Self { scanner }
    }

    /// Scans `plan`, forwarding recovered issues to `sink` as they occur.
    ///
    /// # Errors
    /// Fails when the scan cannot start or when the sink fails to write.
    pub fn run(&self, plan: &ScanPlan, sink: &mut dyn DiagnosticSink) -> Result<CountLinesOutput> {
        let entries = self.scanner.scan(plan).map_err(|source| ApplicationError::ScanFailed {
            root: plan.root.clone(),
            source: Box::new(source),
        })?;

        let mut records = Vec::new();
        let mut skipped = 0usize;
        for item in entries {
            match item {
                Ok(file) => records.push(port_to_domain_record(file)),
                Err(issue) => {
                    debug!(path = %issue.path.display(), reason = %issue.reason, "skipping entry");
                    skipped += 1;
                    sink.report(&issue)?;
                }
            }
        }

        sort_by_lines(&mut records);
        let summary = Summary::from_records(&records);
        info!(
            files = summary.file_count,
            lines = summary.total_lines.value(),
            skipped,
            "scan finished"
        );

        Ok(CountLinesOutput { records, summary })
    }
}

fn port_to_domain_record(file: CountedFile) -> FileRecord {
    FileRecord::new(file.path, file.lines)
}
