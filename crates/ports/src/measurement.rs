// crates/ports/src/measurement.rs
use std::{io, path::Path};

use line_counter_shared_kernel::LineCount;

/// Port for counting the lines of one file.
pub trait LineCounter {
    fn count_lines(&self, path: &Path) -> io::Result<LineCount>;
}
