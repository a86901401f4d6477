// crates/infra/src/measurement/newline.rs
use std::{
    io::{self, BufRead},
    path::Path,
};

use line_counter_ports::measurement::LineCounter;
use line_counter_shared_kernel::LineCount;

use crate::persistence::FileReader;

/// 改行区切りで行数を数える
///
/// Every `\n` ends a line; a final line without a terminator still counts.
/// `\r` alone is not a terminator and there is no line-length limit.
#[derive(Debug, Default, Clone, Copy)]
pub struct NewlineCounter;

impl NewlineCounter {
    pub fn new() -> Self {
        Self
    }

    /// Counts lines from any buffered source.
    pub fn count_reader<R: BufRead>(mut reader: R) -> io::Result<LineCount> {
        let mut newlines = 0usize;
        let mut last_byte = None;

        loop {
            let chunk = match reader.fill_buf() {
                Ok([]) => break,
                Ok(chunk) => chunk,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            };
            newlines += bytecount::count(chunk, b'\n');
            last_byte = chunk.last().copied();
            let consumed = chunk.len();
            reader.consume(consumed);
        }

        let unterminated = usize::from(last_byte.is_some_and(|b| b != b'\n'));
        Ok(LineCount::new(newlines + unterminated))
    }
}

impl LineCounter for NewlineCounter {
    fn count_lines(&self, path: &Path) -> io::Result<LineCount> {
        let reader = FileReader::open_buffered(path)?;
        Self::count_reader(reader)
    }
}
