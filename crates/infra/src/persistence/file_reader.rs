use std::{
    fs::File,
    io::BufReader,
    path::Path,
};

/// Buffer size used when streaming files for counting.
pub const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    pub fn open(path: &Path) -> std::io::Result<File> {
        File::open(path)
    }

    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> std::io::Result<BufReader<File>> {
        Self::open(path).map(|file| BufReader::with_capacity(READ_BUFFER_SIZE, file))
    }
}
