// crates/domain/src/classifier.rs
use std::{collections::HashSet, sync::LazyLock};

/// 集計対象とみなす拡張子（先頭の `.` を含む小文字表記）
pub const RECOGNIZED_EXTENSIONS: [&str; 46] = [
    ".go", ".js", ".ts", ".py", ".java", ".c", ".cpp", ".h", ".hpp", ".cs", ".php", ".rb", ".rs", ".swift",
    ".kt", ".scala", ".r", ".m", ".pl", ".sh", ".bash", ".zsh", ".fish", ".ps1", ".html", ".htm", ".css",
    ".scss", ".sass", ".less", ".vue", ".jsx", ".tsx", ".xml", ".json", ".yaml", ".yml", ".toml", ".ini",
    ".cfg", ".conf", ".sql", ".lua", ".vim", ".md", ".txt",
];

static EXTENSION_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| RECOGNIZED_EXTENSIONS.iter().copied().collect());

/// Returns the extension of `file_name`, leading dot included.
///
/// The extension starts at the last `.` of the name, so `.json` yields
/// `.json` and `archive.tar.gz` yields `.gz`. Names without a dot have none.
pub fn extension_of(file_name: &str) -> Option<&str> {
    file_name.rfind('.').map(|idx| &file_name[idx..])
}

/// Whether `file_name` carries one of [`RECOGNIZED_EXTENSIONS`], ignoring case.
pub fn is_code_file(file_name: &str) -> bool {
    extension_of(file_name).is_some_and(|ext| EXTENSION_SET.contains(ext.to_lowercase().as_str()))
}
