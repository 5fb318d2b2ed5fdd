use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extensions treated as source code, compared case-insensitively.
pub const CODE_EXTENSIONS: &[&str] = &[
    "py", "java", "c", "cpp", "h", "hpp", "js", "ts",
    "html", "css", "php", "rb", "go", "rs", "sh", "bat",
    "pl", "swift", "kt", "cs", "json", "xml", "sql", "asm",
];

pub fn is_code_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| CODE_EXTENSIONS.iter().any(|c| c.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// Recursively collect code files under `root`, sorted.
pub fn find_code_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| match e {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!(error = %err, "directory entry skipped");
                None
            }
        })
        .filter(|e| e.file_type().is_file() && is_code_file(e.path()))
        .map(|e| e.into_path())
        .collect();
    files.sort();
    files
}
