use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively collect regular files under `root` with the given extension.
///
/// Entries are visited in sorted order at each directory level so results
/// are stable across runs. A missing root yields an empty list; unreadable
/// entries are logged to stderr and skipped.
pub fn collect_files(root: &Path, extension: &str) -> Vec<PathBuf> {
	let mut files = Vec::new();

	if !root.exists() {
		return files;
	}

	for result in WalkDir::new(root).sort_by_file_name() {
		match result {
			Ok(entry) => {
				if !entry.file_type().is_file() {
					continue;
				}

				let path = entry.path();
				if path.extension().and_then(|ext| ext.to_str()) == Some(extension) {
					files.push(path.to_path_buf());
				}
			}
			Err(e) => eprintln!("Warning: skipping unreadable entry: {}", e),
		}
	}

	files
}
