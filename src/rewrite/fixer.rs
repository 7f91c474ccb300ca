use crate::error::{FixError, Result};
use crate::rewrite::pattern::CallPattern;
use std::fs;
use std::path::Path;

/// Apply a call pattern to a single file, rewriting it in place.
///
/// Reads the full file content, applies the pattern, and writes the file
/// back only when the rewritten content differs. The file is either left
/// byte-for-byte unchanged or replaced in full. Returns whether the file
/// was changed.
pub fn fix_file(path: &Path, pattern: &CallPattern) -> Result<bool> {
	let content = fs::read_to_string(path).map_err(|source| FixError::FileRead {
		path: path.to_path_buf(),
		source,
	})?;

	let rewritten = pattern.rewrite(&content);

	if rewritten == content {
		return Ok(false);
	}

	fs::write(path, rewritten.as_bytes()).map_err(|source| FixError::FileWrite {
		path: path.to_path_buf(),
		source,
	})?;

	Ok(true)
}
