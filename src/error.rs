use std::path::PathBuf;

/// Library-level structured errors for sponsor-fix.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum FixError {
	#[error("Failed to read file: {path}")]
	FileRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write file: {path}")]
	FileWrite {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Invalid call pattern for callee: {callee}")]
	InvalidPattern {
		callee: String,
		#[source]
		source: regex::Error,
	},
}

/// Result type alias using FixError.
pub type Result<T> = std::result::Result<T, FixError>;
