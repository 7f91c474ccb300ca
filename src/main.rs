use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;

use sponsor_fix::rewrite::{CallPattern, fix_file};
use sponsor_fix::scan::collect_files;

/// Root directory scanned for candidate files.
const SOURCE_ROOT: &str = "src";

/// Extension of candidate files under the source root.
const SOURCE_EXTENSION: &str = "ts";

/// The call whose trailing boolean argument is removed.
const CALLEE: &str = "sponsorService.createResponse";

#[derive(Parser)]
#[command(name = "sponsor-fix")]
#[command(
	author,
	version,
	about = "One-shot source rewriter that drops the trailing boolean flag from sponsorService.createResponse calls"
)]
struct Cli {}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let _cli = Cli::parse();

	let pattern = CallPattern::trailing_bool(CALLEE).context("Failed to compile call pattern")?;

	let files = collect_files(Path::new(SOURCE_ROOT), SOURCE_EXTENSION);

	let mut fixed = 0usize;
	for path in &files {
		match fix_file(path, &pattern) {
			Ok(true) => {
				fixed += 1;
				println!("Fixed: {}", path.display());
			}
			Ok(false) => {}
			// Per-file failures don't abort the run
			Err(e) => eprintln!("Error in {}: {}", path.display(), e),
		}
	}

	println!("\nTotal files fixed: {fixed}");

	Ok(ExitCode::SUCCESS)
}
