//! Call-site matching and rewriting for sponsor-fix.
//!
//! This module handles:
//! - The compiled call-site pattern for the two-argument boolean form
//! - Per-file rewriting with write-back only on change

pub mod fixer;
pub mod pattern;

pub use fixer::fix_file;
pub use pattern::CallPattern;
