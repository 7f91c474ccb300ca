//! Candidate file enumeration for sponsor-fix.
//!
//! This module handles:
//! - Recursive directory walking under the fixed source root
//! - Extension filtering for candidate files

pub mod walker;

pub use walker::collect_files;
