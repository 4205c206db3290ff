//! Common utilities for formatters.
//!
//! Responsibilities:
//! - Route formatted output to stdout or a file.
//! - Atomic file writing.
//! - Shared helpers for tabular formats.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::formatters::OutputFormat;

/// Placeholder for empty cells in table output.
pub const DEFAULT_MISSING_VALUE: &str = "N/A";

/// Join values for a single table or CSV cell.
pub fn join_cell(values: &[String], sep: &str) -> String {
    if values.is_empty() {
        DEFAULT_MISSING_VALUE.to_string()
    } else {
        values.join(sep)
    }
}

/// Write formatted output to file or stdout.
///
/// Stdout output always ends with a newline.
pub fn output_result(output: &str, format: OutputFormat, output_file: Option<&PathBuf>) -> Result<()> {
    if let Some(path) = output_file {
        write_to_file(output, path)
            .with_context(|| format!("Failed to write output to {}", path.display()))?;
        eprintln!(
            "Results written to {} ({:?} format)",
            path.display(),
            format
        );
    } else if output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
    Ok(())
}

/// Write formatted output to a file atomically.
///
/// Creates parent directories if needed, writes to temp file then renames.
pub fn write_to_file(content: &str, path: &Path) -> Result<()> {
    // A bare file name has an empty parent; use the current directory.
    let parent_dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    if parent_dir != Path::new(".") {
        fs::create_dir_all(parent_dir)
            .with_context(|| format!("Failed to create directory: {}", parent_dir.display()))?;
    }

    let mut temp_file = NamedTempFile::new_in(parent_dir)
        .with_context(|| format!("Failed to create temp file in: {}", parent_dir.display()))?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temp file")?;
    temp_file.flush().context("Failed to flush temp file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(())
}
