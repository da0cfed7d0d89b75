//! Raw Loader Module
//! Reads delimited-text files into an untyped all-string grid using Polars.
//! No header is assumed; header detection happens downstream.
//!
//! The grid width is the widest row in the file, not the first row: a
//! narrow title line above the real table must not shrink the grid, so the
//! file is pre-scanned for its maximum field count and the reader gets an
//! explicit all-String schema of that width. Short rows are null-padded.

use std::path::Path;
use std::sync::Arc;

use polars::prelude::*;

use crate::data::detect::{detect_valid_data, DetectedTables};
use crate::error::{EngineError, Result};

/// Load a file into a raw grid: every cell a string (or null), no schema
/// inference, no header. Dispatch by extension; only delimited text is
/// handled here — spreadsheet decoding belongs to the file-loading
/// collaborator.
pub fn load_raw_grid(path: &Path) -> Result<DataFrame> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let separator = match ext.as_str() {
        "csv" => b',',
        "tsv" => b'\t',
        other => return Err(EngineError::UnsupportedFormat(other.to_string())),
    };

    let bytes = std::fs::read(path)?;
    let width = max_field_count(&bytes, separator);
    let schema = Schema::from_iter(
        (0..width).map(|i| Field::new(format!("column_{}", i + 1).into(), DataType::String)),
    );

    let df = LazyCsvReader::new(path)
        .with_has_header(false)
        .with_separator(separator)
        .with_schema(Some(Arc::new(schema)))
        .with_ignore_errors(true)
        .with_truncate_ragged_lines(true)
        .finish()?
        .collect()?;

    log::debug!(
        "loaded raw grid {}x{} from {}",
        df.height(),
        df.width(),
        path.display()
    );
    Ok(df)
}

/// Convenience entry point: raw grid plus header detection in one call.
pub fn load_tables(path: &Path) -> Result<DetectedTables> {
    let raw = load_raw_grid(path)?;
    detect_valid_data(&raw)
}

/// Widest row of a delimited file, counting separators outside quoted
/// fields. Byte-level so the scan is encoding-agnostic.
fn max_field_count(bytes: &[u8], separator: u8) -> usize {
    let mut max = 1usize;
    let mut fields = 1usize;
    let mut in_quotes = false;
    for &b in bytes {
        if b == b'"' {
            in_quotes = !in_quotes;
        } else if b == b'\n' && !in_quotes {
            max = max.max(fields);
            fields = 1;
        } else if b == separator && !in_quotes {
            fields += 1;
        }
    }
    max.max(fields)
}
