//! Header Detector Module
//! Scans a raw grid for the header row and derives the typed Table plus the
//! row-aligned NumericTable.
//!
//! The header row is the first row with at least two non-empty cells; rows
//! above it are discarded. Polars keeps the grid rectangular, so "padding
//! short headers" shows up here as empty header cells, which get synthetic
//! `col_<index>` names. Duplicate header names get a `_<n>` suffix (column
//! names must be unique).

use std::collections::HashSet;

use polars::prelude::*;

use crate::data::normalize::numeric_table;
use crate::error::{EngineError, Result};
use crate::ranking::infer_label_column;

/// Minimum non-empty cells for a row to qualify as the header.
const HEADER_MIN_FILLED: usize = 2;

/// Header-assigned table plus its numeric projection.
///
/// `numeric` has the same row order and count as `table`; its columns are
/// the subset whose cleaned cells parsed to at least one number. Cells that
/// failed to parse are null there, never a row drop.
#[derive(Debug, Clone)]
pub struct DetectedTables {
    pub table: DataFrame,
    pub numeric: DataFrame,
}

impl DetectedTables {
    /// Both tables empty: no header row was found.
    pub fn empty() -> Self {
        Self {
            table: DataFrame::empty(),
            numeric: DataFrame::empty(),
        }
    }

    pub fn has_data(&self) -> bool {
        self.table.height() > 0 && self.numeric.width() > 0
    }

    /// Ranking entry points call this first; "no usable data" becomes an
    /// error there rather than a crash here.
    pub fn ensure_usable(&self) -> Result<()> {
        if self.has_data() {
            Ok(())
        } else {
            Err(EngineError::NoHeaderFound)
        }
    }

    /// Numeric column names in table order, e.g. to populate a dropdown.
    pub fn numeric_headers(&self) -> Vec<String> {
        self.numeric
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// One cleaned value per row for a numeric column.
    pub fn numeric_values(&self, parameter: &str) -> Result<Vec<Option<f64>>> {
        if !self
            .numeric
            .get_column_names()
            .iter()
            .any(|c| c.as_str() == parameter)
        {
            return Err(EngineError::ParameterNotFound(parameter.to_string()));
        }
        let ca = self.numeric.column(parameter)?.f64()?;
        Ok((0..ca.len()).map(|i| ca.get(i)).collect())
    }

    /// One label per row, taken from the inferred label column.
    pub fn labels(&self) -> Result<Vec<String>> {
        let label_col = infer_label_column(&self.table, &self.numeric_headers())?;
        let ca = self.table.column(&label_col)?.str()?;
        Ok((0..ca.len())
            .map(|i| ca.get(i).map(|s| s.trim().to_string()).unwrap_or_default())
            .collect())
    }
}

/// Find the header row and split the grid into Table + NumericTable.
///
/// Returns empty tables when no row meets the threshold; callers treat that
/// as "no usable data", not a crash.
pub fn detect_valid_data(raw: &DataFrame) -> Result<DetectedTables> {
    let columns: Vec<&StringChunked> = raw
        .get_columns()
        .iter()
        .map(|c| c.str())
        .collect::<PolarsResult<_>>()?;
    let height = raw.height();

    for row in 0..height {
        let filled = columns
            .iter()
            .filter(|ca| ca.get(row).is_some_and(|s| !s.trim().is_empty()))
            .count();
        if filled < HEADER_MIN_FILLED {
            continue;
        }

        let names = header_names(&columns, row);
        let mut kept: Vec<Column> = Vec::with_capacity(columns.len());
        for (ca, name) in columns.iter().zip(names) {
            let cells: Vec<Option<String>> = (row + 1..height)
                .map(|i| ca.get(i).map(str::to_string))
                .collect();
            // Columns empty in every data row are dropped outright.
            let has_content = cells
                .iter()
                .any(|c| c.as_deref().is_some_and(|s| !s.trim().is_empty()));
            if has_content {
                kept.push(Column::new(name.into(), cells));
            }
        }

        let table = if kept.is_empty() {
            DataFrame::empty()
        } else {
            DataFrame::new(kept)?
        };
        let numeric = numeric_table(&table)?;
        log::debug!(
            "header at row {row}: {} data rows, {} columns ({} numeric)",
            table.height(),
            table.width(),
            numeric.width()
        );
        return Ok(DetectedTables { table, numeric });
    }

    log::debug!("no row with >={HEADER_MIN_FILLED} non-empty cells");
    Ok(DetectedTables::empty())
}

/// Header names for every grid column: the trimmed cell text, `col_<index>`
/// where the cell is empty, deduplicated with a numeric suffix.
fn header_names(columns: &[&StringChunked], row: usize) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    columns
        .iter()
        .enumerate()
        .map(|(idx, ca)| {
            let base = ca
                .get(row)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| format!("col_{idx}"));
            let mut name = base.clone();
            let mut suffix = 1usize;
            while !seen.insert(name.clone()) {
                suffix += 1;
                name = format!("{base}_{suffix}");
            }
            name
        })
        .collect()
}
