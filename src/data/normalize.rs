//! Numeric Normalizer Module
//! Per-cell cleanup turning locale/currency-formatted text into numbers.
//!
//! The rewrites run in a fixed order; parentheses must become a leading
//! minus before anything sign-sensitive, and whitespace collapse comes last.

use once_cell::sync::Lazy;
use polars::prelude::*;

use crate::error::Result;

/// `(X)` accounting notation for a negative value.
static RE_PARENS: Lazy<regex::Regex> =
    Lazy::new(|| regex::Regex::new(r"^\((.*)\)$").expect("valid regex"));

/// Currency glyphs stripped outright.
static RE_CURRENCY: Lazy<regex::Regex> =
    Lazy::new(|| regex::Regex::new(r"[\u{20B9}$€£¥]").expect("valid regex"));

/// Currency abbreviations as whole tokens, optional trailing dot (`Rs.`).
static RE_CURRENCY_ABBR: Lazy<regex::Regex> =
    Lazy::new(|| regex::Regex::new(r"(?i)\b(?:Rs|INR|USD|EUR|GBP|YEN)\b\.?").expect("valid regex"));

static RE_WHITESPACE: Lazy<regex::Regex> =
    Lazy::new(|| regex::Regex::new(r"\s+").expect("valid regex"));

/// Clean one cell and attempt numeric coercion.
///
/// `"(1,200)"` → `-1200`, `"₹1,000"` → `1000`, `"Rs. 250"` → `250`,
/// `"  12 "` → `12`. A percent sign is stripped but the value is **not**
/// divided by 100: `"50%"` → `50`. Anything that still fails to parse is
/// missing (`None`).
pub fn clean_numeric_token(raw: &str) -> Option<f64> {
    let s = raw.trim().replace('\u{00A0}', "");
    let s = RE_PARENS.replace(&s, "-$1");
    let s = RE_CURRENCY.replace_all(&s, "");
    let s = RE_CURRENCY_ABBR.replace_all(&s, "");
    let s = s.replace(',', "");
    let s = s.replace('%', "");
    let s = RE_WHITESPACE.replace_all(&s, "");
    if s.is_empty() {
        return None;
    }
    // "nan" parses in Rust; treat it as missing like any unparseable cell.
    s.parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Derive the NumericTable: every cell of every column cleaned and coerced
/// independently, columns that end up all-missing dropped. Row order and
/// count match the input table exactly.
pub fn numeric_table(table: &DataFrame) -> Result<DataFrame> {
    let mut numeric_cols: Vec<Column> = Vec::new();
    for col in table.get_columns() {
        let ca = col.str()?;
        let values: Vec<Option<f64>> = (0..ca.len())
            .map(|i| ca.get(i).and_then(clean_numeric_token))
            .collect();
        if values.iter().any(Option::is_some) {
            numeric_cols.push(Column::new(col.name().clone(), values));
        }
    }
    if numeric_cols.is_empty() {
        Ok(DataFrame::empty())
    } else {
        Ok(DataFrame::new(numeric_cols)?)
    }
}
