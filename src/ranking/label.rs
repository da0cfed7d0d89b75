//! Label Column Inference Module
//! Picks the column that identifies each record.

use polars::prelude::DataFrame;

use crate::error::{EngineError, Result};

/// Column-name fragments that mark an identifier column.
const LABEL_KEYWORDS: [&str; 5] = ["name", "company", "seller", "brand", "product"];

/// Choose the label column: first column whose name contains a keyword
/// (case-insensitive), else the first non-numeric column, else the first
/// column. Fails only when the table has no columns at all.
pub fn infer_label_column(table: &DataFrame, numeric_cols: &[String]) -> Result<String> {
    let names: Vec<String> = table
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    if names.is_empty() {
        return Err(EngineError::NoLabelColumn);
    }

    for name in &names {
        let lower = name.to_lowercase();
        if LABEL_KEYWORDS.iter().any(|k| lower.contains(k)) {
            return Ok(name.clone());
        }
    }
    if let Some(name) = names.iter().find(|n| !numeric_cols.contains(n)) {
        return Ok(name.clone());
    }
    Ok(names[0].clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    fn table(names: &[&str]) -> DataFrame {
        let columns: Vec<Column> = names
            .iter()
            .map(|n| Column::new((*n).into(), vec![Some("x".to_string())]))
            .collect();
        DataFrame::new(columns).unwrap()
    }

    #[test]
    fn keyword_match_wins_in_column_order() {
        let t = table(&["Sr No", "Seller Details", "Brand", "Price"]);
        let col = infer_label_column(&t, &["Price".to_string()]).unwrap();
        assert_eq!(col, "Seller Details");
    }

    #[test]
    fn keyword_match_is_case_insensitive() {
        let t = table(&["PRODUCT_ID", "Cost"]);
        let col = infer_label_column(&t, &["Cost".to_string()]).unwrap();
        assert_eq!(col, "PRODUCT_ID");
    }

    #[test]
    fn first_non_numeric_column_is_the_fallback() {
        let t = table(&["Price", "Region", "Rating"]);
        let numeric = vec!["Price".to_string(), "Rating".to_string()];
        assert_eq!(infer_label_column(&t, &numeric).unwrap(), "Region");
    }

    #[test]
    fn all_numeric_falls_back_to_first_column() {
        let t = table(&["Price", "Rating"]);
        let numeric = vec!["Price".to_string(), "Rating".to_string()];
        assert_eq!(infer_label_column(&t, &numeric).unwrap(), "Price");
    }

    #[test]
    fn empty_table_has_no_label_column() {
        let t = DataFrame::empty();
        assert!(matches!(
            infer_label_column(&t, &[]),
            Err(EngineError::NoLabelColumn)
        ));
    }
}
