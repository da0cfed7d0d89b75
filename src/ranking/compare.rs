//! Single & Dual Comparison Module
//! Unweighted rankings: one parameter sorted by preference, two parameters
//! side by side, and the full scatter series.

use std::cmp::Ordering;

use serde::Serialize;

use crate::data::DetectedTables;
use crate::error::{EngineError, Result};
use crate::ranking::filter::{and_masks, bounds_mask, selected_indices, Bounds};
use crate::ranking::score::{clamp_top_n, Preference};
use crate::theme::DisplayHints;

/// A single-parameter ranking keeps at most this many extreme rows before
/// the caller's top-N is applied.
pub const RANK_POOL_CAP: usize = 20;

/// Value spread (max over min) beyond which a log axis is suggested.
const LOG_SCALE_RATIO: f64 = 1000.0;
/// Guards the ratio against a zero or near-zero minimum.
const LOG_SCALE_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Serialize)]
pub struct RankedValue {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SingleRanking {
    pub parameter: String,
    pub records: Vec<RankedValue>,
    pub hints: DisplayHints,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValueSeries {
    pub parameter: String,
    pub values: Vec<f64>,
}

/// Two parameters over the same surviving rows, for dual-axis rendering.
#[derive(Debug, Clone, Serialize)]
pub struct DualComparison {
    pub labels: Vec<String>,
    pub primary: ValueSeries,
    pub secondary: ValueSeries,
}

/// Rank rows by one parameter. Rows missing the parameter or outside the
/// bounds are excluded, the sorted set is capped at the [`RANK_POOL_CAP`]
/// preference-consistent extremes, then truncated to the requested top-N.
pub fn rank_single(
    tables: &DetectedTables,
    parameter: &str,
    preference: Preference,
    bounds: Bounds,
    top_n: usize,
) -> Result<SingleRanking> {
    tables.ensure_usable()?;
    let values = tables.numeric_values(parameter)?;
    let labels = tables.labels()?;

    let mut records = filtered_sorted(&values, &labels, bounds, preference)?;
    records.truncate(RANK_POOL_CAP);
    records.truncate(clamp_top_n(top_n, records.len()));

    let log_scale = detect_log_scale(&records);
    log::info!("ranked {} records by '{parameter}'", records.len());
    Ok(SingleRanking {
        parameter: parameter.to_string(),
        records,
        hints: DisplayHints {
            log_scale,
            preference,
            horizontal: true,
        },
    })
}

/// The full filtered, preference-sorted series: no pool cap, no top-N.
pub fn scatter_series(
    tables: &DetectedTables,
    parameter: &str,
    preference: Preference,
    bounds: Bounds,
) -> Result<SingleRanking> {
    tables.ensure_usable()?;
    let values = tables.numeric_values(parameter)?;
    let labels = tables.labels()?;
    let records = filtered_sorted(&values, &labels, bounds, preference)?;
    Ok(SingleRanking {
        parameter: parameter.to_string(),
        records,
        hints: DisplayHints {
            log_scale: false,
            preference,
            horizontal: false,
        },
    })
}

/// Compare two parameters over the rows holding both. Both range filters
/// apply; rows are ordered by the first parameter, descending.
pub fn compare_dual(
    tables: &DetectedTables,
    param1: &str,
    bounds1: Bounds,
    param2: &str,
    bounds2: Bounds,
    top_n: usize,
) -> Result<DualComparison> {
    tables.ensure_usable()?;
    let v1 = tables.numeric_values(param1)?;
    let v2 = tables.numeric_values(param2)?;
    let labels = tables.labels()?;

    let mask = and_masks(&[bounds_mask(&v1, bounds1), bounds_mask(&v2, bounds2)]);
    let mut rows: Vec<(String, f64, f64)> = selected_indices(&mask)
        .into_iter()
        .filter_map(|i| match (v1[i], v2[i]) {
            (Some(a), Some(b)) => Some((labels[i].clone(), a, b)),
            _ => None,
        })
        .collect();
    if rows.is_empty() {
        return Err(EngineError::EmptyResultSet);
    }

    rows.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    rows.truncate(clamp_top_n(top_n, rows.len()));

    log::info!(
        "dual comparison '{param1}' vs '{param2}': {} records",
        rows.len()
    );
    Ok(DualComparison {
        labels: rows.iter().map(|r| r.0.clone()).collect(),
        primary: ValueSeries {
            parameter: param1.to_string(),
            values: rows.iter().map(|r| r.1).collect(),
        },
        secondary: ValueSeries {
            parameter: param2.to_string(),
            values: rows.iter().map(|r| r.2).collect(),
        },
    })
}

/// Filter by presence and bounds, then sort preference-consistently
/// (ascending when lower is better).
fn filtered_sorted(
    values: &[Option<f64>],
    labels: &[String],
    bounds: Bounds,
    preference: Preference,
) -> Result<Vec<RankedValue>> {
    let mask = bounds_mask(values, bounds);
    let mut records: Vec<RankedValue> = selected_indices(&mask)
        .into_iter()
        .filter_map(|i| {
            values[i].map(|value| RankedValue {
                label: labels[i].clone(),
                value,
            })
        })
        .collect();
    if records.is_empty() {
        return Err(EngineError::EmptyResultSet);
    }
    records.sort_by(|a, b| {
        let ord = a.value.partial_cmp(&b.value).unwrap_or(Ordering::Equal);
        match preference {
            Preference::Lower => ord,
            Preference::Higher => ord.reverse(),
        }
    });
    Ok(records)
}

/// Advisory only: the data itself is never transformed.
fn detect_log_scale(records: &[RankedValue]) -> bool {
    if records.is_empty() {
        return false;
    }
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for r in records {
        min = min.min(r.value);
        max = max.max(r.value);
    }
    max / min.max(LOG_SCALE_EPSILON) > LOG_SCALE_RATIO
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{Column, DataFrame};

    fn tables_from(labels: &[&str], values: &[Option<f64>]) -> DetectedTables {
        tables_from2(labels, "Price", values, None)
    }

    fn tables_from2(
        labels: &[&str],
        name1: &str,
        values1: &[Option<f64>],
        second: Option<(&str, &[Option<f64>])>,
    ) -> DetectedTables {
        let label_cells: Vec<Option<String>> =
            labels.iter().map(|s| Some((*s).to_string())).collect();
        let text1: Vec<Option<String>> = values1.iter().map(|v| v.map(|x| x.to_string())).collect();
        let mut table_cols = vec![
            Column::new("Name".into(), label_cells),
            Column::new(name1.into(), text1),
        ];
        let mut numeric_cols = vec![Column::new(name1.into(), values1.to_vec())];
        if let Some((name2, values2)) = second {
            let text2: Vec<Option<String>> =
                values2.iter().map(|v| v.map(|x| x.to_string())).collect();
            table_cols.push(Column::new(name2.into(), text2));
            numeric_cols.push(Column::new(name2.into(), values2.to_vec()));
        }
        DetectedTables {
            table: DataFrame::new(table_cols).unwrap(),
            numeric: DataFrame::new(numeric_cols).unwrap(),
        }
    }

    #[test]
    fn lower_preference_returns_smallest_ascending() {
        let tables = tables_from(
            &["E", "A", "I", "C", "G"],
            &[Some(5.0), Some(1.0), Some(9.0), Some(3.0), Some(7.0)],
        );
        let ranking =
            rank_single(&tables, "Price", Preference::Lower, Bounds::UNBOUNDED, 3).unwrap();
        let labels: Vec<&str> = ranking.records.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "C", "E"]);
    }

    #[test]
    fn pool_is_capped_at_twenty_extremes() {
        let labels: Vec<String> = (0..25).map(|i| format!("r{i}")).collect();
        let label_refs: Vec<&str> = labels.iter().map(String::as_str).collect();
        let values: Vec<Option<f64>> = (0..25).map(|i| Some(i as f64)).collect();
        let tables = tables_from(&label_refs, &values);

        let ranking =
            rank_single(&tables, "Price", Preference::Higher, Bounds::UNBOUNDED, 25).unwrap();
        assert_eq!(ranking.records.len(), RANK_POOL_CAP);
        assert_eq!(ranking.records[0].value, 24.0);
        // The five smallest never make the pool.
        assert!(ranking.records.iter().all(|r| r.value >= 5.0));
    }

    #[test]
    fn range_filter_is_inclusive_and_missing_rows_drop() {
        let tables = tables_from(
            &["A", "B", "C", "D"],
            &[Some(10.0), Some(20.0), None, Some(30.0)],
        );
        let ranking = rank_single(
            &tables,
            "Price",
            Preference::Lower,
            Bounds::new(Some(10.0), Some(20.0)),
            10,
        )
        .unwrap();
        let labels: Vec<&str> = ranking.records.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "B"]);
    }

    #[test]
    fn empty_result_set_is_signaled() {
        let tables = tables_from(&["A"], &[Some(10.0)]);
        assert!(matches!(
            rank_single(
                &tables,
                "Price",
                Preference::Lower,
                Bounds::new(Some(100.0), None),
                10
            ),
            Err(EngineError::EmptyResultSet)
        ));
    }

    #[test]
    fn wide_spread_suggests_log_scale() {
        let tables = tables_from(&["A", "B"], &[Some(1.0), Some(2000.0)]);
        let ranking =
            rank_single(&tables, "Price", Preference::Higher, Bounds::UNBOUNDED, 10).unwrap();
        assert!(ranking.hints.log_scale);

        let tables = tables_from(&["A", "B"], &[Some(1.0), Some(500.0)]);
        let ranking =
            rank_single(&tables, "Price", Preference::Higher, Bounds::UNBOUNDED, 10).unwrap();
        assert!(!ranking.hints.log_scale);
    }

    #[test]
    fn scatter_keeps_every_surviving_row() {
        let labels: Vec<String> = (0..25).map(|i| format!("r{i}")).collect();
        let label_refs: Vec<&str> = labels.iter().map(String::as_str).collect();
        let values: Vec<Option<f64>> = (0..25).map(|i| Some(i as f64)).collect();
        let tables = tables_from(&label_refs, &values);

        let series =
            scatter_series(&tables, "Price", Preference::Lower, Bounds::UNBOUNDED).unwrap();
        assert_eq!(series.records.len(), 25);
        assert_eq!(series.records[0].value, 0.0);
        assert!(!series.hints.horizontal);
    }

    #[test]
    fn dual_drops_rows_missing_either_and_sorts_by_primary() {
        let tables = tables_from2(
            &["A", "B", "C", "D"],
            "Price",
            &[Some(10.0), Some(30.0), Some(20.0), None],
            Some(("Rating", &[Some(4.0), None, Some(3.0), Some(5.0)])),
        );
        let dual = compare_dual(
            &tables,
            "Price",
            Bounds::UNBOUNDED,
            "Rating",
            Bounds::UNBOUNDED,
            10,
        )
        .unwrap();
        // B lacks Rating, D lacks Price; C outranks A on Price.
        assert_eq!(dual.labels, vec!["C", "A"]);
        assert_eq!(dual.primary.values, vec![20.0, 10.0]);
        assert_eq!(dual.secondary.values, vec![3.0, 4.0]);
    }

    #[test]
    fn unknown_parameter_is_an_error() {
        let tables = tables_from(&["A"], &[Some(1.0)]);
        assert!(matches!(
            rank_single(&tables, "Rating", Preference::Lower, Bounds::UNBOUNDED, 5),
            Err(EngineError::ParameterNotFound(p)) if p == "Rating"
        ));
    }
}
