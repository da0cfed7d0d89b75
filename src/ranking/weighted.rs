//! Weighted Scoring Module
//! Multi-parameter composite scores: each parameter scaled onto 0–10 within
//! a fixed local range, weighted, summed, band-filtered, ranked.

use std::cmp::Ordering;

use serde::Serialize;

use crate::data::DetectedTables;
use crate::error::{EngineError, Result};
use crate::ranking::filter::{and_masks, bounds_mask, selected_indices, Bounds};
use crate::ranking::score::{clamp_top_n, contribution, normalize_weights, LocalRange};
use crate::ranking::Parameter;

/// Front-end contract carried over from the original form: at most five
/// parameter blocks. The math itself has no limit, so enforcement stays
/// with the caller.
pub const WEIGHTED_PARAM_LIMIT: usize = 5;

/// One ranked record with its stacked per-parameter breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredRecord {
    pub label: String,
    /// 0–10-scale contributions, weight already applied; parallel to
    /// [`WeightedRanking::parameters`].
    pub contributions: Vec<f64>,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeightedRanking {
    pub parameters: Vec<String>,
    /// Normalized weights (sum 1), parallel to `parameters`.
    pub weights: Vec<f64>,
    /// Sorted descending by total score.
    pub records: Vec<ScoredRecord>,
}

/// Rank rows by a weighted composite of up to five parameters.
///
/// Rows missing any parameter are dropped; each parameter's inclusive range
/// filters independently. The scaling window per parameter is the supplied
/// bound, else the observed min/max of the filtered set — fixed before
/// scoring and reused verbatim for the post-truncation breakdown.
/// `score_band` filters composite totals with the same inclusive semantics
/// as the per-parameter ranges.
pub fn rank_weighted(
    tables: &DetectedTables,
    params: &[Parameter],
    top_n: usize,
    score_band: Bounds,
) -> Result<WeightedRanking> {
    tables.ensure_usable()?;
    if params.len() > WEIGHTED_PARAM_LIMIT {
        log::warn!(
            "{} parameters exceeds the usual limit of {WEIGHTED_PARAM_LIMIT}",
            params.len()
        );
    }

    let columns: Vec<Vec<Option<f64>>> = params
        .iter()
        .map(|p| tables.numeric_values(&p.name))
        .collect::<Result<_>>()?;
    let labels = tables.labels()?;

    let masks: Vec<Vec<bool>> = columns
        .iter()
        .zip(params)
        .map(|(values, p)| bounds_mask(values, p.bounds))
        .collect();
    let rows = selected_indices(&and_masks(&masks));
    if rows.is_empty() {
        return Err(EngineError::EmptyResultSet);
    }

    let raw_weights: Vec<f64> = params.iter().map(|p| p.weight).collect();
    let weights = normalize_weights(&raw_weights)?;

    // Scaling windows are fixed here, once, against the filtered set. The
    // breakdown pass below must see these exact values, not ranges
    // re-derived from the truncated subset.
    let ranges: Vec<LocalRange> = params
        .iter()
        .zip(&columns)
        .map(|(p, values)| {
            let mut min = f64::INFINITY;
            let mut max = f64::NEG_INFINITY;
            for &i in &rows {
                if let Some(v) = values[i] {
                    min = min.min(v);
                    max = max.max(v);
                }
            }
            LocalRange {
                min: p.bounds.min.unwrap_or(min),
                max: p.bounds.max.unwrap_or(max),
            }
        })
        .collect();

    let row_contributions = |i: usize| -> Vec<f64> {
        columns
            .iter()
            .zip(&ranges)
            .zip(params)
            .zip(&weights)
            .filter_map(|(((values, range), p), w)| {
                values[i].map(|v| contribution(v, *range, p.preference, *w))
            })
            .collect()
    };

    let mut scored: Vec<(usize, f64)> = rows
        .iter()
        .map(|&i| (i, row_contributions(i).iter().sum()))
        .collect();
    scored.retain(|(_, total)| score_band.contains(*total));
    if scored.is_empty() {
        return Err(EngineError::EmptyResultSet);
    }

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    scored.truncate(clamp_top_n(top_n, scored.len()));

    // Stacked breakdown for the surviving rows, same ranges as pass one.
    let records: Vec<ScoredRecord> = scored
        .iter()
        .map(|&(i, total)| ScoredRecord {
            label: labels[i].clone(),
            contributions: row_contributions(i),
            total,
        })
        .collect();

    log::info!(
        "weighted ranking over {} parameters: {} records",
        params.len(),
        records.len()
    );
    Ok(WeightedRanking {
        parameters: params.iter().map(|p| p.name.clone()).collect(),
        weights,
        records,
    })
}
