//! Scaling & Scoring Module
//! The linear 0–10 scaling core shared by the weighted ranking, plus weight
//! normalization and top-N clamping.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Which end of a parameter's scale is desirable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    Lower,
    Higher,
}

impl std::str::FromStr for Preference {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lower" => Ok(Preference::Lower),
            "higher" => Ok(Preference::Higher),
            other => Err(format!(
                "unknown preference '{other}' (expected 'lower' or 'higher')"
            )),
        }
    }
}

/// The window a parameter's values are rescaled against. Fixed once per
/// ranking request and threaded through every scoring pass; never re-derived
/// from a truncated subset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LocalRange {
    pub min: f64,
    pub max: f64,
}

/// Linearly map `x` onto [0, 1] within `range`, flipped when lower values
/// are better. A degenerate range maps everything to 0 rather than dividing
/// by zero. Values outside the range land outside [0, 1] unclamped; that
/// keeps the scale linear across the whole result set.
pub fn scale_value(x: f64, range: LocalRange, reverse: bool) -> f64 {
    let span = range.max - range.min;
    if span == 0.0 {
        return 0.0;
    }
    let normalized = (x - range.min) / span;
    if reverse {
        1.0 - normalized
    } else {
        normalized
    }
}

/// One parameter's share of a record's composite score, on the 0–10 scale
/// and already multiplied by the parameter's weight fraction.
pub fn contribution(x: f64, range: LocalRange, preference: Preference, weight_fraction: f64) -> f64 {
    scale_value(x, range, preference == Preference::Lower) * 10.0 * weight_fraction
}

/// Normalize raw weights to sum to 1. A zero weight is legal (the parameter
/// still filters but contributes nothing); a non-positive sum is not.
pub fn normalize_weights(weights: &[f64]) -> Result<Vec<f64>> {
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return Err(EngineError::InvalidWeights);
    }
    Ok(weights.iter().map(|w| w / total).collect())
}

/// Clamp a requested top-N to `1..=available`.
pub fn clamp_top_n(requested: usize, available: usize) -> usize {
    requested.max(1).min(available)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RANGE: LocalRange = LocalRange { min: 0.0, max: 40.0 };

    #[test]
    fn scale_is_linear_within_range() {
        assert_eq!(scale_value(0.0, RANGE, false), 0.0);
        assert_eq!(scale_value(40.0, RANGE, false), 1.0);
        assert_eq!(scale_value(10.0, RANGE, false), 0.25);
    }

    #[test]
    fn out_of_range_values_are_not_clamped() {
        assert_eq!(scale_value(50.0, RANGE, false), 1.25);
        assert_eq!(scale_value(-10.0, RANGE, false), -0.25);
    }

    #[test]
    fn reversed_contributions_are_complementary() {
        let weight = 0.3;
        for x in [0.0, 7.5, 19.0, 40.0] {
            let lower = contribution(x, RANGE, Preference::Lower, weight);
            let higher = contribution(x, RANGE, Preference::Higher, weight);
            assert!((lower + higher - 10.0 * weight).abs() < 1e-12);
        }
    }

    #[test]
    fn degenerate_range_contributes_zero() {
        let flat = LocalRange { min: 5.0, max: 5.0 };
        assert_eq!(contribution(5.0, flat, Preference::Higher, 1.0), 0.0);
        assert_eq!(contribution(5.0, flat, Preference::Lower, 1.0), 0.0);
    }

    #[test]
    fn weights_normalize_to_unit_sum() {
        let normalized = normalize_weights(&[2.0, 2.0, 1.0]).unwrap();
        assert_eq!(normalized, vec![0.4, 0.4, 0.2]);
        assert!((normalized.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn non_positive_weight_sums_are_rejected() {
        assert!(matches!(
            normalize_weights(&[0.0, 0.0, 0.0]),
            Err(EngineError::InvalidWeights)
        ));
        assert!(matches!(
            normalize_weights(&[-1.0, 2.0]),
            Err(EngineError::InvalidWeights)
        ));
        assert!(matches!(
            normalize_weights(&[]),
            Err(EngineError::InvalidWeights)
        ));
    }

    #[test]
    fn top_n_clamps_to_available_rows() {
        assert_eq!(clamp_top_n(10, 4), 4);
        assert_eq!(clamp_top_n(0, 4), 1);
        assert_eq!(clamp_top_n(3, 4), 3);
    }

    #[test]
    fn preference_parses_case_insensitively() {
        assert_eq!("LOWER".parse::<Preference>(), Ok(Preference::Lower));
        assert_eq!("higher".parse::<Preference>(), Ok(Preference::Higher));
        assert!("best".parse::<Preference>().is_err());
    }
}
