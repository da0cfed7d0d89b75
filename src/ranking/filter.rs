//! Range Filter Module
//! Per-parameter inclusive bounds as independent boolean masks. Masks are
//! computed per parameter and ANDed together, so the outcome cannot depend
//! on the order constraints are applied in.

use serde::{Deserialize, Serialize};

/// Inclusive `[min, max]` bounds; an absent side is unconstrained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Bounds {
    pub const UNBOUNDED: Bounds = Bounds {
        min: None,
        max: None,
    };

    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min.is_none_or(|m| value >= m) && self.max.is_none_or(|m| value <= m)
    }
}

/// Mask of rows whose value is present and within bounds. A missing value
/// fails the mask: the row is excluded from operations requiring this
/// parameter, not from the table.
pub fn bounds_mask(values: &[Option<f64>], bounds: Bounds) -> Vec<bool> {
    values
        .iter()
        .map(|v| v.is_some_and(|x| bounds.contains(x)))
        .collect()
}

/// AND per-parameter masks into one row mask.
pub fn and_masks(masks: &[Vec<bool>]) -> Vec<bool> {
    let Some(first) = masks.first() else {
        return Vec::new();
    };
    (0..first.len())
        .map(|i| masks.iter().all(|m| m[i]))
        .collect()
}

/// Indices of rows that survived the conjunction.
pub fn selected_indices(mask: &[bool]) -> Vec<usize> {
    mask.iter()
        .enumerate()
        .filter_map(|(i, keep)| keep.then_some(i))
        .collect()
}
