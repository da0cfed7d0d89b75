//! Ranking engine: label inference, range filtering, scaling and scoring.

pub mod compare;
pub mod filter;
pub mod label;
pub mod score;
pub mod weighted;

use serde::{Deserialize, Serialize};

pub use compare::{compare_dual, rank_single, scatter_series};
pub use compare::{DualComparison, RankedValue, SingleRanking, ValueSeries};
pub use filter::{and_masks, bounds_mask, selected_indices, Bounds};
pub use label::infer_label_column;
pub use score::{clamp_top_n, contribution, normalize_weights, scale_value};
pub use score::{LocalRange, Preference};
pub use weighted::{rank_weighted, ScoredRecord, WeightedRanking};

/// Default result size when the caller does not ask for one.
pub const DEFAULT_TOP_N: usize = 10;

/// One ranking criterion: a numeric column plus how to interpret it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    /// Relative weight, >= 0. Zero is legal and contributes nothing.
    pub weight: f64,
    pub preference: Preference,
    /// Inclusive range filter; also the scaling window where supplied.
    pub bounds: Bounds,
}

impl Parameter {
    pub fn new(name: impl Into<String>, weight: f64, preference: Preference) -> Self {
        Self {
            name: name.into(),
            weight,
            preference,
            bounds: Bounds::UNBOUNDED,
        }
    }

    pub fn with_bounds(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.bounds = Bounds::new(min, max);
        self
    }
}
