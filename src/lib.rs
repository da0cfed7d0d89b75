//! Rankify - Tabular Normalization & Multi-Criteria Ranking Engine
//!
//! Turns loosely-structured tabular files (arbitrary header placement,
//! locale-formatted numbers, currency symbols, stray whitespace) into a
//! clean numeric matrix, then ranks records by one parameter, two
//! parameters side by side, or a weighted multi-parameter composite score.
//!
//! The engine is synchronous and holds no shared state: one input in, one
//! ranking out. Rendering, persistence and upload handling are external
//! collaborators; they get back ordered labels, numeric series and advisory
//! display hints, never an image.

pub mod data;
pub mod error;
pub mod ranking;
pub mod theme;

pub use data::{detect_valid_data, load_raw_grid, load_tables, DetectedTables};
pub use error::{EngineError, Result};
pub use ranking::{
    compare_dual, rank_single, rank_weighted, scatter_series, Bounds, Parameter, Preference,
};
pub use theme::{DisplayHints, Theme};
