//! Data pipeline: raw grid loading, header detection, numeric normalization.

pub mod detect;
pub mod loader;
pub mod normalize;

pub use detect::{detect_valid_data, DetectedTables};
pub use loader::{load_raw_grid, load_tables};
pub use normalize::{clean_numeric_token, numeric_table};
