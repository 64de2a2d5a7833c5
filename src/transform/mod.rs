//! Sample data transformation.
//!
//! This module normalizes the raw sample CSV:
//! - sample_id: identifier rewrite (suffix marker + transliteration)
//! - rows: cell cleanup and row-per-trial explosion

pub mod rows;
pub mod sample_id;

pub use rows::{clean_cell, explode_row, transform_csv};
pub use sample_id::{transform_sample_id, transliterate};
