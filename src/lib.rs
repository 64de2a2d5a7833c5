//! # Specmerge - merge spectroscopy measurement CSVs with sample trial data
//!
//! Specmerge normalizes a CSV of sample identifiers and trial values into a
//! row-per-trial format, then joins a second CSV of measurement rows against
//! it by a 6-digit filename fragment.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ sample CSV  │────▶│  Transform  │────▶│ FragmentMap │────▶│  final CSV  │
//! │ (id+trials) │     │ (row/trial) │     │ (frag → id) │     │  (merged)   │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use specmerge::{pipeline, Config};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(std::path::Path::new("."))?;
//!     let report = pipeline::run(&config)?;
//!     println!("Matched {} rows", report.stats.matched);
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`config`] - `key=value` config file loading
//! - [`transform`] - Sample id rewrite and row-per-trial explosion
//! - [`mapping`] - Insertion-ordered fragment lookup
//! - [`matcher`] - Fragment extraction and the join step
//! - [`pipeline`] - Orchestration
//! - [`logs`] - Leveled progress logging

// Core modules
pub mod config;
pub mod error;
pub mod logs;

// Transformation
pub mod transform;

// Mapping and join
pub mod mapping;
pub mod matcher;

// Orchestration
pub mod pipeline;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    ConfigError, ConfigResult, MergeError, MergeResult, PipelineError, PipelineResult,
    TransformError, TransformResult,
};

// =============================================================================
// Re-exports - Config
// =============================================================================

pub use config::Config;

// =============================================================================
// Re-exports - Transformation
// =============================================================================

pub use transform::{clean_cell, explode_row, transform_csv, transform_sample_id, transliterate};

// =============================================================================
// Re-exports - Mapping and join
// =============================================================================

pub use mapping::{build_mapping, FragmentMap};
pub use matcher::{extract_fragment, match_and_write, MatchStats};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use pipeline::{run, MergeReport};
