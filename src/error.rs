//! Error types for the specmerge pipeline.
//!
//! This module defines a hierarchy of error types:
//!
//! - [`ConfigError`] - config file loading errors
//! - [`TransformError`] - sample data transformation errors
//! - [`MergeError`] - mapping and join errors
//! - [`PipelineError`] - top-level orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Config Errors
// =============================================================================

/// Errors while loading the `key=value` config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file does not exist. Fatal: main prints a message and exits 1.
    #[error("Config file not found at: {}", path.display())]
    NotFound { path: PathBuf },

    /// A line did not split into exactly one key and one value on `=`.
    #[error("Malformed config line {line}: '{content}'")]
    MalformedLine { line: usize, content: String },

    /// Failed to read the file.
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
}

// =============================================================================
// Transformation Errors
// =============================================================================

/// Errors during sample data transformation.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Input row has fewer than the 5 required cells (id + 4 trials).
    #[error("Row {row} has fewer than 5 cells")]
    ShortRow { row: usize },

    /// CSV read/write error.
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

// =============================================================================
// Merge Errors (mapping + join)
// =============================================================================

/// Errors while building the fragment mapping or joining measurement rows.
#[derive(Debug, Error)]
pub enum MergeError {
    /// Row is missing a column the step requires.
    #[error("Row {row} is missing a required column")]
    MissingColumn { row: usize },

    /// CSV read/write error.
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level pipeline orchestration errors.
///
/// This is the main error type returned by [`crate::pipeline::run`].
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Config error.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Transformation error.
    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),

    /// Merge error.
    #[error("Merge error: {0}")]
    Merge(#[from] MergeError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for transformation operations.
pub type TransformResult<T> = Result<T, TransformError>;

/// Result type for mapping and join operations.
pub type MergeResult<T> = Result<T, MergeError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
