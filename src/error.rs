//! Error handling for Rancho
//!
//! Defines custom error types and establishes a unified Result type
//! using anyhow for context chaining and error propagation.

use thiserror::Error;

/// Core error types for reconciliation runs
#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("parse error: {0}")]
    ParseError(String),

    #[error("csv error")]
    Csv(#[from] csv::Error),

    #[error("io error")]
    Io(#[from] std::io::Error),
}

/// Result type alias for reconciliation operations
pub type Result<T> = anyhow::Result<T>;
