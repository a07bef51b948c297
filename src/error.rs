//! Error types for trendlab
//!
//! Generation errors are fatal at the point of detection: runs are
//! deterministic given their seed and configuration, so retrying without a
//! config change would reproduce the same failure. Output errors at the
//! export/render boundary are the one recoverable class (the caller may
//! retry into a fallback directory).

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// trendlab error types
#[derive(Error, Debug)]
pub enum Error {
    /// Sample axis configuration is unusable (start after end, or a
    /// non-positive interval)
    #[error("invalid sample range: {0}")]
    InvalidRange(String),

    /// A timestamp matched zero or more than one regime. Never resolved by
    /// picking an arbitrary regime.
    #[error(
        "regime coverage violated for {entity} at {date}: \
         {matches} regimes match (expected exactly 1)"
    )]
    RegimeCoverage {
        /// Entity whose regime table is malformed
        entity: String,
        /// The uncovered (or multiply covered) sample date
        date: NaiveDate,
        /// Number of regimes whose window contains the date
        matches: usize,
    },

    /// A regime table carries parameters no generator can evaluate
    /// (e.g. a negative or non-finite noise sigma)
    #[error("invalid regime table for {entity}: {reason}")]
    InvalidRegime {
        /// Entity whose regime table is malformed
        entity: String,
        /// What is wrong with it
        reason: String,
    },

    /// A trajectory column is not aligned with the sample axis
    #[error("column {entity} has {actual} values but the axis has {expected} samples")]
    ColumnMismatch {
        /// Misaligned entity column
        entity: String,
        /// Axis length
        expected: usize,
        /// Column length
        actual: usize,
    },

    /// Failure at the export boundary (CSV / manifest)
    #[error("output write failed: {0}")]
    OutputWrite(#[from] std::io::Error),

    /// Failure at the chart-rendering boundary
    #[error("chart rendering failed: {0}")]
    Render(String),

    /// Arrow error while building the columnar dataset view
    #[error("arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
}
