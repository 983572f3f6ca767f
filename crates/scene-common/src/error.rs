//! Error types for shared value parsing.

use thiserror::Error;

/// Result type alias using GeoError.
pub type GeoResult<T> = Result<T, GeoError>;

/// Errors raised when building value types from untrusted input.
#[derive(Debug, Error, PartialEq)]
pub enum GeoError {
    #[error("Latitude out of range: {0} (expected -90..=90)")]
    InvalidLatitude(f64),

    #[error("Month out of range: {0} (expected 1..=12)")]
    InvalidMonth(u32),

    #[error("Invalid year/month: {0}. Expected 'YYYY-MM'")]
    InvalidYearMonth(String),

    #[error("Invalid grid cell: {0}. Expected 'PATH/ROW'")]
    InvalidGridCell(String),
}
