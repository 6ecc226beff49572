// File: crates/termchart-core/src/error.rs
// Summary: Error taxonomy for construction, lookup, and configuration failures.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// An axis range was constructed with `min` above `max`.
    #[error("incorrect range: min {min} should be less or equal to max {max}")]
    InvalidRange { min: f64, max: f64 },

    /// A distribution was requested with fewer than two points.
    #[error("distribution needs at least 2 points, got {0}")]
    InvalidCount(usize),

    /// A grid or axis dimension is below its documented minimum.
    #[error("size should be at least {min}, got {got}")]
    InvalidSize { min: usize, got: usize },

    /// A series id that was never returned by `add_series`.
    #[error("unknown series id {0}")]
    UnknownSeries(usize),

    /// A chart id that was never returned by `add_chart`.
    #[error("unknown chart id {0}")]
    UnknownChart(usize),

    /// A configuration name that no variant answers to.
    #[error("unsupported {kind}: {value}")]
    UnsupportedConfig { kind: &'static str, value: String },
}
