// File: crates/termchart-core/src/axis.rs
// Summary: Axis model; precomputed row labels and value-to-row mapping.

use crate::aggregate::Aggregation;
use crate::distribution;
use crate::error::{Error, Result};

/// Spacing law used to place row labels and map values to rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisScale {
    Linear,
    Log,
    LogInverted,
}

impl AxisScale {
    /// Aggregation used when a series overflows and none was configured.
    pub fn default_aggregation(self) -> Aggregation {
        match self {
            AxisScale::Linear => Aggregation::Mean,
            AxisScale::Log => Aggregation::Max,
            AxisScale::LogInverted => Aggregation::Min,
        }
    }

    /// Parse a configuration name ("linear", "log", "log-inverted").
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "linear" => Ok(AxisScale::Linear),
            "log" => Ok(AxisScale::Log),
            "log-inverted" => Ok(AxisScale::LogInverted),
            other => Err(Error::UnsupportedConfig {
                kind: "axis scale",
                value: other.to_string(),
            }),
        }
    }
}

/// Vertical axis over a value range, rebuilt on every render.
///
/// Holds one ascending label value per row; `size` is the row count.
#[derive(Clone, Debug)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
    pub size: usize,
    pub scale: AxisScale,
    labels: Vec<f64>,
}

impl Axis {
    pub fn new(min: f64, max: f64, size: usize, scale: AxisScale) -> Result<Self> {
        if min > max {
            return Err(Error::InvalidRange { min, max });
        }
        if size <= 1 {
            return Err(Error::InvalidSize { min: 2, got: size });
        }

        let labels = match scale {
            AxisScale::Linear => distribution::linear(min, max, size)?,
            AxisScale::Log => distribution::logarithmic(min, max, size, 1.0)?,
            AxisScale::LogInverted => distribution::inverted_logarithmic(min, max, size, 1.0)?,
        };

        Ok(Self {
            min,
            max,
            size,
            scale,
            labels,
        })
    }

    /// Ascending label values, one per row.
    pub fn labels(&self) -> &[f64] {
        &self.labels
    }

    /// Row the value maps to, counted from the bottom of the axis extent:
    /// the smallest label sits on row `size - 1`, the largest on row 0.
    pub fn position(&self, value: f64) -> usize {
        self.size - 1 - distribution::closest_index(&self.labels, value)
    }
}

/// Range of the finite values in `values`, or `None` if there are none.
pub fn finite_min_max(values: &[f64]) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for &value in values {
        if !value.is_finite() {
            continue;
        }
        min = min.min(value);
        max = max.max(value);
    }

    min.is_finite().then_some((min, max))
}
