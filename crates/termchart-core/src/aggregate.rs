// File: crates/termchart-core/src/aggregate.rs
// Summary: Bucket aggregation functions used by the downsampler.

use crate::error::{Error, Result};

/// Reduces an inclusive index range of raw samples to one representative value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Aggregation {
    /// Arithmetic mean of the bucket.
    Mean,
    /// Smallest value in the bucket.
    Min,
    /// Largest value in the bucket.
    Max,
    /// The most recent value in the bucket, no reduction.
    Last,
}

impl Aggregation {
    /// Apply the aggregation to `data[from..=to]`.
    ///
    /// Single-element buckets (`from >= to`) short-circuit to `data[to]` for
    /// every variant. A NaN anywhere in the bucket makes Mean, Min, and Max
    /// come out NaN, so a non-finite sample survives downsampling and still
    /// truncates the drawn line.
    pub fn apply(self, data: &[f64], from: usize, to: usize) -> f64 {
        if from >= to {
            return data[to];
        }

        match self {
            Aggregation::Mean => {
                // Accumulate value/length per element instead of sum/length
                // to keep the running total within the magnitude of the data.
                let length = (to - from + 1) as f64;
                let mut value = 0.0;
                for &v in &data[from..=to] {
                    value += v / length;
                }
                value
            }
            // std's f64::min/max skip NaN; these scans must not.
            Aggregation::Min => data[from..=to].iter().copied().fold(f64::INFINITY, |acc, v| {
                if acc.is_nan() || v.is_nan() {
                    f64::NAN
                } else {
                    acc.min(v)
                }
            }),
            Aggregation::Max => data[from..=to]
                .iter()
                .copied()
                .fold(f64::NEG_INFINITY, |acc, v| {
                    if acc.is_nan() || v.is_nan() {
                        f64::NAN
                    } else {
                        acc.max(v)
                    }
                }),
            Aggregation::Last => data[to],
        }
    }

    /// Parse a configuration name ("mean", "min", "max", "skip"/"last").
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "mean" => Ok(Aggregation::Mean),
            "min" => Ok(Aggregation::Min),
            "max" => Ok(Aggregation::Max),
            "skip" | "last" => Ok(Aggregation::Last),
            other => Err(Error::UnsupportedConfig {
                kind: "aggregation",
                value: other.to_string(),
            }),
        }
    }
}
