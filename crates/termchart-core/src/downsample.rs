// File: crates/termchart-core/src/downsample.rs
// Summary: Series reduction; partitions overflowing data into buckets and aggregates each.

use crate::aggregate::Aggregation;
use crate::distribution;
use crate::error::Result;

/// Boundary-position law used when a series has more samples than columns.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Distribution {
    /// Evenly spaced boundaries over the whole index range.
    Linear,
    /// Boundaries dense near the most recent indices; `ratio` in `[0, 1]`
    /// controls how strongly the spacing deviates from linear.
    InvertedLog { ratio: f64 },
    /// Boundaries covering only the final `count` indices; older samples are
    /// dropped entirely.
    Tail,
}

impl Distribution {
    /// Generate `count` boundary positions over `[min, max]`.
    pub fn positions(self, min: f64, max: f64, count: usize) -> Result<Vec<f64>> {
        match self {
            Distribution::Linear => distribution::linear(min, max, count),
            Distribution::InvertedLog { ratio } => {
                distribution::inverted_logarithmic(min, max, count, ratio)
            }
            Distribution::Tail => distribution::linear(max - count as f64 + 1.0, max, count),
        }
    }
}

/// Reduce `data` to exactly `max_len` values.
///
/// A no-op copy when the data already fits. Otherwise `max_len` boundary
/// positions are generated over the index range `[0, len - 1]` and rounded;
/// each output value aggregates the bucket between consecutive boundaries.
/// Buckets are contiguous and non-overlapping: the first starts at the first
/// rounded boundary, each following one at the previous boundary plus one.
pub fn shrink(
    data: &[f64],
    max_len: usize,
    dist: Distribution,
    aggregation: Aggregation,
) -> Result<Vec<f64>> {
    if data.len() <= max_len {
        return Ok(data.to_vec());
    }

    let positions = dist.positions(0.0, (data.len() - 1) as f64, max_len)?;

    let mut shrunk = Vec::with_capacity(max_len);
    let mut prev: Option<usize> = None;
    for position in positions {
        let index = (position.round() as usize).min(data.len() - 1);
        let from = prev.unwrap_or(index);

        shrunk.push(aggregation.apply(data, from, index));
        prev = Some(index + 1);
    }

    Ok(shrunk)
}

/// Window `data` down to its most recent `max_len` samples.
pub fn zoom_tail(data: &[f64], max_len: usize) -> &[f64] {
    &data[data.len().saturating_sub(max_len)..]
}
