// File: crates/termchart-core/src/distribution.rs
// Summary: Sample-position generators for linear, logarithmic, and inverted-logarithmic scales.

use crate::error::{Error, Result};

/// Evenly spaced values covering `[min, max]`, bounds swapped if inverted.
pub fn linear(min: f64, max: f64, count: usize) -> Result<Vec<f64>> {
    if count < 2 {
        return Err(Error::InvalidCount(count));
    }
    let (min, max) = if min > max { (max, min) } else { (min, max) };

    let step = (max - min) / (count - 1) as f64;
    Ok((0..count).map(|i| min + i as f64 * step).collect())
}

/// Log-spaced values covering `[min, max]`, dense near `min`.
///
/// `ratio` in `[0, 1]` blends between a linear (0) and a fully logarithmic (1)
/// spacing. Ranges reaching below 1 are shifted positive before taking the
/// log and shifted back on output.
pub fn logarithmic(min: f64, max: f64, count: usize, ratio: f64) -> Result<Vec<f64>> {
    if count < 2 {
        return Err(Error::InvalidCount(count));
    }
    let (mut min, mut max) = if min > max { (max, min) } else { (min, max) };

    let mut offset = 0.0;
    if min < 1.0 {
        offset = min.abs() + 1.0;
        min += offset;
        max += offset;
    }

    let ratio = ratio.clamp(0.0, 1.0);
    let last = (count - 1) as f64;

    let mut values = Vec::with_capacity(count);
    for i in 0..count {
        let linear_value = i as f64 / last;

        // 10^0 is 1, which would skip the `min` border; index 0 maps to 0 exactly.
        let log_value = if i > 0 {
            10f64.powf(linear_value) / 10.0
        } else {
            0.0
        };

        let blended = (1.0 - ratio) * linear_value + ratio * log_value;
        values.push(min + blended * (max - min) - offset);
    }

    Ok(values)
}

/// The mirror image of [`logarithmic`]: dense near `max`, sparse near `min`.
///
/// Computed by reversing the log sequence and re-expressing it as cumulative
/// deltas from `min`, so the first value is exactly `min` and the last exactly
/// `max`.
pub fn inverted_logarithmic(min: f64, max: f64, count: usize, ratio: f64) -> Result<Vec<f64>> {
    let mut values = logarithmic(min, max, count, ratio)?;
    values.reverse();

    let mut prev = values[0];
    let mut last = min.min(max);

    let mut out = Vec::with_capacity(values.len());
    for value in values {
        let delta = prev - value;
        out.push(last + delta);

        prev = value;
        last += delta;
    }

    Ok(out)
}

/// Index of the element of ascending `data` closest to `value`.
///
/// Exact matches win inside the binary search; otherwise the neighbor with
/// the strictly smaller absolute difference is chosen, ties resolving to the
/// upper index. Out-of-range values clamp to the nearest end.
pub fn closest_index(data: &[f64], value: f64) -> usize {
    let mut index = 0usize;
    let mut left = 0i64;
    let mut right = data.len() as i64 - 1;

    while left <= right {
        index = (left + (right - left) / 2) as usize;
        let current = data[index];

        if value < current {
            right = index as i64 - 1;
        } else if value > current {
            left = index as i64 + 1;
        } else {
            return index;
        }
    }

    // value is outside the [min, max] range
    if left == 0 || left >= data.len() as i64 {
        return index;
    }

    let left = left as usize;
    let lower_diff = (data[left - 1] - value).abs();
    let upper_diff = (data[left] - value).abs();
    if lower_diff < upper_diff {
        left - 1
    } else {
        left
    }
}
