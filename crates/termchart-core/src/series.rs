// File: crates/termchart-core/src/series.rs
// Summary: Series storage and per-series rendering configuration.

use crossterm::style::Color;

use crate::error::{Error, Result};

/// Strategy for a series with more samples than available plot columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Overflow {
    /// Proportional resample; every region of the series weighs the same.
    LinearScale,
    /// Logarithmic resample; recent samples keep more detail the further the
    /// series overflows.
    LogScale,
    /// Keep only the most recent window, drop everything older.
    Clamp,
}

impl Overflow {
    /// Parse a configuration name ("linear", "log", "clamp").
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "linear" => Ok(Overflow::LinearScale),
            "log" => Ok(Overflow::LogScale),
            "clamp" => Ok(Overflow::Clamp),
            other => Err(Error::UnsupportedConfig {
                kind: "overflow policy",
                value: other.to_string(),
            }),
        }
    }
}

/// Rendering attributes attached to a series at creation time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeriesConfig {
    pub color: Color,
    pub overflow: Overflow,
}

impl SeriesConfig {
    pub const fn with_color(color: Color) -> Self {
        Self {
            color,
            overflow: Overflow::LinearScale,
        }
    }

    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            color: Color::Reset,
            overflow: Overflow::LinearScale,
        }
    }
}

/// An append-only sequence of samples plus its configuration. Identified by
/// its dense index within a chart; ids are assigned at creation and never
/// reused.
#[derive(Clone, Debug, Default)]
pub struct Series {
    data: Vec<f64>,
    pub config: SeriesConfig,
}

impl Series {
    pub fn new(config: SeriesConfig) -> Self {
        Self {
            data: Vec::new(),
            config,
        }
    }

    pub fn push(&mut self, value: f64) {
        self.data.push(value);
    }

    pub fn extend(&mut self, values: &[f64]) {
        self.data.extend_from_slice(values);
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
