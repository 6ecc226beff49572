// File: crates/termchart-core/src/lib.rs
// Summary: Core library entry point; exports the public API for chart construction and rendering.

pub mod aggregate;
pub mod axis;
pub mod chart;
pub mod distribution;
pub mod downsample;
pub mod error;
pub mod grid;
pub mod label;
pub mod multi;
pub mod series;
pub mod text;
pub mod types;

pub use aggregate::Aggregation;
pub use axis::{Axis, AxisScale};
pub use chart::{Chart, ChartOptions};
pub use downsample::{shrink, Distribution};
pub use error::{Error, Result};
pub use grid::{Cell, CellStyle, Grid};
pub use label::{Align, Label};
pub use multi::{MultiChart, MultiChartOptions, Tile};
pub use series::{Overflow, Series, SeriesConfig};

// The style vocabulary of the grid is crossterm's; re-exported so callers
// don't need a direct crossterm dependency.
pub use crossterm::style::Color;
