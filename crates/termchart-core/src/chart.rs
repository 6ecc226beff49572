// File: crates/termchart-core/src/chart.rs
// Summary: Chart struct and the glyph-grid rendering pipeline (axis labels + line automaton).

use crossterm::style::Color;

use crate::aggregate::Aggregation;
use crate::axis::{finite_min_max, Axis, AxisScale};
use crate::downsample::{shrink, zoom_tail, Distribution};
use crate::error::{Error, Result};
use crate::grid::{CellStyle, Grid};
use crate::label::{Align, Label};
use crate::series::{Overflow, Series, SeriesConfig};
use crate::text::{fixed_trimmed, label_width};
use crate::types::{AXIS_GLYPH, CHART_HORIZONTAL, CHART_VERTICAL};

/// Render-time configuration fixed at chart construction.
#[derive(Clone, Debug)]
pub struct ChartOptions {
    /// Draw the axis line and row labels in the leftmost columns.
    pub show_axis: bool,
    pub axis_scale: AxisScale,
    /// Bucket aggregation for overflowing series; `None` picks the scale
    /// default (mean for linear, max for log, min for inverted-log).
    pub aggregation: Option<Aggregation>,
    pub horizontal_boundary: usize,
    /// Rows kept free above and below the plot area; `None` means one row
    /// when a title is set, zero otherwise.
    pub vertical_boundary: Option<usize>,
    /// Decimal places of the axis labels.
    pub axis_labels_fraction: usize,
    /// Render only the most recent window of samples instead of compressing
    /// the whole series.
    pub zoom: bool,
    pub title: String,
    pub title_position: Align,
    pub title_foreground: Color,
    pub title_background: Option<Color>,
    pub title_spacing: usize,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            show_axis: true,
            axis_scale: AxisScale::Linear,
            aggregation: None,
            horizontal_boundary: 0,
            vertical_boundary: None,
            axis_labels_fraction: 2,
            zoom: false,
            title: String::new(),
            title_position: Align::TOP,
            title_foreground: Color::Black,
            title_background: Some(Color::Grey),
            title_spacing: 1,
        }
    }
}

/// A fixed-size terminal chart: owns its grid, its series, and their configs.
pub struct Chart {
    width: usize,
    height: usize,
    options: ChartOptions,
    series: Vec<Series>,
    grid: Grid,
}

impl Chart {
    /// Create a chart with an immutable cell size of `width` x `height`.
    pub fn new(width: usize, height: usize, options: ChartOptions) -> Result<Self> {
        if width < 1 {
            return Err(Error::InvalidSize { min: 1, got: width });
        }
        if height < 2 {
            return Err(Error::InvalidSize { min: 2, got: height });
        }

        Ok(Self {
            width,
            height,
            options,
            series: Vec::new(),
            grid: Grid::new(width, height),
        })
    }

    /// One-shot convenience: build a chart around `data` and paint it.
    pub fn plot(
        data: &[f64],
        width: usize,
        height: usize,
        options: ChartOptions,
        config: SeriesConfig,
    ) -> Result<String> {
        let mut chart = Chart::new(width, height, options)?;
        let id = chart.add_series(config);
        chart.add_range(id, data)?;
        chart.paint()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    /// The grid as of the last `render` call.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Create a new empty series; returns its id. Ids are sequential from 0.
    pub fn add_series(&mut self, config: SeriesConfig) -> usize {
        self.series.push(Series::new(config));
        self.series.len() - 1
    }

    pub fn series(&self, id: usize) -> Result<&Series> {
        self.series.get(id).ok_or(Error::UnknownSeries(id))
    }

    /// Append one sample to the series.
    pub fn add_entry(&mut self, id: usize, value: f64) -> Result<()> {
        self.series_mut(id)?.push(value);
        Ok(())
    }

    /// Append a run of samples to the series.
    pub fn add_range(&mut self, id: usize, values: &[f64]) -> Result<()> {
        self.series_mut(id)?.extend(values);
        Ok(())
    }

    fn series_mut(&mut self, id: usize) -> Result<&mut Series> {
        self.series.get_mut(id).ok_or(Error::UnknownSeries(id))
    }

    /// Clear the grid and redraw axis, every series, and the title.
    pub fn render(&mut self) -> Result<()> {
        let Self {
            width,
            height,
            ref options,
            ref series,
            ref mut grid,
        } = *self;

        grid.clear();

        let vertical_boundary = options
            .vertical_boundary
            .unwrap_or(usize::from(!options.title.is_empty()));
        let size = height.saturating_sub(vertical_boundary * 2).max(2);

        let (min, max) = global_range(series);
        let axis = Axis::new(min, max, size, options.axis_scale)?;

        let y_offset = height.saturating_sub(size) / 2;
        let mut x_offset = 0;
        if options.show_axis {
            let label_padding = draw_axis(grid, y_offset, axis.labels(), options.axis_labels_fraction);
            x_offset = label_padding + 2;
        }

        let aggregation = options
            .aggregation
            .unwrap_or_else(|| options.axis_scale.default_aggregation());
        let max_series_len = (width + 1).saturating_sub(x_offset + options.horizontal_boundary * 2);

        for s in series {
            if s.len() <= 1 {
                continue;
            }

            let raw = if options.zoom {
                zoom_tail(s.data(), max_series_len)
            } else {
                s.data()
            };
            let data = handle_overflow(raw, s.config.overflow, max_series_len, aggregation)?;
            if data.len() <= 1 {
                continue;
            }

            draw_series(
                grid,
                &axis,
                &data,
                CellStyle::fg(s.config.color),
                x_offset + options.horizontal_boundary,
                y_offset,
            );
        }

        if !options.title.is_empty() {
            Label::new(&options.title, width, height)
                .boundary(options.horizontal_boundary)
                .align(options.title_position)
                .spacing(options.title_spacing)
                .colors(options.title_foreground, options.title_background)
                .draw(grid, x_offset, 0);
        }

        Ok(())
    }

    /// Render and serialize the grid to styled text.
    pub fn paint(&mut self) -> Result<String> {
        self.render()?;
        Ok(self.grid.render_text())
    }
}

// ---- helpers ----------------------------------------------------------------

/// Per-series line state; the discriminant doubles as the glyph-table index.
#[derive(Clone, Copy, PartialEq, Eq)]
enum LineState {
    Straight = 0,
    Ascending = 1,
    Descending = 2,
}

/// Min/max over every finite sample of every series; `[0, 0]` when none.
fn global_range(series: &[Series]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for s in series {
        if let Some((lo, hi)) = finite_min_max(s.data()) {
            min = min.min(lo);
            max = max.max(hi);
        }
    }

    if min.is_finite() {
        (min, max)
    } else {
        (0.0, 0.0)
    }
}

/// Draw axis labels and the axis line; returns the label column width.
fn draw_axis(grid: &mut Grid, y_offset: usize, labels: &[f64], fraction: usize) -> usize {
    let size = labels.len();
    let label_padding = label_width(&[labels[0], labels[size - 1]], fraction) + 1;
    let height = grid.height();

    for i in 0..height {
        let row = height - 1 - i;
        grid.put(label_padding + 1, row, AXIS_GLYPH, CellStyle::default());

        if i < y_offset {
            continue;
        }
        let label_index = i - y_offset;
        if label_index >= size {
            continue;
        }

        let label = format!("{:>label_padding$}", fixed_trimmed(labels[label_index], fraction));
        for (j, glyph) in label.chars().enumerate() {
            grid.put(j, row, glyph, CellStyle::default());
        }
    }

    label_padding
}

/// Reduce an overflowing series to `max_len` values per its policy.
fn handle_overflow(
    data: &[f64],
    overflow: Overflow,
    max_len: usize,
    aggregation: Aggregation,
) -> Result<Vec<f64>> {
    match overflow {
        Overflow::LinearScale => shrink(data, max_len, Distribution::Linear, aggregation),
        Overflow::LogScale => {
            // The further the data overflows, the more the resampling favors
            // density near the most recent samples.
            let overflow_count = data.len().saturating_sub(max_len);
            let ratio = (overflow_count as f64 / 50.0).min(1.0);
            shrink(data, max_len, Distribution::InvertedLog { ratio }, aggregation)
        }
        Overflow::Clamp => shrink(data, max_len, Distribution::Tail, aggregation),
    }
}

/// Walk `data` left to right, one column per value, emitting line glyphs.
///
/// Stops at the first non-finite value; everything drawn so far stays.
fn draw_series(
    grid: &mut Grid,
    axis: &Axis,
    data: &[f64],
    style: CellStyle,
    x_start: usize,
    y_offset: usize,
) {
    let mut last_state = LineState::Straight;
    let mut last_y = y_offset + axis.position(data[0]);
    let mut x = x_start;

    for &value in &data[1..] {
        if !value.is_finite() {
            break;
        }

        let y = y_offset + axis.position(value);
        let state = if y == last_y {
            LineState::Straight
        } else if y < last_y {
            LineState::Ascending
        } else {
            LineState::Descending
        };

        if last_state == LineState::Straight {
            grid.put(x, last_y, CHART_HORIZONTAL[last_state as usize], style);
            x += 1;
            grid.put(x, last_y, CHART_HORIZONTAL[state as usize], style);
        } else {
            grid.put(x, last_y, CHART_VERTICAL[last_state as usize], style);
            x += 1;

            if state == LineState::Straight {
                grid.put(x, y, CHART_HORIZONTAL[state as usize], style);
            } else {
                grid.put(x, last_y, CHART_HORIZONTAL[state as usize], style);
                grid.put(x, y, CHART_VERTICAL[state as usize], style);
            }
        }

        if y != last_y {
            // Vertical stroke of a steep rise or fall.
            for row in y.min(last_y) + 1..y.max(last_y) {
                grid.put(x, row, CHART_VERTICAL[LineState::Straight as usize], style);
            }
        }

        last_y = y;
        last_state = state;
    }
}
