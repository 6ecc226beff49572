// File: crates/termchart-core/src/multi.rs
// Summary: Composer; tiles independently rendered charts into one enclosing grid.

use crossterm::style::Color;

use crate::chart::{Chart, ChartOptions};
use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::label::{Align, Label};
use crate::series::SeriesConfig;

/// Placement of one chart within the enclosing grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    pub x_offset: usize,
    pub y_offset: usize,
    pub width: usize,
    pub height: usize,
}

#[derive(Clone, Debug)]
pub struct MultiChartOptions {
    pub title: String,
    pub title_position: Align,
    pub title_foreground: Color,
    pub title_background: Option<Color>,
    /// Rows reserved above all plots for the global title band.
    pub title_boundary: usize,
    pub title_spacing: usize,
}

impl Default for MultiChartOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            title_position: Align::TOP,
            title_foreground: Color::Black,
            title_background: Some(Color::Grey),
            title_boundary: 1,
            title_spacing: 1,
        }
    }
}

/// A set of charts composed side by side at fixed offsets.
///
/// Child charts stay fully independent; on every render each one is redrawn
/// into its own grid first and then copied here, so a child's grid is never
/// mutated by the composer.
pub struct MultiChart {
    options: MultiChartOptions,
    charts: Vec<Chart>,
    tiles: Vec<Tile>,
    width: usize,
    height: usize,
    grid: Grid,
}

impl MultiChart {
    pub fn new(options: MultiChartOptions) -> Self {
        Self {
            options,
            charts: Vec::new(),
            tiles: Vec::new(),
            width: 0,
            height: 0,
            grid: Grid::new(0, 0),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The composed grid as of the last `render` call.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Add a chart at the given tile; returns its id. The enclosing grid is
    /// resized to cover every tile plus the title band.
    pub fn add_chart(&mut self, tile: Tile, options: ChartOptions) -> Result<usize> {
        let chart = Chart::new(tile.width, tile.height, options)?;
        self.charts.push(chart);
        self.tiles.push(tile);

        let mut width = 0;
        let mut height = 0;
        for t in &self.tiles {
            width = width.max(t.x_offset + t.width);
            height = height.max(t.y_offset + t.height);
        }
        if !self.options.title.is_empty() {
            height += self.options.title_boundary;
        }

        self.width = width;
        self.height = height;
        self.grid = Grid::new(width, height);

        Ok(self.charts.len() - 1)
    }

    pub fn chart_mut(&mut self, id: usize) -> Result<&mut Chart> {
        self.charts.get_mut(id).ok_or(Error::UnknownChart(id))
    }

    /// Add a series to a child chart.
    pub fn add_series(&mut self, chart_id: usize, config: SeriesConfig) -> Result<usize> {
        Ok(self.chart_mut(chart_id)?.add_series(config))
    }

    /// Append one sample to a child chart's series.
    pub fn add_entry(&mut self, chart_id: usize, series_id: usize, value: f64) -> Result<()> {
        self.chart_mut(chart_id)?.add_entry(series_id, value)
    }

    /// Redraw the global title and every child chart, then compose.
    pub fn render(&mut self) -> Result<()> {
        let Self {
            width,
            height,
            ref options,
            ref mut charts,
            ref tiles,
            ref mut grid,
        } = *self;

        grid.clear();

        if !options.title.is_empty() {
            Label::new(&options.title, width, height)
                .align(options.title_position)
                .spacing(options.title_spacing)
                .colors(options.title_foreground, options.title_background)
                .draw(grid, 0, 0);
        }

        let y_global = if options.title.is_empty() {
            0
        } else {
            options.title_boundary
        };

        for (chart, tile) in charts.iter_mut().zip(tiles) {
            chart.render()?;
            grid.blit(chart.grid(), tile.x_offset, tile.y_offset + y_global);
        }

        Ok(())
    }

    /// Render and serialize the composed grid to styled text.
    pub fn paint(&mut self) -> Result<String> {
        self.render()?;
        Ok(self.grid.render_text())
    }
}
