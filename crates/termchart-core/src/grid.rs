// File: crates/termchart-core/src/grid.rs
// Summary: Fixed-size cell grid with styled glyphs and ANSI serialization.

use std::fmt::Write as _;

use crossterm::style::{Color, ResetColor, SetBackgroundColor, SetForegroundColor};

use crate::types::SPACE_GLYPH;

/// Foreground/background tags attached to a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Color,
    pub bg: Option<Color>,
}

impl CellStyle {
    pub const fn fg(color: Color) -> Self {
        Self {
            fg: color,
            bg: None,
        }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Color::Reset,
            bg: None,
        }
    }
}

/// One glyph plus its style tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            glyph: SPACE_GLYPH,
            style: CellStyle::default(),
        }
    }
}

/// Row-major character grid; row 0 is the top. Allocated once, mutated in
/// place on every render, never resized.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Reset every cell to a blank with the default style.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[y * self.width + x]
    }

    /// Write one cell. Writes outside the grid are dropped so that callers
    /// drawing near the right edge cannot widen a row.
    pub fn put(&mut self, x: usize, y: usize, glyph: char, style: CellStyle) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = Cell { glyph, style };
        }
    }

    /// Copy every cell of `src` into this grid at the given offset. The
    /// source is only read; cells falling outside this grid are dropped.
    pub fn blit(&mut self, src: &Grid, x_offset: usize, y_offset: usize) {
        for y in 0..src.height {
            for x in 0..src.width {
                let cell = src.get(x, y);
                self.put(x + x_offset, y + y_offset, cell.glyph, cell.style);
            }
        }
    }

    /// Serialize to newline-joined rows of styled characters.
    ///
    /// Color escapes are emitted only where the style changes from the
    /// previous cell; the output ends with a full style reset.
    pub fn render_text(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height);

        let mut fg = Color::Reset;
        let mut bg = None;
        for y in 0..self.height {
            if y > 0 {
                out.push('\n');
            }
            for x in 0..self.width {
                let cell = self.get(x, y);
                if cell.style.fg != fg {
                    let _ = write!(out, "{}", SetForegroundColor(cell.style.fg));
                    fg = cell.style.fg;
                }
                if cell.style.bg != bg {
                    let _ = write!(out, "{}", SetBackgroundColor(cell.style.bg.unwrap_or(Color::Reset)));
                    bg = cell.style.bg;
                }
                out.push(cell.glyph);
            }
        }

        let _ = write!(out, "{ResetColor}");
        out
    }
}
