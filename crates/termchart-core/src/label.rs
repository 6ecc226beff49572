// File: crates/termchart-core/src/label.rs
// Summary: Clipped, aligned text stamping into a grid (titles and decorations).

use bitflags::bitflags;
use crossterm::style::Color;

use crate::grid::{CellStyle, Grid};

bitflags! {
    /// Placement of a label within its grid.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Align: u8 {
        const TOP = 1 << 1;
        const BOTTOM = 1 << 2;
        const LEFT = 1 << 5;
        const RIGHT = 1 << 6;

        const TOP_LEFT = Self::TOP.bits() | Self::LEFT.bits();
        const TOP_RIGHT = Self::TOP.bits() | Self::RIGHT.bits();
        const BOTTOM_LEFT = Self::BOTTOM.bits() | Self::LEFT.bits();
        const BOTTOM_RIGHT = Self::BOTTOM.bits() | Self::RIGHT.bits();
    }
}

/// Labels narrower than this draw nothing; there is no room to be readable.
pub const MIN_WIDTH: usize = 4;

const DEFAULT_FOREGROUND: Color = Color::Black;
const DEFAULT_BACKGROUND: Color = Color::Grey;
const DEFAULT_SPACING: usize = 1;

/// A piece of text stamped onto a grid with clipping, alignment, and padding.
pub struct Label<'a> {
    text: &'a str,
    width: usize,
    height: usize,
    boundary: usize,
    align: Align,
    spacing: usize,
    pub foreground: Color,
    pub background: Option<Color>,
}

impl<'a> Label<'a> {
    pub fn new(text: &'a str, width: usize, height: usize) -> Self {
        Self {
            text,
            width,
            height,
            boundary: 0,
            align: Align::TOP,
            spacing: DEFAULT_SPACING,
            foreground: DEFAULT_FOREGROUND,
            background: Some(DEFAULT_BACKGROUND),
        }
    }

    pub fn boundary(mut self, boundary: usize) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn spacing(mut self, spacing: usize) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn colors(mut self, foreground: Color, background: Option<Color>) -> Self {
        self.foreground = foreground;
        self.background = background;
        self
    }

    /// Stamp the label into `grid`. Text that cannot fit in the width right
    /// of `x_offset` is clipped with an ellipsis; labels with less than
    /// [`MIN_WIDTH`] cells available draw nothing.
    pub fn draw(&self, grid: &mut Grid, x_offset: usize, y_offset: usize) {
        let max_width = self.width.saturating_sub(x_offset);
        if self.text.is_empty() || max_width <= MIN_WIDTH {
            return;
        }

        let mut text = clip(self.text, max_width, self.boundary);
        let mut len = text.chars().count();
        if len < max_width {
            let spacing = self.spacing.min((max_width - len) / 2);
            if spacing > 0 {
                let pad = " ".repeat(spacing);
                text = format!("{pad}{text}{pad}");
                len += spacing * 2;
            }
        }

        let x = if self.align.contains(Align::LEFT) {
            0
        } else if self.align.contains(Align::RIGHT) {
            self.width.saturating_sub(len + 1)
        } else {
            x_offset + (max_width as f64 / 2.0 - len as f64 / 2.0).round() as usize
        };

        let y = if self.align.contains(Align::BOTTOM) {
            self.height - 1 - y_offset
        } else {
            y_offset
        };

        let style = CellStyle {
            fg: self.foreground,
            bg: self.background,
        };
        for (i, glyph) in text.chars().enumerate() {
            grid.put(x + i, y, glyph, style);
        }
    }
}

fn clip(text: &str, max_length: usize, boundary: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }

    let keep = max_length.saturating_sub(boundary + 1);
    let mut clipped: String = text.chars().take(keep).collect();
    clipped.push('…');
    clipped
}
