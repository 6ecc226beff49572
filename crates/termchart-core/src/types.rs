// File: crates/termchart-core/src/types.rs
// Summary: Shared drawing glyph constants.

/// Glyph stamped on every row of the vertical axis line.
pub const AXIS_GLYPH: char = '┼';
/// Glyph of an empty cell.
pub const SPACE_GLYPH: char = ' ';

/// Horizontal glyphs indexed by line state (straight, ascending, descending).
pub const CHART_HORIZONTAL: [char; 3] = ['─', '╯', '╮'];
/// Vertical glyphs indexed by line state (straight, ascending, descending).
pub const CHART_VERTICAL: [char; 3] = ['│', '╭', '╰'];
