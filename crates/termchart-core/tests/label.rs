// File: crates/termchart-core/tests/label.rs
// Purpose: Validate label clipping, alignment, and padding.

use termchart_core::{Align, Color, Grid, Label};

fn row_text(grid: &Grid, y: usize) -> String {
    (0..grid.width()).map(|x| grid.get(x, y).glyph).collect()
}

#[test]
fn short_label_is_centered_with_spacing() {
    let mut grid = Grid::new(20, 3);
    Label::new("cpu", 20, 3).draw(&mut grid, 0, 0);

    let top = row_text(&grid, 0);
    assert!(top.contains(" cpu "), "got {top:?}");
    // Only the top row is touched.
    assert_eq!(row_text(&grid, 1).trim(), "");
    assert_eq!(row_text(&grid, 2).trim(), "");
}

#[test]
fn overlong_label_is_clipped_with_ellipsis() {
    let mut grid = Grid::new(10, 2);
    Label::new("a very long title", 10, 2).draw(&mut grid, 0, 0);

    let top = row_text(&grid, 0);
    assert!(top.contains('…'), "got {top:?}");
    assert_eq!(top.chars().count(), 10);
}

#[test]
fn no_room_draws_nothing() {
    let mut grid = Grid::new(10, 2);
    // Only 4 columns remain right of the offset, at the readability minimum.
    Label::new("title", 10, 2).draw(&mut grid, 6, 0);
    assert_eq!(row_text(&grid, 0).trim(), "");
}

#[test]
fn bottom_right_alignment() {
    let mut grid = Grid::new(16, 4);
    Label::new("tail", 16, 4)
        .align(Align::BOTTOM_RIGHT)
        .spacing(0)
        .draw(&mut grid, 0, 0);

    let bottom = row_text(&grid, 3);
    assert_eq!(bottom.trim(), "tail");
    // Right-aligned: one column of margin at the right edge.
    assert_eq!(grid.get(15, 3).glyph, ' ');
    assert_eq!(grid.get(14, 3).glyph, 'l');
}

#[test]
fn colors_are_applied_to_every_cell() {
    let mut grid = Grid::new(12, 2);
    Label::new("hot", 12, 2)
        .colors(Color::White, Some(Color::DarkRed))
        .spacing(0)
        .draw(&mut grid, 0, 0);

    let x = (0..12).find(|&x| grid.get(x, 0).glyph == 'h').unwrap();
    let style = grid.get(x, 0).style;
    assert_eq!(style.fg, Color::White);
    assert_eq!(style.bg, Some(Color::DarkRed));
}
