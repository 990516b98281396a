use std::io::{self, Write};

use crossterm::style::{Color, Stylize};

use crate::maze::{Cell, Labyrinth};

/// The width of each cell when rendered, in character widths.
pub const CELL_WIDTH: u16 = 2;

/// Two-character glyph for a cell, drawing lines along its open sides.
/// The second column carries the line eastwards when the east side is open.
fn glyph(cell: &Cell) -> &'static str {
    match (cell.north, cell.east, cell.south, cell.west) {
        (false, false, false, false) => "██",
        (true, false, false, false) => "╵ ",
        (false, true, false, false) => "╶─",
        (false, false, true, false) => "╷ ",
        (false, false, false, true) => "╴ ",
        (true, true, false, false) => "└─",
        (true, false, true, false) => "│ ",
        (true, false, false, true) => "┘ ",
        (false, true, true, false) => "┌─",
        (false, true, false, true) => "──",
        (false, false, true, true) => "┐ ",
        (true, true, true, false) => "├─",
        (true, true, false, true) => "┴─",
        (true, false, true, true) => "┤ ",
        (false, true, true, true) => "┬─",
        (true, true, true, true) => "┼─",
    }
}

/// Draw the labyrinth with one styled two-column glyph per cell. The entry
/// and destination cells are overlaid with marker blocks.
pub fn draw(lab: &Labyrinth, out: &mut impl Write) -> io::Result<()> {
    let grid = lab.grid();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let cell = &grid[(x, y)];
            let styled = if (x, y) == lab.start() {
                "🟩".with(Color::Green)
            } else if (x, y) == lab.dest() {
                "🟥".with(Color::Red)
            } else if cell.tunnel {
                glyph(cell).with(Color::Magenta)
            } else if !(cell.north || cell.east || cell.south || cell.west) {
                glyph(cell).with(Color::DarkGrey)
            } else {
                glyph(cell).with(Color::White)
            };

            #[cfg(debug_assertions)]
            {
                use unicode_width::UnicodeWidthStr;
                assert_eq!(
                    styled.content().width(),
                    CELL_WIDTH as usize,
                    "Each cell must occupy exactly two character widths."
                );
            }

            write!(out, "{}", styled)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
