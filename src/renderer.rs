use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{Attribute, Color, Print, SetAttribute, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};

use crate::model::{Board, Unit, Vial};

const SYMBOLS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

// Black and white are intentionally omitted as they would likely blend in too
// well with the terminal's background.
const FG_COLORS: [Color; 12] = [
    Color::DarkRed,
    Color::DarkGreen,
    Color::DarkYellow,
    Color::DarkBlue,
    Color::DarkMagenta,
    Color::DarkCyan,
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
];

const UNIT_WIDTH: usize = 3;
const NUMBER_PAD: usize = 2;
const SPACE_BETWEEN_VIALS: usize = 4;
const FALLBACK_TERM_WIDTH: usize = 80;

/// The symbol shown inside a unit's cell.
pub fn symbol_for(unit: Unit) -> char {
    SYMBOLS[unit as usize % SYMBOLS.len()] as char
}

/// The foreground color of a unit's cell.
pub fn color_for(unit: Unit) -> Color {
    FG_COLORS[unit as usize % FG_COLORS.len()]
}

/// Draws boards as rows of numbered, horizontally-laid-out vials using ANSI
/// styling. Output goes to whatever `Write` the caller hands over, normally
/// stderr so that the rendering never mixes with piped stdout.
pub struct Renderer {
    term_width: usize,
}

impl Renderer {
    pub fn new() -> Self {
        let term_width = terminal::size()
            .map(|(width, _)| width as usize)
            .unwrap_or(FALLBACK_TERM_WIDTH);
        Self { term_width }
    }

    pub fn with_width(term_width: usize) -> Self {
        Self { term_width }
    }

    /// Clears the screen and draws every vial, wrapping to a new row of
    /// vials whenever the next one would run past the terminal width.
    pub fn draw_board(&self, out: &mut impl Write, board: &Board) -> io::Result<()> {
        queue!(out, Clear(ClearType::All), cursor::MoveTo(0, 0))?;

        let vial_draw_size =
            NUMBER_PAD + 1 + UNIT_WIDTH * board.get_vial_size() + SPACE_BETWEEN_VIALS;
        let mut pos_x = 0;

        for (vial_index, vial) in board.get_vials().iter().enumerate() {
            self.draw_vial(out, vial_index, vial, board.get_vial_size())?;
            queue!(out, Print(" ".repeat(SPACE_BETWEEN_VIALS)))?;

            pos_x += vial_draw_size;
            if pos_x + vial_draw_size >= self.term_width {
                pos_x = 0;
                queue!(out, Print("\n\n"))?;
            }
        }

        queue!(out, Print("\n\n"))?;
        Ok(())
    }

    fn draw_vial(
        &self,
        out: &mut impl Write,
        vial_index: usize,
        vial: &Vial,
        vial_size: usize,
    ) -> io::Result<()> {
        // Players address vials by their 1-based displayed number.
        let display_index = format!("{:>width$}", vial_index + 1, width = NUMBER_PAD);
        queue!(out, Print(display_index), Print("."))?;

        for slot in 0..vial_size {
            match vial.get_units().get(slot) {
                Some(&unit) => {
                    queue!(
                        out,
                        SetAttribute(Attribute::Reverse),
                        SetForegroundColor(color_for(unit)),
                        Print(format!(" {} ", symbol_for(unit))),
                        SetAttribute(Attribute::Reset),
                    )?;
                }
                None => {
                    queue!(out, Print(" ".repeat(UNIT_WIDTH)))?;
                }
            }
        }

        Ok(())
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
