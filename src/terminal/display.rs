use std::io::{self, Write};

use shakmaty::{Color, File, Square};

use crate::feedback::SquareFeedback;
use crate::{BoardRenderer, BoardView};

/// Terminal-based board renderer.
///
/// Draws the 8×8 grid in window order (top row first) for the session's
/// orientation, with piece letters and ANSI color-coded highlights.
#[derive(Debug)]
pub struct TerminalRenderer<W = io::Stdout> {
    out: W,
    clear: bool,
}

impl TerminalRenderer {
    /// Render to stdout, clearing the screen before every frame.
    pub fn stdout() -> Self {
        Self {
            out: io::stdout(),
            clear: true,
        }
    }
}

impl<W: Write> TerminalRenderer<W> {
    /// Render to any writer, appending frames.
    pub fn new(out: W) -> Self {
        Self { out, clear: false }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Error type for terminal display operations.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("failed to write to terminal: {0}")]
    Io(#[from] io::Error),
}

impl<W: Write> BoardRenderer for TerminalRenderer<W> {
    type Error = DisplayError;

    fn draw(&mut self, view: &BoardView<'_>) -> Result<(), Self::Error> {
        if self.clear {
            write!(self.out, "\x1B[2J\x1B[H")?;
        }
        render_board(&mut self.out, view)
    }
}

/// Render one frame to any writer. Extracted for testability.
fn render_board(w: &mut impl Write, view: &BoardView<'_>) -> Result<(), DisplayError> {
    for grid_row in 0..8 {
        let rank = view.orientation.rank_at_grid_row(grid_row);
        write!(w, " {} ", rank.char())?;
        for file in File::ALL {
            let square = Square::from_coords(file, rank);
            let symbol = view.board.piece_at(square).map_or('·', |piece| piece.char());
            write!(w, "{}", format_square(symbol, view.feedback.get(square)))?;
        }
        writeln!(w)?;
    }
    writeln!(w, "    a  b  c  d  e  f  g  h")?;

    let side = match view.turn {
        Color::White => "White",
        Color::Black => "Black",
    };
    match view.selection.square() {
        Some(square) => writeln!(w, "{side} to move, {square} selected")?,
        None => writeln!(w, "{side} to move")?,
    }
    w.flush()?;
    Ok(())
}

/// Wrap a cell symbol in the ANSI background for its feedback.
fn format_square(symbol: char, feedback: Option<SquareFeedback>) -> String {
    let background = match feedback {
        Some(SquareFeedback::Destination) => "44",
        Some(SquareFeedback::Capture) => "41",
        Some(SquareFeedback::Origin) => "42",
        Some(SquareFeedback::Check) => "45",
        Some(SquareFeedback::Checker) => "43",
        None => return format!(" {symbol} "),
    };
    format!("\x1b[{background}m {symbol} \x1b[0m")
}
