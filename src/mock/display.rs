use std::io::{self, Write};

use crate::BoardDisplay;
use crate::board::{BOARD_SIZE, Board, Square};
use crate::feedback::{BoardFeedback, SquareFeedback};

/// Terminal-based board display.
///
/// Renders the board as an 8×8 grid of piece letters with ANSI
/// color-coded squares matching the feedback type (destinations,
/// captures, etc.), followed by a status line.
#[derive(Debug)]
pub struct TerminalDisplay {
    color: bool,
}

impl TerminalDisplay {
    pub fn with_color(color: bool) -> Self {
        Self { color }
    }
}

/// Error type for terminal display operations.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("failed to write to terminal: {0}")]
    Io(#[from] io::Error),
}

impl BoardDisplay for TerminalDisplay {
    type Error = DisplayError;

    fn show(
        &mut self,
        board: &Board,
        feedback: &BoardFeedback,
        status: &str,
    ) -> Result<(), Self::Error> {
        render_board(&mut io::stdout(), board, feedback, status, self.color)
    }
}

/// Render the board to any writer. Extracted for testability.
fn render_board(
    w: &mut impl Write,
    board: &Board,
    feedback: &BoardFeedback,
    status: &str,
    color: bool,
) -> Result<(), DisplayError> {
    for row in 0..BOARD_SIZE {
        write!(w, " {} ", BOARD_SIZE - row)?;
        for col in 0..BOARD_SIZE {
            let Some(square) = Square::new(row, col) else {
                continue;
            };
            let symbol = board.piece_at(square).map_or('·', |p| p.char());
            let highlight = feedback.get(square).filter(|_| color);
            write!(w, "{}", format_square(symbol, highlight))?;
        }
        writeln!(w)?;
    }
    writeln!(w, "    a  b  c  d  e  f  g  h")?;
    writeln!(w, "{status}")?;
    w.flush()?;
    Ok(())
}

/// Map a feedback variant to an ANSI-colored cell string.
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
