pub mod attacks;
pub mod board;
pub mod config;
pub mod feedback;
pub mod game_logic;
pub mod legality;
pub mod mock;
pub mod movegen;

pub use attacks::{is_attacked, king_in_check};
pub use board::{Board, Piece, Square};
pub use game_logic::{ClickOutcome, GameEngine, GameStatus, MoveError, MoveOutcome, Position};
pub use legality::{has_any_legal_move, legal_moves};

/// An input event delivered to the game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The player clicked a square.
    Click(Square),
    /// Pointer click at pixel coordinates relative to the board's top-left corner.
    Pointer { x: i32, y: i32 },
    /// Abandon the current game and start over.
    NewGame,
    Quit,
}

/// Trait for receiving player input.
///
/// Abstracts over interactive terminals and scripted inputs,
/// providing a uniform interface for driving a `GameEngine`.
pub trait InputSource {
    /// Error type for input failures.
    type Error: std::fmt::Debug + std::fmt::Display;

    /// Next pending event, or `None` when input is exhausted.
    fn next_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}

/// Trait for displaying the board and its highlights to the player.
///
/// Mirrors [`InputSource`] on the output side of the game loop.
pub trait BoardDisplay {
    /// Error type for display update failures.
    type Error: std::fmt::Debug + std::fmt::Display;

    /// Show the board with the given feedback and status line.
    ///
    /// Implementations map [`feedback::SquareFeedback`] variants
    /// to output-specific highlights (terminal colors, etc.).
    fn show(
        &mut self,
        board: &Board,
        feedback: &feedback::BoardFeedback,
        status: &str,
    ) -> Result<(), Self::Error>;
}
