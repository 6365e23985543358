use shakmaty::Color;

use super::apply::{AppliedMove, MoveError, apply_move};
use crate::attacks::king_in_check;
use crate::board::{Board, Piece, Square};
use crate::legality::{has_any_legal_move, legal_moves};

/// Status of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    /// True for checkmate and stalemate.
    #[inline]
    pub fn is_game_over(self) -> bool {
        matches!(self, Self::Checkmate { .. } | Self::Stalemate)
    }
}

/// Board plus side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    board: Board,
    turn: Color,
}

impl Default for Position {
    fn default() -> Self {
        Self::new_game()
    }
}

impl Position {
    /// Standard starting layout, White to move.
    pub fn new_game() -> Self {
        Self::from_parts(Board::standard(), Color::White)
    }

    pub fn from_parts(board: Board, turn: Color) -> Self {
        Self { board, turn }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }

    /// Legal destinations of the piece on `square`, whichever side owns it.
    pub fn legal_destinations(&self, square: Square) -> Vec<Square> {
        legal_moves(&self.board, square)
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        king_in_check(&self.board, color)
    }

    /// Check, checkmate or stalemate for the side to move.
    pub fn status(&self) -> GameStatus {
        let in_check = self.is_in_check(self.turn);
        match (has_any_legal_move(&self.board, self.turn), in_check) {
            (true, true) => GameStatus::Check,
            (true, false) => GameStatus::Ongoing,
            (false, true) => GameStatus::Checkmate {
                winner: self.turn.other(),
            },
            (false, false) => GameStatus::Stalemate,
        }
    }

    /// Try to play `from -> to` for the side to move.
    ///
    /// On success the returned position has the move applied and the
    /// turn flipped. On rejection it equals `self`.
    pub fn try_move(&self, from: Square, to: Square) -> MoveOutcome {
        let mut board = self.board;
        match apply_move(&mut board, self.turn, from, to) {
            Ok(played) => {
                let position = Self::from_parts(board, self.turn.other());
                MoveOutcome {
                    result: Ok(played),
                    position,
                    status: position.status(),
                }
            }
            Err(err) => MoveOutcome {
                result: Err(err),
                position: *self,
                status: self.status(),
            },
        }
    }
}

/// Result of [`Position::try_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub result: Result<AppliedMove, MoveError>,
    /// Position after the attempt; unchanged when rejected.
    pub position: Position,
    /// Status of the side to move in `position`.
    pub status: GameStatus,
}

impl MoveOutcome {
    #[inline]
    pub fn applied(&self) -> bool {
        self.result.is_ok()
    }

    #[inline]
    pub fn board(&self) -> &Board {
        self.position.board()
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.position.turn()
    }
}
