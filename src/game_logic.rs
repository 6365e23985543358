use log::{debug, info, trace};
use shakmaty::Color;

use crate::attacks::checkers;
use crate::board::{Board, Piece, Square};
use crate::feedback::{CheckInfo, FeedbackSource};

mod apply;
mod position;

pub use apply::{AppliedMove, MoveError, MoveKind, apply_move};
pub use position::{GameStatus, MoveOutcome, Position};

/// Current game state snapshot for feedback and display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    position: Position,
    selected: Option<Square>,
    legal_destinations: Vec<Square>,
    check_info: Option<CheckInfo>,
}

impl GameState {
    #[inline]
    pub fn turn(&self) -> Color {
        self.position.turn()
    }
}

impl FeedbackSource for GameState {
    fn board(&self) -> &Board {
        self.position.board()
    }

    fn selected(&self) -> Option<Square> {
        self.selected
    }

    fn legal_destinations(&self) -> &[Square] {
        &self.legal_destinations
    }

    fn check_info(&self) -> Option<CheckInfo> {
        self.check_info.clone()
    }
}

/// What a click did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Off-board, empty, or an opponent piece with nothing selected.
    Ignored,
    /// A piece of the side to move is now selected.
    Selected(Square),
    /// A move from the selected square was attempted.
    ///
    /// `reselected` is set when the clicked square holds a piece of the
    /// side now to move, which becomes the new selection. After a move
    /// that ends the game this is judged on the fresh board.
    Attempted {
        outcome: MoveOutcome,
        reselected: Option<Square>,
    },
}

/// Game session: position, selection and the move/turn state machine.
///
/// A finished game (checkmate or stalemate) is reported through the
/// returned [`MoveOutcome`] and the session starts a new game right away.
#[derive(Debug, Default)]
pub struct GameEngine {
    position: Position,
    selected: Option<Square>,
    games_completed: u32,
}

impl GameEngine {
    #[inline]
    pub fn new() -> Self {
        Self::from_position(Position::new_game())
    }

    /// Creates a GameEngine from an existing position.
    pub fn from_position(position: Position) -> Self {
        Self {
            position,
            selected: None,
            games_completed: 0,
        }
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Get the piece at a given square, if any
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.position.piece_at(square)
    }

    #[inline]
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    #[inline]
    pub fn games_completed(&self) -> u32 {
        self.games_completed
    }

    /// Abandon the current game and set up a fresh board.
    pub fn new_game(&mut self) {
        info!("new game");
        self.position = Position::new_game();
        self.selected = None;
    }

    /// Handle a click at pointer coordinates.
    pub fn click_at(&mut self, x: i32, y: i32, cell_size: u32) -> ClickOutcome {
        match Square::from_pointer(x, y, cell_size) {
            Some(square) => self.click(square),
            None => {
                trace!("click at ({x}, {y}) is off the board");
                ClickOutcome::Ignored
            }
        }
    }

    /// Handle a click on `square`.
    ///
    /// With nothing selected this selects a piece of the side to move.
    /// With a selection it attempts the move, clears the selection, and
    /// reselects if the clicked square holds a piece of the side to move.
    pub fn click(&mut self, square: Square) -> ClickOutcome {
        let Some(from) = self.selected.take() else {
            return if self.owns(square) {
                trace!("selected {square}");
                self.selected = Some(square);
                ClickOutcome::Selected(square)
            } else {
                ClickOutcome::Ignored
            };
        };

        let outcome = self.play(from, square);
        let reselected = self.owns(square).then_some(square);
        if let Some(sq) = reselected {
            trace!("reselected {sq}");
        }
        self.selected = reselected;

        ClickOutcome::Attempted {
            outcome,
            reselected,
        }
    }

    /// Play `from -> to` for the side to move.
    ///
    /// Rejections leave the session untouched. A move that ends the game
    /// resets the session to a new game after reporting the final position.
    pub fn play(&mut self, from: Square, to: Square) -> MoveOutcome {
        let outcome = self.position.try_move(from, to);

        match &outcome.result {
            Ok(played) => {
                info!(
                    "{:?} played {}{} ({:?})",
                    played.piece.color, played.from, played.to, played.kind
                );
                self.position = outcome.position;
            }
            Err(err) => {
                debug!("rejected {from}{to}: {err}");
                return outcome;
            }
        }

        match outcome.status {
            GameStatus::Checkmate { winner } => {
                info!("checkmate, {winner:?} wins");
                self.finish_game();
            }
            GameStatus::Stalemate => {
                info!("stalemate, draw");
                self.finish_game();
            }
            GameStatus::Check => debug!("{:?} is in check", outcome.turn()),
            GameStatus::Ongoing => {}
        }
        outcome
    }

    /// Snapshot for rendering.
    pub fn state(&self) -> GameState {
        let turn = self.position.turn();
        let legal_destinations = self
            .selected
            .map(|sq| self.position.legal_destinations(sq))
            .unwrap_or_default();
        let check_info = self
            .position
            .board()
            .king_square(turn)
            .filter(|_| self.position.is_in_check(turn))
            .map(|king_square| CheckInfo {
                king_square,
                checkers: checkers(self.position.board(), turn),
            });

        GameState {
            position: self.position,
            selected: self.selected,
            legal_destinations,
            check_info,
        }
    }

    fn owns(&self, square: Square) -> bool {
        self.position
            .piece_at(square)
            .is_some_and(|p| p.color == self.position.turn())
    }

    fn finish_game(&mut self) {
        self.games_completed += 1;
        self.new_game();
    }
}
