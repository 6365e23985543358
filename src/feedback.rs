use crate::board::{Board, Square};

/// Type of visual feedback for an individual square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SquareFeedback {
    /// Legal destination on an empty square
    Destination,
    /// Legal destination that captures an opponent piece
    Capture,
    /// The selected piece
    Origin,
    /// King of the side to move while it is in check
    Check,
    /// Opponent piece giving check
    Checker,
}

/// Contains the set of squares and their associated feedback types for the current board state.
///
/// `BoardFeedback` is computed by `compute_feedback()` and consumed by the display surface to
/// highlight the selection, its legal destinations, and an attacked king.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardFeedback {
    squares: Vec<(Square, SquareFeedback)>,
}

impl BoardFeedback {
    /// Create empty feedback (no highlights)
    #[inline]
    pub const fn new() -> Self {
        Self {
            squares: Vec::new(),
        }
    }

    /// Get all square feedback entries
    #[inline]
    pub fn squares(&self) -> &[(Square, SquareFeedback)] {
        &self.squares
    }

    /// Get feedback for a specific square, if any
    #[inline]
    pub fn get(&self, square: Square) -> Option<SquareFeedback> {
        self.squares
            .iter()
            .find(|(sq, _)| *sq == square)
            .map(|(_, feedback)| *feedback)
    }

    /// Set feedback for a square, replacing any existing entry.
    pub fn set(&mut self, square: Square, feedback: SquareFeedback) {
        match self.squares.iter_mut().find(|(sq, _)| *sq == square) {
            Some(entry) => entry.1 = feedback,
            None => self.squares.push((square, feedback)),
        }
    }

    /// Returns true if there are no feedback squares to display.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }
}

impl From<Vec<(Square, SquareFeedback)>> for BoardFeedback {
    fn from(squares: Vec<(Square, SquareFeedback)>) -> Self {
        Self { squares }
    }
}

/// Check details for the side to move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckInfo {
    pub king_square: Square,
    pub checkers: Vec<Square>,
}

/// Game state information needed to compute feedback
///
/// This trait defines what the feedback system needs from the game engine.
pub trait FeedbackSource {
    fn board(&self) -> &Board;

    /// The currently selected square, if any
    fn selected(&self) -> Option<Square>;

    /// Legal destinations of the selected piece (empty without a selection)
    fn legal_destinations(&self) -> &[Square];

    /// Present when the side to move is in check
    fn check_info(&self) -> Option<CheckInfo>;
}

/// Compute visual feedback based on current game state.
///
/// - Piece selected: the origin and its legal destinations
/// - Nothing selected while in check: the king and the pieces checking it
/// - Otherwise: nothing
pub fn compute_feedback(source: &impl FeedbackSource) -> BoardFeedback {
    match (source.selected(), source.check_info()) {
        (Some(from), _) => show_destinations_for(source, from),
        (None, Some(check)) => show_check(&check),
        (None, None) => BoardFeedback::default(),
    }
}

/// Show legal destinations of the selected piece
fn show_destinations_for(source: &impl FeedbackSource, from: Square) -> BoardFeedback {
    let board = source.board();
    std::iter::once((from, SquareFeedback::Origin))
        .chain(
            source
                .legal_destinations()
                .iter()
                .map(|&to| classify_destination(board, to)),
        )
        .collect::<Vec<_>>()
        .into()
}

fn show_check(check: &CheckInfo) -> BoardFeedback {
    let mut feedback = BoardFeedback::new();
    feedback.set(check.king_square, SquareFeedback::Check);
    for &sq in &check.checkers {
        feedback.set(sq, SquareFeedback::Checker);
    }
    feedback
}

/// Classify a destination as either a capture or regular destination
fn classify_destination(board: &Board, to: Square) -> (Square, SquareFeedback) {
    if board.is_empty_at(to) {
        (to, SquareFeedback::Destination)
    } else {
        (to, SquareFeedback::Capture)
    }
}
