//! Attack and check detection.
//!
//! A square counts as attacked when it is a pseudo-legal destination of
//! some piece of the attacking color. Because this reuses the move
//! generator, a king's castling hop attacks its landing square and a
//! pawn's forward push attacks the empty square in front of it, while a
//! pawn's diagonal only attacks occupied squares.

use shakmaty::Color;

use crate::board::{Board, Square};
use crate::movegen::pseudo_moves;

/// True if any piece of `by` can reach `target` with a pseudo-legal move.
pub fn is_attacked(board: &Board, target: Square, by: Color) -> bool {
    board
        .pieces_of(by)
        .any(|(from, _)| pseudo_moves(board, from).contains(&target))
}

/// Squares holding a piece of `by` that attacks `target`.
pub fn attackers(board: &Board, target: Square, by: Color) -> Vec<Square> {
    board
        .pieces_of(by)
        .filter(|&(from, _)| pseudo_moves(board, from).contains(&target))
        .map(|(from, _)| from)
        .collect()
}

/// True if `color`'s king is attacked by the other side.
///
/// A board without a king of that color is never in check.
pub fn king_in_check(board: &Board, color: Color) -> bool {
    board
        .king_square(color)
        .is_some_and(|king| is_attacked(board, king, color.other()))
}

/// Pieces giving check to `color`'s king.
pub fn checkers(board: &Board, color: Color) -> Vec<Square> {
    board
        .king_square(color)
        .map(|king| attackers(board, king, color.other()))
        .unwrap_or_default()
}
