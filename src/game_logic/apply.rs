use shakmaty::{Color, Role};
use thiserror::Error;

use crate::attacks::king_in_check;
use crate::board::{BOARD_SIZE, Board, Piece, Square};
use crate::legality::{castled, castling_is_safe, would_expose_check};
use crate::movegen::{CastleSide, is_castling, pseudo_moves};

/// Why a requested move was not applied.
///
/// A rejected move never changes the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("no piece on the source square")]
    EmptySource,
    #[error("the piece belongs to the side not on move")]
    NotYourTurn,
    #[error("the piece cannot reach that square")]
    Unreachable,
    #[error("the move leaves the king in check")]
    LeavesKingInCheck,
    #[error("cannot castle while in check")]
    CastleOutOfCheck,
    #[error("cannot castle through an attacked square")]
    CastleThroughAttack,
}

/// How an applied move was classified from its geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Normal,
    Castle(CastleSide),
    /// A pawn reached the last rank and became a queen.
    Promotion,
}

/// Record of a move that was applied to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AppliedMove {
    pub from: Square,
    pub to: Square,
    /// The moving piece as it stood before the move.
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub kind: MoveKind,
}

/// Apply the move `from -> to` for `turn`, mutating `board` only on success.
pub fn apply_move(
    board: &mut Board,
    turn: Color,
    from: Square,
    to: Square,
) -> Result<AppliedMove, MoveError> {
    let piece = board.piece_at(from).ok_or(MoveError::EmptySource)?;
    if piece.color != turn {
        return Err(MoveError::NotYourTurn);
    }
    if !pseudo_moves(board, from).contains(&to) {
        return Err(MoveError::Unreachable);
    }

    if is_castling(piece, from, to) {
        return castle(board, piece, from, to);
    }

    if would_expose_check(board, from, to, piece.color) {
        return Err(MoveError::LeavesKingInCheck);
    }

    board.take(from);
    let captured = board.piece_at(to);
    let mut moved = Piece {
        has_moved: true,
        ..piece
    };
    let mut kind = MoveKind::Normal;
    if moved.role == Role::Pawn && (to.row() == 0 || to.row() == BOARD_SIZE - 1) {
        moved.role = Role::Queen;
        kind = MoveKind::Promotion;
    }
    board.set(to, Some(moved));

    Ok(AppliedMove {
        from,
        to,
        piece,
        captured,
        kind,
    })
}

/// Move king and rook together. The result is built on a copy and
/// swapped in only once both pieces have been placed.
fn castle(
    board: &mut Board,
    king: Piece,
    from: Square,
    to: Square,
) -> Result<AppliedMove, MoveError> {
    if king_in_check(board, king.color) {
        return Err(MoveError::CastleOutOfCheck);
    }
    if !castling_is_safe(board, from.row(), to.col(), king.color) {
        return Err(MoveError::CastleThroughAttack);
    }
    let (after, side) = castled(board, from, to).ok_or(MoveError::Unreachable)?;
    if king_in_check(&after, king.color) {
        return Err(MoveError::CastleThroughAttack);
    }
    *board = after;

    Ok(AppliedMove {
        from,
        to,
        piece: king,
        captured: None,
        kind: MoveKind::Castle(side),
    })
}
