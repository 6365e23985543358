//! Filtering pseudo-legal moves down to legal ones.

use shakmaty::Color;

use crate::attacks::{is_attacked, king_in_check};
use crate::board::{Board, Piece, Square};
use crate::movegen::{CastleSide, KING_START_COL, is_castling, pseudo_moves};

/// Would `color`'s king be attacked after moving the piece on `from` to `to`?
///
/// The move is simulated on a copy as a plain relocation: `has_moved` is
/// left alone and neither the castling rook nor promotion is applied.
pub fn would_expose_check(board: &Board, from: Square, to: Square, color: Color) -> bool {
    let mut scratch = *board;
    let piece = scratch.take(from);
    scratch.set(to, piece);
    king_in_check(&scratch, color)
}

/// Columns the king occupies while castling to `dest_col`: its start,
/// the square it crosses and the square it lands on.
fn king_path(dest_col: u8) -> [u8; 3] {
    match CastleSide::from_dest_col(dest_col) {
        Some(CastleSide::King) => [KING_START_COL, 5, 6],
        _ => [KING_START_COL, 3, 2],
    }
}

/// True if none of the squares the king passes through while castling
/// on `row` toward `dest_col` is attacked by the other side.
pub fn castling_is_safe(board: &Board, row: u8, dest_col: u8, color: Color) -> bool {
    king_path(dest_col)
        .iter()
        .filter_map(|&col| Square::new(row, col))
        .all(|sq| !is_attacked(board, sq, color.other()))
}

/// The board after castling the king on `from` to `to`, with both king
/// and rook marked as moved. `None` if the pieces are not in place.
pub fn castled(board: &Board, from: Square, to: Square) -> Option<(Board, CastleSide)> {
    let side = CastleSide::from_dest_col(to.col())?;
    let rook_from = Square::new(from.row(), side.rook_from_col())?;
    let rook_to = Square::new(from.row(), side.rook_to_col())?;

    let mut scratch = *board;
    let king = scratch.take(from)?;
    let rook = scratch.take(rook_from)?;
    scratch.set(
        to,
        Some(Piece {
            has_moved: true,
            ..king
        }),
    );
    scratch.set(
        rook_to,
        Some(Piece {
            has_moved: true,
            ..rook
        }),
    );
    Some((scratch, side))
}

/// True if castling `from -> to` passes every safety rule: not out of
/// check, no attacked square on the king's path, and the king not left
/// in check once king and rook stand on their new squares.
///
/// The last rule catches pawns, which only attack occupied squares.
pub fn castling_allowed(board: &Board, from: Square, to: Square, color: Color) -> bool {
    !king_in_check(board, color)
        && castling_is_safe(board, from.row(), to.col(), color)
        && castled(board, from, to).is_some_and(|(after, _)| !king_in_check(&after, color))
}

/// Whether the pseudo-legal move `from -> to` survives the legality filter.
fn is_legal(board: &Board, from: Square, to: Square) -> bool {
    let Some(piece) = board.piece_at(from) else {
        return false;
    };

    if is_castling(piece, from, to) {
        castling_allowed(board, from, to, piece.color)
    } else {
        !would_expose_check(board, from, to, piece.color)
    }
}

/// Legal destinations of the piece on `from`.
///
/// Returns an empty list when `from` is empty.
pub fn legal_moves(board: &Board, from: Square) -> Vec<Square> {
    pseudo_moves(board, from)
        .into_iter()
        .filter(|&to| is_legal(board, from, to))
        .collect()
}

/// True if `color` has at least one legal move.
pub fn has_any_legal_move(board: &Board, color: Color) -> bool {
    board.pieces_of(color).any(|(from, _)| {
        pseudo_moves(board, from)
            .into_iter()
            .any(|to| is_legal(board, from, to))
    })
}
