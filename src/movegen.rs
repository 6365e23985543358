//! Pseudo-legal move generation.
//!
//! Destinations follow each piece's movement shape and blocking rules
//! only. Whether a move leaves the mover's own king attacked is decided
//! later, in [`crate::legality`].

use shakmaty::Role;

use crate::board::{Board, Piece, Square, forward};

const ORTHOGONAL: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];
const KING_STEPS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Column the king starts on and castles from.
pub const KING_START_COL: u8 = 4;

/// Which side of the board a castling move goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    King,
    Queen,
}

impl CastleSide {
    /// Side for a king landing on `dest_col`, if that is a castling column.
    pub const fn from_dest_col(dest_col: u8) -> Option<Self> {
        match dest_col {
            6 => Some(Self::King),
            2 => Some(Self::Queen),
            _ => None,
        }
    }

    /// Column the king lands on.
    pub const fn king_dest_col(self) -> u8 {
        match self {
            Self::King => 6,
            Self::Queen => 2,
        }
    }

    /// Column the rook starts on.
    pub const fn rook_from_col(self) -> u8 {
        match self {
            Self::King => 7,
            Self::Queen => 0,
        }
    }

    /// Column the rook lands on.
    pub const fn rook_to_col(self) -> u8 {
        match self {
            Self::King => 5,
            Self::Queen => 3,
        }
    }

    /// Columns strictly between king and rook that must be empty.
    pub const fn between_cols(self) -> &'static [u8] {
        match self {
            Self::King => &[5, 6],
            Self::Queen => &[1, 2, 3],
        }
    }
}

/// True if moving `piece` from `from` to `to` is a castling hop: a king
/// moving two columns.
#[inline]
pub fn is_castling(piece: Piece, from: Square, to: Square) -> bool {
    piece.role == Role::King && from.col().abs_diff(to.col()) == 2
}

/// Pseudo-legal destinations of the piece on `from`.
///
/// Returns an empty list when `from` is empty.
pub fn pseudo_moves(board: &Board, from: Square) -> Vec<Square> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    let mut moves = Vec::with_capacity(28);
    match piece.role {
        Role::Pawn => pawn_moves(board, from, piece, &mut moves),
        Role::Rook => slide(board, from, piece, &ORTHOGONAL, &mut moves),
        Role::Bishop => slide(board, from, piece, &DIAGONAL, &mut moves),
        Role::Queen => {
            slide(board, from, piece, &ORTHOGONAL, &mut moves);
            slide(board, from, piece, &DIAGONAL, &mut moves);
        }
        Role::Knight => leap(board, from, piece, &KNIGHT_JUMPS, &mut moves),
        Role::King => {
            leap(board, from, piece, &KING_STEPS, &mut moves);
            castling_moves(board, from, piece, &mut moves);
        }
    }
    moves
}

fn pawn_moves(board: &Board, from: Square, pawn: Piece, out: &mut Vec<Square>) {
    let dir = forward(pawn.color);

    if let Some(one) = from.offset(dir, 0)
        && board.is_empty_at(one)
    {
        out.push(one);
        if !pawn.has_moved
            && let Some(two) = one.offset(dir, 0)
            && board.is_empty_at(two)
        {
            out.push(two);
        }
    }

    for d_col in [-1, 1] {
        if let Some(target) = from.offset(dir, d_col)
            && board
                .piece_at(target)
                .is_some_and(|p| p.color != pawn.color)
        {
            out.push(target);
        }
    }
}

/// Cast rays until the edge or the first occupied square, which is
/// included only when it holds an enemy piece.
fn slide(board: &Board, from: Square, piece: Piece, dirs: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(d_row, d_col) in dirs {
        let mut cur = from;
        while let Some(next) = cur.offset(d_row, d_col) {
            match board.piece_at(next) {
                None => out.push(next),
                Some(other) => {
                    if other.color != piece.color {
                        out.push(next);
                    }
                    break;
                }
            }
            cur = next;
        }
    }
}

fn leap(board: &Board, from: Square, piece: Piece, offsets: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(d_row, d_col) in offsets {
        if let Some(target) = from.offset(d_row, d_col)
            && board.piece_at(target).is_none_or(|p| p.color != piece.color)
        {
            out.push(target);
        }
    }
}

/// Castling hops for an unmoved king. Neither check nor attacked
/// transit squares are considered here.
fn castling_moves(board: &Board, from: Square, king: Piece, out: &mut Vec<Square>) {
    if king.has_moved {
        return;
    }
    let row = from.row();

    for side in [CastleSide::King, CastleSide::Queen] {
        let rook_ready = Square::new(row, side.rook_from_col())
            .and_then(|sq| board.piece_at(sq))
            .is_some_and(|p| p.role == Role::Rook && p.color == king.color && !p.has_moved);
        let path_clear = side
            .between_cols()
            .iter()
            .filter_map(|&col| Square::new(row, col))
            .all(|sq| board.is_empty_at(sq));

        if rook_ready
            && path_clear
            && let Some(dest) = Square::new(row, side.king_dest_col())
        {
            out.push(dest);
        }
    }
}
