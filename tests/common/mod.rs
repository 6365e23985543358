#![allow(dead_code)]

use hotseat_chess::{Board, Piece, Position, Square};
use shakmaty::fen::Fen;
use shakmaty::{Color, Role};

pub fn sq(name: &str) -> Square {
    name.parse().expect("invalid square in test")
}

/// Build a position from a FEN string.
///
/// Pawns count as unmoved on their starting rank. Kings and rooks count
/// as unmoved only when the castling field still grants the matching
/// right. Everything else counts as moved.
pub fn position_from_fen(fen: &str) -> Position {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    let castling = fields.get(2).copied().unwrap_or("-");
    let turn = match fields.get(1).copied() {
        Some("b") => Color::Black,
        _ => Color::White,
    };

    let placement = fen.parse::<Fen>().expect("invalid FEN").into_setup().board;
    let mut board = Board::empty();
    for s in shakmaty::Square::ALL {
        let Some(p) = placement.piece_at(s) else {
            continue;
        };
        let square = Square::from(s);
        let name = square.to_string();
        let unmoved = match (p.role, p.color) {
            (Role::Pawn, Color::White) => square.row() == 6,
            (Role::Pawn, Color::Black) => square.row() == 1,
            (Role::King, Color::White) => name == "e1" && castling.contains(['K', 'Q']),
            (Role::King, Color::Black) => name == "e8" && castling.contains(['k', 'q']),
            (Role::Rook, color) => {
                let right = match (name.as_str(), color) {
                    ("h1", Color::White) => Some('K'),
                    ("a1", Color::White) => Some('Q'),
                    ("h8", Color::Black) => Some('k'),
                    ("a8", Color::Black) => Some('q'),
                    _ => None,
                };
                right.is_some_and(|c| castling.contains(c))
            }
            _ => false,
        };
        board.set(
            square,
            Some(Piece {
                role: p.role,
                color: p.color,
                has_moved: !unmoved,
            }),
        );
    }
    Position::from_parts(board, turn)
}

/// Every legal (from, to) pair for the side to move.
pub fn all_legal_moves(position: &Position) -> Vec<(Square, Square)> {
    position
        .board()
        .pieces_of(position.turn())
        .flat_map(|(from, _)| {
            position
                .legal_destinations(from)
                .into_iter()
                .map(move |to| (from, to))
        })
        .collect()
}

/// Positions reached by a deterministic playout from `start`, which is
/// included. Stops early when the side to move has no legal move.
pub fn playout(start: Position, plies: usize, seed: usize) -> Vec<Position> {
    let mut positions = vec![start];
    let mut current = start;
    for ply in 0..plies {
        let moves = all_legal_moves(&current);
        if moves.is_empty() {
            break;
        }
        let (from, to) = moves[(seed * 31 + ply * 17 + 7) % moves.len()];
        let outcome = current.try_move(from, to);
        assert!(outcome.applied(), "legal move {from}{to} was rejected");
        current = outcome.position;
        positions.push(current);
    }
    positions
}
