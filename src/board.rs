use std::fmt;
use std::str::FromStr;

use shakmaty::{Color, File, Rank, Role};
use thiserror::Error;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: u8 = 8;

/// Error when parsing a square name such as `"e2"`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid square notation: '{0}'")]
pub struct ParseSquareError(String);

/// A board square addressed by row and column.
///
/// Row 0 is Black's back rank (rank 8) and row 7 is White's (rank 1).
/// Column 0 is the a-file. Both coordinates are always in `0..8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Returns `None` when either coordinate is off the board.
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Step by a signed (row, col) offset, staying on the board.
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if row < 0 || col < 0 {
            return None;
        }
        Self::new(row as u8, col as u8)
    }

    /// Map pointer coordinates to the square under them, given the
    /// pixel size of one cell. The board's top-left corner is (0, 0).
    pub fn from_pointer(x: i32, y: i32, cell_size: u32) -> Option<Self> {
        if x < 0 || y < 0 || cell_size == 0 {
            return None;
        }
        let col = x as u32 / cell_size;
        let row = y as u32 / cell_size;
        if row >= BOARD_SIZE as u32 || col >= BOARD_SIZE as u32 {
            return None;
        }
        Self::new(row as u8, col as u8)
    }

    /// All 64 squares, row by row from Black's back rank.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square { row, col }))
    }
}

impl From<Square> for shakmaty::Square {
    fn from(square: Square) -> Self {
        shakmaty::Square::from_coords(
            File::new(u32::from(square.col)),
            Rank::new(u32::from(BOARD_SIZE - 1 - square.row)),
        )
    }
}

impl From<shakmaty::Square> for Square {
    fn from(square: shakmaty::Square) -> Self {
        Square {
            row: BOARD_SIZE - 1 - square.rank() as u8,
            col: square.file() as u8,
        }
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<shakmaty::Square>()
            .map(Square::from)
            .map_err(|_| ParseSquareError(s.to_string()))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", shakmaty::Square::from(*self))
    }
}

/// A piece on the board.
///
/// `has_moved` flips to true the first time the piece moves and never
/// goes back. It gates the pawn double step and castling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub role: Role,
    pub color: Color,
    pub has_moved: bool,
}

impl Piece {
    /// A piece that has not moved yet.
    #[inline]
    pub const fn new(role: Role, color: Color) -> Self {
        Self {
            role,
            color,
            has_moved: false,
        }
    }

    /// FEN-style letter: uppercase for White, lowercase for Black.
    pub fn char(self) -> char {
        shakmaty::Piece {
            role: self.role,
            color: self.color,
        }
        .char()
    }
}

/// Row a pawn of `color` advances toward with each step.
#[inline]
pub fn forward(color: Color) -> i8 {
    color.fold_wb(-1, 1)
}

const BACK_ROW: [Role; 8] = [
    Role::Rook,
    Role::Knight,
    Role::Bishop,
    Role::Queen,
    Role::King,
    Role::Bishop,
    Role::Knight,
    Role::Rook,
];

/// An 8×8 grid where each cell holds at most one piece.
///
/// `Board` is `Copy`: hypothetical moves are tried on a copy, never on
/// the original.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// A board with no pieces.
    pub const fn empty() -> Self {
        Self {
            cells: [[None; 8]; 8],
        }
    }

    /// The standard starting layout.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for (col, &role) in BACK_ROW.iter().enumerate() {
            board.cells[0][col] = Some(Piece::new(role, Color::Black));
            board.cells[1][col] = Some(Piece::new(Role::Pawn, Color::Black));
            board.cells[6][col] = Some(Piece::new(Role::Pawn, Color::White));
            board.cells[7][col] = Some(Piece::new(role, Color::White));
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.row as usize][square.col as usize]
    }

    #[inline]
    pub fn is_empty_at(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Place `piece` on `square`, replacing whatever was there.
    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[square.row as usize][square.col as usize] = piece;
    }

    /// Remove and return the piece on `square`.
    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.cells[square.row as usize][square.col as usize].take()
    }

    /// Every occupied square with its piece.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Every occupied square of `color`.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }

    /// Square of `color`'s king, if it is on the board.
    ///
    /// With more than one king of a color, the last one in row order wins.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .filter(|(_, p)| p.role == Role::King)
            .map(|(sq, _)| sq)
            .last()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let sq = Square { row, col };
                let ch = self.piece_at(sq).map_or('.', Piece::char);
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
