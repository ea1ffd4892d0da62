/// Core value types shared by the board, the legality engine and search.
///
/// Pieces are plain `(Side, PieceKind)` values; the board owns where they
/// stand, so none of these types carry a position.
use std::fmt;

pub use crate::game_state::game_state::GameState;
pub use crate::game_state::move_record::MoveRecord;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Material value used by evaluation and capture ordering.
    #[inline]
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 1000,
        }
    }

    /// Bishops, rooks and queens slide along rays.
    #[inline]
    pub const fn is_ray_piece(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

/// Identity of a piece: which side owns it and what it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub side: Side,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(side: Side, kind: PieceKind) -> Self {
        Self { side, kind }
    }

    #[inline]
    pub const fn value(self) -> i32 {
        self.kind.value()
    }
}

pub const BOARD_SIZE: i8 = 8;

/// A board square addressed by `(row, col)`, both in `0..8`.
///
/// Row 0 is Black's back rank. Squares can only be built through the checked
/// constructors, so every `Square` value is on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8 {
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

    /// Step by `(d_row, d_col)`, or `None` if that leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..BOARD_SIZE).contains(&row) && (0..BOARD_SIZE).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE as u8).flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Square { row, col }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'a' + self.col);
        let rank = char::from(b'8' - self.row);
        write!(f, "{file}{rank}")
    }
}

/// A `(from, to)` transition. Promotion is implicit (always to a queen).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
}

impl ChessMove {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Who won a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Side(Side),
    Draw,
}

/// Terminal status of a game, recomputed after every move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Checkmate(Side),
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    #[inline]
    pub const fn winner(self) -> Option<Winner> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Checkmate(side) => Some(Winner::Side(side)),
            GameStatus::Stalemate => Some(Winner::Draw),
        }
    }
}
