//! Square coordinates and board cells.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};
use crate::board::error::SquareError;

/// Immutable position of one cell: column 1-8 (files a-h) and row 1-8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SquareId {
    // field order gives a1 < b1 < ... < h8 for the derived Ord
    row: u8,
    col: u8,
}

impl SquareId {
    /// Create a square id, failing when either coordinate is outside 1-8
    pub fn new(col: i32, row: i32) -> Result<Self, SquareError> {
        if !(1..=8).contains(&col) {
            return Err(SquareError::ColumnOutOfBounds { col });
        }
        if !(1..=8).contains(&row) {
            return Err(SquareError::RowOutOfBounds { row });
        }
        Ok(SquareId::from_parts(col as u8, row as u8))
    }

    /// Create a square id if the coordinates lie on the board
    #[inline]
    #[must_use]
    pub fn checked(col: i32, row: i32) -> Option<Self> {
        Self::is_inside_board(col, row).then(|| SquareId::from_parts(col as u8, row as u8))
    }

    /// Returns true when `(col, row)` names a square of the 8x8 board
    #[inline]
    #[must_use]
    pub const fn is_inside_board(col: i32, row: i32) -> bool {
        col >= 1 && col <= 8 && row >= 1 && row <= 8
    }

    #[inline]
    pub(crate) const fn from_parts(col: u8, row: u8) -> Self {
        debug_assert!(col >= 1 && col <= 8 && row >= 1 && row <= 8);
        SquareId { row, col }
    }

    /// Column (1 = file a, 8 = file h)
    #[inline]
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Row (1 = White's home row)
    #[inline]
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Index 0-63 with a1=0, b1=1, ..., h8=63
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.row as usize - 1) * 8 + (self.col as usize - 1)
    }

    /// Square id for an index 0-63
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        debug_assert!(idx < 64);
        SquareId::from_parts((idx % 8) as u8 + 1, (idx / 8) as u8 + 1)
    }

    /// Square shifted by the given column and row deltas, if still on the board
    #[inline]
    #[must_use]
    pub fn offset(self, d_col: i32, d_row: i32) -> Option<Self> {
        SquareId::checked(i32::from(self.col) + d_col, i32::from(self.row) + d_row)
    }

    /// Color of the cell: white when column and row differ in parity
    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        if (self.col + self.row) % 2 == 1 {
            Color::White
        } else {
            Color::Black
        }
    }

    /// All 64 square ids in index order
    pub fn all() -> impl Iterator<Item = SquareId> {
        (0..64).map(SquareId::from_index)
    }
}

impl fmt::Display for SquareId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.col - 1 + b'a') as char, self.row)
    }
}

impl FromStr for SquareId {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let col = match file.to_ascii_lowercase() {
            f @ 'a'..='h' => f as u8 - b'a' + 1,
            _ => return Err(invalid()),
        };
        let row = match rank {
            r @ '1'..='8' => r as u8 - b'0',
            _ => return Err(invalid()),
        };
        Ok(SquareId::from_parts(col, row))
    }
}

impl TryFrom<(i32, i32)> for SquareId {
    type Error = SquareError;

    fn try_from((col, row): (i32, i32)) -> Result<Self, Self::Error> {
        SquareId::new(col, row)
    }
}

/// One cell of a board: a fixed id, a fixed color and an optional piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    id: SquareId,
    color: Color,
    piece: Option<Piece>,
}

impl Square {
    /// Create an empty square; its color is derived here once
    #[must_use]
    pub const fn new(id: SquareId) -> Self {
        Square {
            id,
            color: id.color(),
            piece: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> SquareId {
        self.id
    }

    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    #[must_use]
    pub const fn piece(&self) -> Option<Piece> {
        self.piece
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.piece.is_none()
    }

    /// Returns true if a piece of `color` stands here
    #[inline]
    #[must_use]
    pub fn holds(&self, color: Color) -> bool {
        self.piece.is_some_and(|p| p.color == color)
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, piece: Piece) {
        self.piece = Some(piece);
    }

    #[inline]
    pub(crate) fn clear(&mut self) -> Option<Piece> {
        self.piece.take()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)?;
        if let Some(piece) = self.piece {
            write!(f, " {{{piece}}}")?;
        }
        Ok(())
    }
}
