//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece on top of an empty or a
//! standard board.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, PieceKind, SquareId};
//!
//! let e1: SquareId = "e1".parse().unwrap();
//! let e8: SquareId = "e8".parse().unwrap();
//! let board = BoardBuilder::new()
//!     .piece(e1, Color::White, PieceKind::King)
//!     .piece(e8, Color::Black, PieceKind::King)
//!     .build();
//! assert_eq!(board.piece_count(), 2);
//! ```

use super::{Board, Color, Piece, PieceKind, SquareError, SquareId};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    base: Option<Board>,
    pieces: Vec<(SquareId, Option<Piece>)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder::default()
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            base: Some(Board::starting_position()),
            pieces: Vec::new(),
        }
    }

    /// Place a piece on the board, replacing any earlier placement there.
    #[must_use]
    pub fn piece(mut self, square: SquareId, color: Color, kind: PieceKind) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, Some(Piece::new(color, kind))));
        self
    }

    /// Place a piece by algebraic notation such as `"e4"`.
    pub fn place(self, notation: &str, color: Color, kind: PieceKind) -> Result<Self, SquareError> {
        let square: SquareId = notation.parse()?;
        Ok(self.piece(square, color, kind))
    }

    /// Place every piece of a FEN piece-placement field, rank 8 first.
    ///
    /// Only the placement is read; side to move and castling state live
    /// elsewhere.
    pub fn placement(mut self, placement: &str) -> Result<Self, SquareError> {
        let invalid = || SquareError::InvalidNotation {
            notation: placement.to_string(),
        };
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(invalid());
        }
        for (rank_idx, rank) in ranks.into_iter().enumerate() {
            let row = 8 - rank_idx as i32;
            let mut col = 1;
            for c in rank.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as i32;
                    continue;
                }
                let kind = PieceKind::from_char(c).ok_or_else(invalid)?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                self = self.piece(SquareId::new(col, row)?, color, kind);
                col += 1;
            }
            if col != 9 {
                return Err(invalid());
            }
        }
        Ok(self)
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: SquareId) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, None));
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = self.base.unwrap_or_else(Board::empty);
        for (square, piece) in self.pieces {
            match piece {
                Some(piece) => board.set_piece(square, piece),
                None => {
                    board.clear_square(square);
                }
            }
        }
        board
    }
}
