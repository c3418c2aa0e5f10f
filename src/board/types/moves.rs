//! Move type.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::piece::Piece;
use super::square::{Square, SquareId};
use crate::board::error::MoveError;
use crate::board::Board;

/// A move from one square to another on a particular board.
///
/// Both endpoints are captured by value when the move is built, so a move
/// keeps describing the position it was created in: which piece left the
/// origin and what stood on the destination. Board mutations only use the
/// endpoint ids. Two moves are equal when their endpoint ids are equal.
#[derive(Clone, Copy, Debug)]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    /// Create a move between two squares of the same board
    pub fn new(from: Square, to: Square) -> Result<Self, MoveError> {
        if from.id() == to.id() {
            return Err(MoveError::SameSquare { square: from.id() });
        }
        Ok(Move { from, to })
    }

    /// For generated moves whose endpoints are known to differ
    #[inline]
    pub(crate) const fn new_unchecked(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Create a move from two square ids, reading the endpoints from `board`
    pub fn between(board: &Board, from: SquareId, to: SquareId) -> Result<Self, MoveError> {
        Move::new(*board.square(from), *board.square(to))
    }

    /// Create a move from two algebraic names such as `"e2"` and `"e4"`
    pub fn parse(board: &Board, from: &str, to: &str) -> Result<Self, MoveError> {
        Move::between(board, from.parse()?, to.parse()?)
    }

    /// Origin square as it stood when the move was built
    #[inline]
    #[must_use]
    pub const fn from(&self) -> &Square {
        &self.from
    }

    /// Destination square as it stood when the move was built
    #[inline]
    #[must_use]
    pub const fn to(&self) -> &Square {
        &self.to
    }

    #[inline]
    #[must_use]
    pub const fn from_id(&self) -> SquareId {
        self.from.id()
    }

    #[inline]
    #[must_use]
    pub const fn to_id(&self) -> SquareId {
        self.to.id()
    }

    /// The piece being moved, if the origin held one
    #[inline]
    #[must_use]
    pub const fn piece(&self) -> Option<Piece> {
        self.from.piece()
    }

    /// Signed column distance travelled (destination minus origin)
    #[inline]
    #[must_use]
    pub fn col_delta(&self) -> i32 {
        i32::from(self.to.id().col()) - i32::from(self.from.id().col())
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from.id() == other.from.id() && self.to.id() == other.to.id()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.id().hash(state);
        self.to.id().hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from.id(), self.to.id())
    }
}
