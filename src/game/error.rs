//! Rule violations raised while playing a game.

use std::fmt;

use crate::board::{CalcError, Color, MoveError, SquareId};

/// Error type for moves rejected by `Game`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A player tried to move while it was the other side's turn
    OutOfTurn { expected: Color, found: Color },
    /// The origin square holds no piece
    EmptyOrigin { square: SquareId },
    /// The destination is not among the legal targets of the piece
    IllegalMove { from: SquareId, to: SquareId },
    /// The move notation could not be turned into a move
    Move(MoveError),
    /// A rules query failed
    Calc(CalcError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::OutOfTurn { expected, found } => {
                write!(f, "It is {expected}'s turn, not {found}'s")
            }
            GameError::EmptyOrigin { square } => write!(f, "No piece on {square}"),
            GameError::IllegalMove { from, to } => write!(f, "Illegal move {from} -> {to}"),
            GameError::Move(err) => write!(f, "Invalid move: {err}"),
            GameError::Calc(err) => write!(f, "Rules query failed: {err}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Move(err) => Some(err),
            GameError::Calc(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CalcError> for GameError {
    fn from(err: CalcError) -> Self {
        GameError::Calc(err)
    }
}

impl From<MoveError> for GameError {
    fn from(err: MoveError) -> Self {
        GameError::Move(err)
    }
}
