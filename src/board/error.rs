//! Error types for board, history and rules queries.

use std::fmt;

use super::{Color, SquareId};

/// Error type for square coordinate and notation failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Column out of bounds (must be 1-8)
    ColumnOutOfBounds { col: i32 },
    /// Row out of bounds (must be 1-8)
    RowOutOfBounds { row: i32 },
    /// Not a two-character algebraic name such as `e4`
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::ColumnOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 1-8)")
            }
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 1-8)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for move construction failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// An endpoint name could not be parsed
    Square(SquareError),
    /// Origin and destination are the same square
    SameSquare { square: SquareId },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::Square(err) => write!(f, "{err}"),
            MoveError::SameSquare { square } => {
                write!(f, "Move starts and ends on {square}")
            }
        }
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::Square(err) => Some(err),
            MoveError::SameSquare { .. } => None,
        }
    }
}

impl From<SquareError> for MoveError {
    fn from(err: SquareError) -> Self {
        MoveError::Square(err)
    }
}

/// Error type for game history lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    /// Requested move index is outside `0..len`
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::IndexOutOfRange { index, len } => {
                write!(f, "Move index {index} out of range (history has {len} moves)")
            }
        }
    }
}

impl std::error::Error for HistoryError {}

/// Error type for rules queries that were handed an invalid position
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// Target squares were requested for a square holding no piece
    EmptySquare { square: SquareId },
    /// A king-relative query found no king of the given color
    MissingKing { color: Color },
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::EmptySquare { square } => {
                write!(f, "No piece on square {square}")
            }
            CalcError::MissingKing { color } => {
                write!(f, "No {color} king on the board")
            }
        }
    }
}

impl std::error::Error for CalcError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_error_column_bounds() {
        let err = SquareError::ColumnOutOfBounds { col: 9 };
        assert!(err.to_string().contains('9'));
    }

    #[test]
    fn test_square_error_row_bounds() {
        let err = SquareError::RowOutOfBounds { row: 0 };
        assert!(err.to_string().contains("Row 0"));
    }

    #[test]
    fn test_square_error_invalid_notation() {
        let err = SquareError::InvalidNotation {
            notation: "z9".to_string(),
        };
        assert!(err.to_string().contains("'z9'"));
    }

    #[test]
    fn test_move_error_wraps_square_error() {
        use std::error::Error;

        let err = MoveError::from(SquareError::InvalidNotation {
            notation: "x1".to_string(),
        });
        assert!(err.to_string().contains("'x1'"));
        assert!(err.source().is_some());

        let err = MoveError::SameSquare {
            square: "a1".parse().unwrap(),
        };
        assert!(err.to_string().contains("a1"));
        assert!(err.source().is_none());
    }

    #[test]
    fn test_history_error_mentions_index_and_len() {
        let err = HistoryError::IndexOutOfRange { index: 7, len: 3 };
        let text = err.to_string();
        assert!(text.contains('7'));
        assert!(text.contains('3'));
    }

    #[test]
    fn test_calc_error_display() {
        let err = CalcError::EmptySquare {
            square: "e4".parse().unwrap(),
        };
        assert!(err.to_string().contains("e4"));

        let err = CalcError::MissingKing {
            color: Color::Black,
        };
        assert!(err.to_string().contains("black"));
    }
}
