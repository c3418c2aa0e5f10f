//! Chess rules: board, move history, legality queries and a turn-taking game.

pub mod board;
pub mod game;

pub use board::{Board, Color, GameCalc, GameCourse, Move, Piece, PieceKind, SquareId};
pub use game::{Game, GameError, GameStatus};
