//! Chess board representation and rule queries.
//!
//! A `Board` holds 64 squares; a `GameCourse` records the moves that were
//! played on it. `GameCalc` combines both to answer which destinations are
//! legal, whether a square is attacked, and whether a side is mated.
//! Castling, en passant and promotions are supported.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Color, GameCalc, GameCourse};
//!
//! let board = Board::new(true);
//! let course = GameCourse::new();
//! let moves = GameCalc::new(&board, &course).legal_moves(Color::White);
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod attack_tables;
mod builder;
mod config;
mod debug;
mod error;
mod history;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use config::{KingCapturePolicy, RulesConfig};
pub use error::{CalcError, HistoryError, MoveError, SquareError};
pub use history::{GameCourse, MoveInfo};
pub use movegen::GameCalc;
pub use state::Board;
pub use types::{Color, Move, Piece, PieceKind, PromotionChoice, Square, SquareId};
