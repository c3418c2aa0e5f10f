//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//! ```

pub use super::{
    Board, BoardBuilder, CalcError, Color, GameCalc, GameCourse, Move, MoveInfo, Piece, PieceKind,
    PromotionChoice, RulesConfig, Square, SquareId,
};
