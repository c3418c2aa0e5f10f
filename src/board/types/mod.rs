//! Core chess types.
//!
//! This module contains the value types used throughout the rules engine:
//! - `PieceKind`, `Color` and `Piece` - immutable piece values
//! - `PromotionChoice` - what a pawn may become on the last rank
//! - `SquareId` and `Square` - coordinates and board cells
//! - `Move` - an origin/destination pair captured from a board

mod moves;
mod piece;
mod square;

pub use moves::Move;
pub use piece::{Color, Piece, PieceKind, PromotionChoice};
pub use square::{Square, SquareId};
