//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move counts for known positions
//! - `special_moves.rs` - Castling, en passant and pawn trades
//! - `checkmate.rs` - Check, checkmate and stalemate detection
//! - `clone.rs` - Board and history copies stay independent
//! - `proptest.rs` - Property-based tests

mod checkmate;
mod perft;

use std::time::Duration;

use crate::board::{Board, BoardBuilder, GameCourse, Move, SquareId};
use crate::game::{apply_move, AlwaysQueen};

pub(super) fn sq(name: &str) -> SquareId {
    name.parse().unwrap()
}

/// Board from the piece-placement field of a FEN record, rank 8 first
pub(super) fn position(placement: &str) -> Board {
    BoardBuilder::new().placement(placement).unwrap().build()
}

/// Record and execute a move given by square names
pub(super) fn play(board: &mut Board, course: &mut GameCourse, from: &str, to: &str) {
    let mv = Move::parse(board, from, to).unwrap();
    apply_move(board, course, mv, Duration::ZERO, &mut AlwaysQueen);
}
