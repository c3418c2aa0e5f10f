//! Rule queries over a board and its game history.
//!
//! `targets_no_check` answers where a piece could go by geometry alone;
//! `targets` adds castling and removes destinations that leave the own
//! king attacked. Speculative checks run on a private copy of the board
//! and never touch the live position.

mod castling;
mod classify;
mod kings;
mod knights;
mod pawns;
mod sliders;

use std::thread;

use log::trace;
use parking_lot::Mutex;

use super::{
    Board, CalcError, Color, GameCourse, KingCapturePolicy, Move, Piece, PieceKind, RulesConfig,
    Square, SquareId,
};

/// Legality engine borrowing a position and the history that led to it.
#[derive(Clone, Copy, Debug)]
pub struct GameCalc<'a> {
    board: &'a Board,
    course: &'a GameCourse,
    config: RulesConfig,
}

impl<'a> GameCalc<'a> {
    #[must_use]
    pub fn new(board: &'a Board, course: &'a GameCourse) -> Self {
        GameCalc::with_config(board, course, RulesConfig::default())
    }

    #[must_use]
    pub const fn with_config(board: &'a Board, course: &'a GameCourse, config: RulesConfig) -> Self {
        GameCalc {
            board,
            course,
            config,
        }
    }

    #[inline]
    #[must_use]
    pub const fn board(&self) -> &'a Board {
        self.board
    }

    #[inline]
    #[must_use]
    pub const fn course(&self) -> &'a GameCourse {
        self.course
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &RulesConfig {
        &self.config
    }

    fn occupant(&self, id: SquareId) -> Result<Piece, CalcError> {
        self.board
            .piece(id)
            .ok_or(CalcError::EmptySquare { square: id })
    }

    /// Destinations reachable by piece geometry, ignoring the own king's safety
    pub fn targets_no_check(&self, id: SquareId) -> Result<Vec<SquareId>, CalcError> {
        let piece = self.occupant(id)?;
        Ok(match piece.kind {
            PieceKind::Pawn => self.pawn_targets(id),
            PieceKind::Knight => self.knight_targets(id),
            PieceKind::King => self.king_step_targets(id),
            kind => self.slider_targets(id, kind),
        })
    }

    /// Legal destinations of the piece on `id`
    pub fn targets(&self, id: SquareId) -> Result<Vec<SquareId>, CalcError> {
        let piece = self.occupant(id)?;
        let mut targets = self.targets_no_check(id)?;

        if piece.kind == PieceKind::King {
            for queenside in [true, false] {
                if self.is_castling_possible(id, queenside) {
                    targets.push(Self::castling_destination(id, queenside));
                }
            }
        }

        let enemy_king = Piece::new(piece.color.opponent(), PieceKind::King);
        let holds_enemy_king = |to: &SquareId| self.board.piece(*to) == Some(enemy_king);
        match self.config.king_capture {
            KingCapturePolicy::Force => {
                if targets.iter().any(holds_enemy_king) {
                    targets.retain(holds_enemy_king);
                    return Ok(targets);
                }
            }
            KingCapturePolicy::Forbid => targets.retain(|to| !holds_enemy_king(to)),
        }

        if piece.kind == PieceKind::King {
            targets.retain(|&to| !self.would_be_attacked(id, to, to));
        } else if let Some(king) = self.board.king_square(piece.color) {
            let king = king.id();
            targets.retain(|&to| !self.would_be_attacked(id, to, king));
        } else {
            trace!("no {} king on the board, skipping safety filter", piece.color);
        }
        Ok(targets)
    }

    /// True if a piece of the other color can reach the occupied square `id`.
    ///
    /// Empty squares are never attacked. Attackers of a king are judged by
    /// geometry alone; attackers of any other piece by their legal targets.
    #[must_use]
    pub fn is_attacked(&self, id: SquareId) -> bool {
        let Some(piece) = self.board.piece(id) else {
            return false;
        };
        let king_attacked = piece.kind == PieceKind::King;
        self.board
            .squares_with_pieces_of(piece.color.opponent())
            .any(|enemy| {
                let reach = if king_attacked {
                    self.targets_no_check(enemy.id())
                } else {
                    self.targets(enemy.id())
                };
                reach.is_ok_and(|targets| targets.contains(&id))
            })
    }

    /// Whether `addressed` would be attacked after relocating the piece on
    /// `from` to `to`. The live board is left untouched.
    ///
    /// A pawn stepping diagonally onto an empty square also takes the pawn
    /// it passed, so en passant captures that open a line are seen.
    #[must_use]
    pub fn would_be_attacked(&self, from: SquareId, to: SquareId, addressed: SquareId) -> bool {
        let mut board = self.board.clone();
        let step = Move::new_unchecked(*self.board.square(from), *self.board.square(to));
        if Self::is_en_passant(&step) {
            board.clear_square(SquareId::from_parts(to.col(), from.row()));
        }
        board.relocate(from, to);
        let attacked = GameCalc::with_config(&board, self.course, self.config).is_attacked(addressed);
        trace!("{from} -> {to}: {addressed} attacked = {attacked}");
        attacked
    }

    fn moves_from(&self, square: &Square) -> Vec<Move> {
        self.targets(square.id())
            .unwrap_or_default()
            .into_iter()
            .map(|to| Move::new_unchecked(*square, *self.board.square(to)))
            .collect()
    }

    /// All legal moves of `color`, grouped by origin in a1..h8 order
    #[must_use]
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        self.board
            .squares_with_pieces_of(color)
            .flat_map(|square| self.moves_from(square))
            .collect()
    }

    /// Same moves as `legal_moves`, computed on worker threads and sorted by endpoints
    #[must_use]
    pub fn legal_moves_parallel(&self, color: Color) -> Vec<Move> {
        let origins: Vec<&Square> = self.board.squares_with_pieces_of(color).collect();
        if origins.len() < self.config.parallel_threshold.max(2) {
            return self.legal_moves(color);
        }

        let workers = thread::available_parallelism()
            .map_or(2, |n| n.get())
            .min(origins.len());
        let chunk = origins.len().div_ceil(workers);
        let moves = Mutex::new(Vec::new());

        thread::scope(|scope| {
            for batch in origins.chunks(chunk) {
                let moves = &moves;
                scope.spawn(move || {
                    let found: Vec<Move> = batch.iter().flat_map(|sq| self.moves_from(sq)).collect();
                    moves.lock().extend(found);
                });
            }
        });

        let mut moves = moves.into_inner();
        moves.sort_by_key(|mv| (mv.from_id(), mv.to_id()));
        moves
    }

    /// Cheaper than `legal_moves(color).is_empty()`: stops at the first move
    #[must_use]
    pub fn has_legal_move(&self, color: Color) -> bool {
        self.board
            .squares_with_pieces_of(color)
            .any(|square| self.targets(square.id()).is_ok_and(|t| !t.is_empty()))
    }
}
