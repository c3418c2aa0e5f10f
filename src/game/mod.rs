//! Turn-taking game on top of the board rules.
//!
//! `Game` checks whose turn it is and whether a move is legal, records
//! the move in the history, and then applies it to the board with the
//! mutation that matches its category.

mod error;
mod promotion;

use std::fmt;
use std::time::Duration;

use log::{debug, info};

use crate::board::{
    Board, Color, GameCalc, GameCourse, Move, PromotionChoice, RulesConfig, SquareId,
};

pub use error::GameError;
pub use promotion::{AlwaysQueen, PromotionRequest, PromotionResolver};

/// State of the game from the point of view of the side to move
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Checkmate { winner: Color },
    Stalemate,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// Record `mv` in `course` and then execute it on `board`.
///
/// The move must already be known to be legal. Returns the piece chosen
/// by `resolver` when the move is a pawn trade.
pub fn apply_move(
    board: &mut Board,
    course: &mut GameCourse,
    mv: Move,
    remaining_time: Duration,
    resolver: &mut dyn PromotionResolver,
) -> Option<PromotionChoice> {
    course.add_move_info(mv, remaining_time);

    if GameCalc::is_castling(&mv) {
        board.make_castling_move(&mv);
        None
    } else if GameCalc::is_promotion(&mv) {
        let color = mv.piece().map_or(Color::White, |p| p.color);
        let request = PromotionRequest {
            color,
            from: mv.from_id(),
            to: mv.to_id(),
        };
        let choice = resolver.resolve(&request);
        debug!("{color} pawn on {} becomes {choice}", mv.to_id());
        board.make_pawn_trade_move(&mv, choice);
        Some(choice)
    } else if GameCalc::is_en_passant(&mv) {
        board.make_en_passant_move(&mv);
        None
    } else {
        board.make_normal_move(&mv);
        None
    }
}

/// A game in progress: position, history, rule settings and the side to move.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    course: GameCourse,
    config: RulesConfig,
    to_move: Color,
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    /// Standard starting position with White to move
    #[must_use]
    pub fn new() -> Self {
        Game::with_config(RulesConfig::default())
    }

    #[must_use]
    pub fn with_config(config: RulesConfig) -> Self {
        Game::from_position(Board::starting_position(), Color::White, config)
    }

    /// Continue from an arbitrary position with an empty history
    #[must_use]
    pub fn from_position(board: Board, to_move: Color, config: RulesConfig) -> Self {
        Game {
            board,
            course: GameCourse::new(),
            config,
            to_move,
        }
    }

    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub const fn course(&self) -> &GameCourse {
        &self.course
    }

    #[inline]
    #[must_use]
    pub const fn to_move(&self) -> Color {
        self.to_move
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Rule queries over the current position
    #[must_use]
    pub fn calc(&self) -> GameCalc<'_> {
        GameCalc::with_config(&self.board, &self.course, self.config)
    }

    /// Legal moves of `color`; empty when it is not that side's turn
    #[must_use]
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        if color != self.to_move {
            return Vec::new();
        }
        self.calc().legal_moves(color)
    }

    /// Play `mv` for `color`, who must be the side to move.
    ///
    /// The move is re-read from the current board, so a move built on an
    /// older copy of the position is judged by what stands there now.
    pub fn play(
        &mut self,
        color: Color,
        mv: Move,
        remaining_time: Duration,
        resolver: &mut dyn PromotionResolver,
    ) -> Result<Option<PromotionChoice>, GameError> {
        if color != self.to_move {
            return Err(GameError::OutOfTurn {
                expected: self.to_move,
                found: color,
            });
        }
        let (from, to) = (mv.from_id(), mv.to_id());
        let piece = self
            .board
            .piece(from)
            .ok_or(GameError::EmptyOrigin { square: from })?;
        if piece.color != color || !self.calc().targets(from)?.contains(&to) {
            return Err(GameError::IllegalMove { from, to });
        }

        let mv = Move::between(&self.board, from, to)?;
        let choice = apply_move(
            &mut self.board,
            &mut self.course,
            mv,
            remaining_time,
            resolver,
        );
        self.to_move = color.opponent();

        if let Ok(status @ (GameStatus::Checkmate { .. } | GameStatus::Stalemate)) = self.status() {
            info!("game over after {mv}: {status}");
        }
        Ok(choice)
    }

    /// Play a move given by algebraic names such as `"e2"`, `"e4"`
    pub fn play_notation(
        &mut self,
        from: &str,
        to: &str,
        remaining_time: Duration,
        resolver: &mut dyn PromotionResolver,
    ) -> Result<Option<PromotionChoice>, GameError> {
        let from: SquareId = from.parse().map_err(crate::board::MoveError::from)?;
        let to: SquareId = to.parse().map_err(crate::board::MoveError::from)?;
        let mv = Move::between(&self.board, from, to)?;
        self.play(self.to_move, mv, remaining_time, resolver)
    }

    /// Number of move sequences of length `depth` from the current position
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        let moves = self.legal_moves(self.to_move);
        if depth <= 1 {
            return moves.len() as u64;
        }
        moves
            .into_iter()
            .map(|mv| {
                let mut next = self.clone();
                apply_move(
                    &mut next.board,
                    &mut next.course,
                    mv,
                    Duration::ZERO,
                    &mut AlwaysQueen,
                );
                next.to_move = self.to_move.opponent();
                next.perft(depth - 1)
            })
            .sum()
    }

    /// Checkmate or stalemate of the side to move, if any
    pub fn status(&self) -> Result<GameStatus, GameError> {
        let calc = self.calc();
        if calc.has_legal_move(self.to_move) {
            return Ok(GameStatus::InProgress);
        }
        Ok(if calc.is_check(self.to_move)? {
            GameStatus::Checkmate {
                winner: self.to_move.opponent(),
            }
        } else {
            GameStatus::Stalemate
        })
    }
}
