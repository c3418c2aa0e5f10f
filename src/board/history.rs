//! Record of the moves played in a game.

use std::fmt;
use std::time::Duration;

use super::{Color, GameCalc, HistoryError, Move, Piece, PieceKind, SquareId};

/// One executed move, frozen as it stood just before it was made.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveInfo {
    mv: Move,
    remaining_time: Duration,
}

impl MoveInfo {
    #[must_use]
    pub const fn new(mv: Move, remaining_time: Duration) -> Self {
        MoveInfo { mv, remaining_time }
    }

    #[inline]
    #[must_use]
    pub const fn mv(&self) -> &Move {
        &self.mv
    }

    /// Clock reading of the mover when the move was recorded
    #[inline]
    #[must_use]
    pub const fn remaining_time(&self) -> Duration {
        self.remaining_time
    }

    /// Color of the player that made the move
    #[inline]
    #[must_use]
    pub fn color(&self) -> Option<Color> {
        self.mv.piece().map(|p| p.color)
    }

    #[inline]
    #[must_use]
    pub const fn from_id(&self) -> SquareId {
        self.mv.from_id()
    }

    #[inline]
    #[must_use]
    pub const fn to_id(&self) -> SquareId {
        self.mv.to_id()
    }

    /// Piece that left the origin square
    #[inline]
    #[must_use]
    pub const fn moving_piece(&self) -> Option<Piece> {
        self.mv.from().piece()
    }

    /// Piece that stood on the destination before the move
    #[inline]
    #[must_use]
    pub const fn captured_square_piece(&self) -> Option<Piece> {
        self.mv.to().piece()
    }

    #[must_use]
    pub fn is_capture(&self) -> bool {
        GameCalc::is_capture(&self.mv)
    }

    #[must_use]
    pub fn is_castling(&self) -> bool {
        GameCalc::is_castling(&self.mv)
    }

    #[must_use]
    pub fn is_king_side_castling(&self) -> bool {
        GameCalc::is_king_side_castling(&self.mv)
    }

    #[must_use]
    pub fn is_queen_side_castling(&self) -> bool {
        GameCalc::is_queen_side_castling(&self.mv)
    }

    #[must_use]
    pub fn is_en_passant(&self) -> bool {
        GameCalc::is_en_passant(&self.mv)
    }

    #[must_use]
    pub fn is_promotion(&self) -> bool {
        GameCalc::is_promotion(&self.mv)
    }
}

impl fmt::Display for MoveInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mv)
    }
}

/// Append-only history of a game.
///
/// Each entry must be added before the board executes the move, so that
/// the snapshot still shows what stood on the destination.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameCourse {
    infos: Vec<MoveInfo>,
    // one bit per SquareId::index that some move has started from
    departed: u64,
}

impl GameCourse {
    #[must_use]
    pub fn new() -> Self {
        GameCourse::default()
    }

    /// Append a move; call this before mutating the board.
    pub fn add_move_info(&mut self, mv: Move, remaining_time: Duration) {
        log::debug!("recording move {} ({} so far)", mv, self.infos.len());
        self.departed |= 1u64 << mv.from_id().index();
        self.infos.push(MoveInfo::new(mv, remaining_time));
    }

    /// A copy of this history with one more move appended
    #[must_use]
    pub fn extended(&self, mv: Move, remaining_time: Duration) -> GameCourse {
        let mut course = self.clone();
        course.add_move_info(mv, remaining_time);
        course
    }

    /// The move at `index`, where the first move has index 0
    pub fn move_info(&self, index: usize) -> Result<&MoveInfo, HistoryError> {
        self.infos.get(index).ok_or(HistoryError::IndexOutOfRange {
            index,
            len: self.infos.len(),
        })
    }

    #[must_use]
    pub fn last_move_info(&self) -> Option<&MoveInfo> {
        self.infos.last()
    }

    #[inline]
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.infos.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.infos.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoveInfo> {
        self.infos.iter()
    }

    /// True once any recorded move started from `id`
    #[inline]
    #[must_use]
    pub const fn has_departed(&self, id: SquareId) -> bool {
        self.departed & (1u64 << id.index()) != 0
    }

    /// Captured pieces in the order they were taken
    #[must_use]
    pub fn captured_pieces(&self) -> Vec<Piece> {
        self.infos
            .iter()
            .filter(|info| info.is_capture())
            .filter_map(|info| {
                if info.is_en_passant() {
                    info.color()
                        .map(|color| Piece::new(color.opponent(), PieceKind::Pawn))
                } else {
                    info.captured_square_piece()
                }
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a GameCourse {
    type Item = &'a MoveInfo;
    type IntoIter = std::slice::Iter<'a, MoveInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.infos.iter()
    }
}

impl fmt::Display for GameCourse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---------------------")?;
        for info in &self.infos {
            writeln!(f, "{info}")?;
        }
        write!(f, "---------------------")
    }
}
