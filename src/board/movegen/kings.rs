use super::super::attack_tables::KING_REACH;
use super::super::{Color, PieceKind, Square, SquareId};
use super::GameCalc;
use crate::board::CalcError;

impl GameCalc<'_> {
    pub(crate) fn king_step_targets(&self, from: SquareId) -> Vec<SquareId> {
        self.step_targets(from, KING_REACH[from.index()])
    }

    /// The square holding `color`'s king
    pub fn king_square(&self, color: Color) -> Result<&Square, CalcError> {
        self.board
            .find_square(PieceKind::King, color)
            .ok_or(CalcError::MissingKing { color })
    }

    /// True when `color`'s king stands on an attacked square
    pub fn is_check(&self, color: Color) -> Result<bool, CalcError> {
        let king = self.king_square(color)?;
        Ok(self.is_attacked(king.id()))
    }

    /// King attacked and no legal move left for its side.
    ///
    /// Every piece of `color` is considered, not only the king: a check that
    /// another piece can block or capture is not mate.
    pub fn is_checkmate(&self, color: Color) -> Result<bool, CalcError> {
        let mate = self.is_check(color)? && !self.has_legal_move(color);
        if mate {
            log::info!("{color} is checkmated");
        }
        Ok(mate)
    }

    /// King not attacked but its side cannot move
    pub fn is_stalemate(&self, color: Color) -> Result<bool, CalcError> {
        Ok(!self.is_check(color)? && !self.has_legal_move(color))
    }
}
