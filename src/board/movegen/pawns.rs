use super::super::{Piece, PieceKind, SquareId};
use super::GameCalc;

impl GameCalc<'_> {
    pub(crate) fn pawn_targets(&self, from: SquareId) -> Vec<SquareId> {
        let Some(pawn) = self.board.piece(from) else {
            return Vec::new();
        };
        let color = pawn.color;
        let mut targets = Vec::new();

        let Some(ahead) = Self::one_row_ahead(from, color) else {
            return targets;
        };

        if self.board.square(ahead).is_empty() {
            targets.push(ahead);
            if from.row() == Self::equivalent(2, color) {
                if let Some(two_ahead) = Self::two_rows_ahead(from, color) {
                    if self.board.square(two_ahead).is_empty() {
                        targets.push(two_ahead);
                    }
                }
            }
        }

        let diagonals = [
            Self::left_column(ahead, color),
            Self::right_column(ahead, color),
        ];
        for diagonal in diagonals.into_iter().flatten() {
            if self.board.square(diagonal).holds(color.opponent()) {
                targets.push(diagonal);
            }
        }

        if let Some(target) = self.en_passant_target(from, pawn) {
            targets.push(target);
        }
        targets
    }

    /// The en passant destination for `pawn` on `from`, if the previous move allows one
    fn en_passant_target(&self, from: SquareId, pawn: Piece) -> Option<SquareId> {
        let color = pawn.color;
        if from.row() != Self::equivalent(5, color) {
            return None;
        }
        let last = self.course.last_move_info()?;
        let foe_pawn = Piece::new(color.opponent(), PieceKind::Pawn);
        if last.moving_piece() != Some(foe_pawn) {
            return None;
        }
        let (start, end) = (last.from_id(), last.to_id());
        let double_step = start.row() == Self::equivalent(7, color)
            && end.row() == Self::equivalent(5, color)
            && start.col() == end.col();
        let beside = (i32::from(end.col()) - i32::from(from.col())).abs() == 1;
        if !double_step || !beside || self.board.piece(end) != Some(foe_pawn) {
            return None;
        }

        let target = SquareId::from_parts(end.col(), Self::equivalent(6, color));
        self.board.square(target).is_empty().then_some(target)
    }
}
