use super::super::attack_tables::{squares_of, KNIGHT_REACH};
use super::super::SquareId;
use super::GameCalc;

impl GameCalc<'_> {
    pub(crate) fn knight_targets(&self, from: SquareId) -> Vec<SquareId> {
        self.step_targets(from, KNIGHT_REACH[from.index()])
    }

    /// Squares of `reach` that are empty or hold a foe of the piece on `from`
    pub(crate) fn step_targets(&self, from: SquareId, reach: u64) -> Vec<SquareId> {
        let Some(mover) = self.board.piece(from) else {
            return Vec::new();
        };
        squares_of(reach)
            .filter(|&to| {
                self.board
                    .piece(to)
                    .map_or(true, |piece| piece.color != mover.color)
            })
            .collect()
    }
}
