use super::super::{PieceKind, SquareId};
use super::GameCalc;

const ROOK_RAYS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const BISHOP_RAYS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const QUEEN_RAYS: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

impl GameCalc<'_> {
    /// Walk each ray until the first occupied square, keeping it only if it holds a foe
    pub(crate) fn slider_targets(&self, from: SquareId, kind: PieceKind) -> Vec<SquareId> {
        debug_assert!(kind.is_slider());
        let rays: &[(i32, i32)] = match kind {
            PieceKind::Rook => &ROOK_RAYS,
            PieceKind::Bishop => &BISHOP_RAYS,
            PieceKind::Queen => &QUEEN_RAYS,
            _ => return Vec::new(),
        };
        let Some(mover) = self.board.piece(from) else {
            return Vec::new();
        };

        let mut targets = Vec::new();
        for &(d_col, d_row) in rays {
            let mut current = from;
            while let Some(next) = current.offset(d_col, d_row) {
                match self.board.piece(next) {
                    None => targets.push(next),
                    Some(piece) => {
                        if piece.color != mover.color {
                            targets.push(next);
                        }
                        break;
                    }
                }
                current = next;
            }
        }
        targets
    }
}
