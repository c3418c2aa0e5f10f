use log::trace;

use super::super::{Color, Piece, PieceKind, SquareId};
use super::GameCalc;

const KING_HOME_COL: u8 = 5;

const fn rook_home_col(queenside: bool) -> u8 {
    if queenside {
        1
    } else {
        8
    }
}

impl GameCalc<'_> {
    /// True once any move has started from `color`'s king home square
    #[must_use]
    pub fn king_has_moved(&self, color: Color) -> bool {
        self.course
            .has_departed(SquareId::from_parts(KING_HOME_COL, color.home_row()))
    }

    /// True once any move has started from the home corner of `color`'s rook
    #[must_use]
    pub fn rook_has_moved(&self, color: Color, queenside: bool) -> bool {
        self.course
            .has_departed(SquareId::from_parts(rook_home_col(queenside), color.home_row()))
    }

    /// Where the king lands when castling from `king_square`
    #[must_use]
    pub fn castling_destination(king_square: SquareId, queenside: bool) -> SquareId {
        let col = if queenside { 3 } else { 7 };
        SquareId::from_parts(col, king_square.row())
    }

    /// Every square between king and rook is empty
    #[must_use]
    pub fn is_space_for_castling(&self, king_square: SquareId, queenside: bool) -> bool {
        let king_col = king_square.col();
        let cols = if queenside {
            2..king_col
        } else {
            king_col + 1..8
        };
        cols.map(|col| SquareId::from_parts(col, king_square.row()))
            .all(|id| self.board.square(id).is_empty())
    }

    /// The king is not attacked now and would not be on any square it crosses.
    ///
    /// On the queenside the column next to the rook is not checked.
    #[must_use]
    pub fn is_castling_safe(&self, king_square: SquareId, queenside: bool) -> bool {
        if self.is_attacked(king_square) {
            return false;
        }
        let king_col = king_square.col();
        let cols = if queenside {
            3..king_col
        } else {
            king_col + 1..8
        };
        cols.map(|col| SquareId::from_parts(col, king_square.row()))
            .all(|transit| !self.would_be_attacked(king_square, transit, transit))
    }

    /// Whether the king on `king_square` may castle to the given side now
    #[must_use]
    pub fn is_castling_possible(&self, king_square: SquareId, queenside: bool) -> bool {
        let Some(king) = self.board.piece(king_square) else {
            return false;
        };
        if king.kind != PieceKind::King {
            return false;
        }
        let color = king.color;
        let home = SquareId::from_parts(KING_HOME_COL, color.home_row());
        let corner = SquareId::from_parts(rook_home_col(queenside), color.home_row());

        let possible = king_square == home
            && self.board.piece(corner) == Some(Piece::new(color, PieceKind::Rook))
            && !self.king_has_moved(color)
            && !self.rook_has_moved(color, queenside)
            && self.is_space_for_castling(king_square, queenside)
            && self.is_castling_safe(king_square, queenside);
        trace!(
            "{color} castling {} from {king_square}: {possible}",
            if queenside { "queenside" } else { "kingside" }
        );
        possible
    }
}
