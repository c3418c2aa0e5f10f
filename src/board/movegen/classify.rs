//! Move categories and color-relative coordinate helpers.
//!
//! The classifiers look only at the snapshots stored inside a `Move`, so
//! they must be asked before the move is executed.

use super::super::{Color, Move, PieceKind, SquareId};
use super::GameCalc;

/// Direction of travel for a color's pawns along the rows
#[inline]
const fn forward(color: Color) -> i32 {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}

impl GameCalc<'_> {
    /// Row or column seen from `color`'s side: identity for White, `9 - x` for Black
    #[inline]
    #[must_use]
    pub const fn equivalent(coord: u8, color: Color) -> u8 {
        match color {
            Color::White => coord,
            Color::Black => 9 - coord,
        }
    }

    #[inline]
    #[must_use]
    pub fn one_row_ahead(id: SquareId, color: Color) -> Option<SquareId> {
        id.offset(0, forward(color))
    }

    #[inline]
    #[must_use]
    pub fn two_rows_ahead(id: SquareId, color: Color) -> Option<SquareId> {
        id.offset(0, 2 * forward(color))
    }

    /// Neighbour on the left from `color`'s point of view
    #[inline]
    #[must_use]
    pub fn left_column(id: SquareId, color: Color) -> Option<SquareId> {
        id.offset(-forward(color), 0)
    }

    /// Neighbour on the right from `color`'s point of view
    #[inline]
    #[must_use]
    pub fn right_column(id: SquareId, color: Color) -> Option<SquareId> {
        id.offset(forward(color), 0)
    }

    #[inline]
    #[must_use]
    pub const fn is_inside_board(col: i32, row: i32) -> bool {
        SquareId::is_inside_board(col, row)
    }

    fn moves_kind(mv: &Move, kind: PieceKind) -> bool {
        mv.piece().is_some_and(|p| p.kind == kind)
    }

    /// A king moving exactly two columns
    #[must_use]
    pub fn is_castling(mv: &Move) -> bool {
        Self::moves_kind(mv, PieceKind::King) && mv.col_delta().abs() == 2
    }

    #[must_use]
    pub fn is_king_side_castling(mv: &Move) -> bool {
        Self::is_castling(mv) && mv.col_delta() > 0
    }

    #[must_use]
    pub fn is_queen_side_castling(mv: &Move) -> bool {
        Self::is_castling(mv) && mv.col_delta() < 0
    }

    /// A pawn changing column onto an empty square
    #[must_use]
    pub fn is_en_passant(mv: &Move) -> bool {
        Self::moves_kind(mv, PieceKind::Pawn) && mv.col_delta() != 0 && mv.to().is_empty()
    }

    /// A pawn reaching the last row of its own side
    #[must_use]
    pub fn is_promotion(mv: &Move) -> bool {
        match mv.piece() {
            Some(p) if p.kind == PieceKind::Pawn => {
                Self::equivalent(mv.to_id().row(), p.color) == 8
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn is_capture(mv: &Move) -> bool {
        !mv.to().is_empty() || Self::is_en_passant(mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, BoardBuilder};

    fn sq(s: &str) -> SquareId {
        s.parse().unwrap()
    }

    #[test]
    fn test_equivalent_flips_for_black() {
        assert_eq!(GameCalc::equivalent(2, Color::White), 2);
        assert_eq!(GameCalc::equivalent(2, Color::Black), 7);
        assert_eq!(GameCalc::equivalent(8, Color::Black), 1);
    }

    #[test]
    fn test_relative_neighbours() {
        assert_eq!(GameCalc::one_row_ahead(sq("e2"), Color::White), Some(sq("e3")));
        assert_eq!(GameCalc::one_row_ahead(sq("e7"), Color::Black), Some(sq("e6")));
        assert_eq!(GameCalc::two_rows_ahead(sq("e7"), Color::Black), Some(sq("e5")));
        assert_eq!(GameCalc::one_row_ahead(sq("e8"), Color::White), None);
        assert_eq!(GameCalc::two_rows_ahead(sq("a2"), Color::Black), None);

        assert_eq!(GameCalc::left_column(sq("d4"), Color::White), Some(sq("c4")));
        assert_eq!(GameCalc::left_column(sq("d4"), Color::Black), Some(sq("e4")));
        assert_eq!(GameCalc::right_column(sq("h4"), Color::White), None);
        assert_eq!(GameCalc::right_column(sq("a4"), Color::Black), None);
    }

    #[test]
    fn test_castling_classification() {
        let board = BoardBuilder::new()
            .place("e1", Color::White, PieceKind::King)
            .unwrap()
            .build();
        let short = Move::parse(&board, "e1", "g1").unwrap();
        let long = Move::parse(&board, "e1", "c1").unwrap();
        let step = Move::parse(&board, "e1", "f1").unwrap();

        assert!(GameCalc::is_castling(&short));
        assert!(GameCalc::is_king_side_castling(&short));
        assert!(!GameCalc::is_queen_side_castling(&short));
        assert!(GameCalc::is_queen_side_castling(&long));
        assert!(!GameCalc::is_castling(&step));
    }

    #[test]
    fn test_pawn_classification() {
        let board = BoardBuilder::new()
            .place("d5", Color::White, PieceKind::Pawn)
            .unwrap()
            .place("c6", Color::Black, PieceKind::Knight)
            .unwrap()
            .place("b7", Color::White, PieceKind::Pawn)
            .unwrap()
            .place("g2", Color::Black, PieceKind::Pawn)
            .unwrap()
            .build();

        let en_passant = Move::parse(&board, "d5", "e6").unwrap();
        assert!(GameCalc::is_en_passant(&en_passant));
        assert!(GameCalc::is_capture(&en_passant));

        let capture = Move::parse(&board, "d5", "c6").unwrap();
        assert!(!GameCalc::is_en_passant(&capture));
        assert!(GameCalc::is_capture(&capture));

        let push = Move::parse(&board, "d5", "d6").unwrap();
        assert!(!GameCalc::is_capture(&push));
        assert!(!GameCalc::is_promotion(&push));

        assert!(GameCalc::is_promotion(&Move::parse(&board, "b7", "b8").unwrap()));
        assert!(GameCalc::is_promotion(&Move::parse(&board, "g2", "g1").unwrap()));
    }

    #[test]
    fn test_non_pawn_to_last_row_is_not_promotion() {
        let board = Board::starting_position();
        let mv = Move::parse(&board, "a1", "a8").unwrap();
        assert!(!GameCalc::is_promotion(&mv));
        assert!(GameCalc::is_capture(&mv));
    }
}
