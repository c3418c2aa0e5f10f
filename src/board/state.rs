use log::{debug, warn};

use super::{Color, Move, Piece, PieceKind, PromotionChoice, Square, SquareId};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 chess board owning exactly one `Square` per `SquareId`.
///
/// Cloning yields an independent deep copy. Equality compares contents:
/// the piece on every square.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Square; 64],
}

impl Board {
    /// Create a board, optionally filled with the standard 32-piece layout
    #[must_use]
    pub fn new(default_setup: bool) -> Self {
        if default_setup {
            Board::starting_position()
        } else {
            Board::empty()
        }
    }

    /// A board with 64 empty squares
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: std::array::from_fn(|idx| Square::new(SquareId::from_index(idx))),
        }
    }

    /// A board with the standard opening layout
    #[must_use]
    pub fn starting_position() -> Self {
        let mut board = Board::empty();
        for (i, kind) in BACK_RANK.iter().enumerate() {
            let col = i as u8 + 1;
            board.put(col, 1, Piece::new(Color::White, *kind));
            board.put(col, 2, Piece::new(Color::White, PieceKind::Pawn));
            board.put(col, 7, Piece::new(Color::Black, PieceKind::Pawn));
            board.put(col, 8, Piece::new(Color::Black, *kind));
        }
        board
    }

    fn put(&mut self, col: u8, row: u8, piece: Piece) {
        self.set_piece(SquareId::from_parts(col, row), piece);
    }

    /// The piece on the square with the given id
    #[inline]
    #[must_use]
    pub fn piece(&self, id: SquareId) -> Option<Piece> {
        self.squares[id.index()].piece()
    }

    /// The square with the given id
    #[inline]
    #[must_use]
    pub fn square(&self, id: SquareId) -> &Square {
        &self.squares[id.index()]
    }

    /// The first square (in a1..h8 order) holding a piece of this kind and color
    #[must_use]
    pub fn find_square(&self, kind: PieceKind, color: Color) -> Option<&Square> {
        self.squares
            .iter()
            .find(|sq| sq.piece() == Some(Piece::new(color, kind)))
    }

    /// The square of `color`'s king, if it is on the board
    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<&Square> {
        self.find_square(PieceKind::King, color)
    }

    /// All 64 squares in a1..h8 order
    pub fn squares(&self) -> impl Iterator<Item = &Square> {
        self.squares.iter()
    }

    /// Squares holding a piece of `color`
    pub fn squares_with_pieces_of(&self, color: Color) -> impl Iterator<Item = &Square> + '_ {
        self.squares.iter().filter(move |sq| sq.holds(color))
    }

    /// Number of pieces on the board
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.squares.iter().filter(|sq| !sq.is_empty()).count()
    }

    /// Sum of default material values of `color`'s pieces.
    ///
    /// Summed per kind in a fixed order, so equal armies give equal totals.
    #[must_use]
    pub fn material(&self, color: Color) -> f64 {
        PieceKind::ALL
            .iter()
            .map(|&kind| {
                let count = self
                    .squares_with_pieces_of(color)
                    .filter(|sq| sq.piece().is_some_and(|p| p.kind == kind))
                    .count();
                count as f64 * kind.default_value()
            })
            .sum()
    }

    /// Place a piece, replacing whatever stood on the square
    pub fn set_piece(&mut self, id: SquareId, piece: Piece) {
        self.squares[id.index()].set_piece(piece);
    }

    /// Remove and return the piece on a square
    pub fn clear_square(&mut self, id: SquareId) -> Option<Piece> {
        self.squares[id.index()].clear()
    }

    /// Move whatever stands on `from` onto `to`, discarding the old occupant of `to`
    pub(crate) fn relocate(&mut self, from: SquareId, to: SquareId) {
        let piece = self.squares[from.index()].clear();
        let target = &mut self.squares[to.index()];
        match piece {
            Some(piece) => target.set_piece(piece),
            None => {
                target.clear();
            }
        }
    }

    /// Plain move: clear the origin and overwrite the destination.
    ///
    /// A piece previously on the destination is dropped; recording it is
    /// the job of the game history.
    pub fn make_normal_move(&mut self, mv: &Move) {
        debug!("normal move {mv}");
        self.relocate(mv.from_id(), mv.to_id());
    }

    /// En passant: remove the pawn beside the origin, on the destination column
    pub fn make_en_passant_move(&mut self, mv: &Move) {
        let captured = SquareId::from_parts(mv.to_id().col(), mv.from_id().row());
        debug!("en passant {mv}, removing pawn on {captured}");
        self.clear_square(captured);
        self.relocate(mv.from_id(), mv.to_id());
    }

    /// Pawn trade: replace the moving pawn with a new piece of the chosen kind
    pub fn make_pawn_trade_move(&mut self, mv: &Move, choice: PromotionChoice) {
        let Some(pawn) = self.piece(mv.from_id()).or(mv.piece()) else {
            warn!("pawn trade {mv} requested with an empty origin");
            return;
        };
        debug!("pawn trade {mv} into {choice}");
        self.clear_square(mv.from_id());
        self.set_piece(mv.to_id(), Piece::new(pawn.color, choice.kind()));
    }

    /// Castling: move the king, then bring the corner rook next to it
    pub fn make_castling_move(&mut self, mv: &Move) {
        let from = mv.from_id();
        let to = mv.to_id();
        let row = from.row();
        self.relocate(from, to);

        let queenside = to.col() < from.col();
        let (old_rook_col, new_rook_col) = if queenside {
            (1, from.col() - 1)
        } else {
            (8, from.col() + 1)
        };
        let old_rook = SquareId::from_parts(old_rook_col, row);
        let new_rook = SquareId::from_parts(new_rook_col, row);
        debug!("castling {mv}, rook {old_rook} -> {new_rook}");
        self.relocate(old_rook, new_rook);
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> SquareId {
        s.parse().unwrap()
    }

    #[test]
    fn test_starting_material_is_balanced() {
        let board = Board::starting_position();
        assert_eq!(board.material(Color::White), board.material(Color::Black));
        assert!((board.material(Color::White) - 40.06).abs() < 1e-9);
    }

    #[test]
    fn test_material_after_losing_queen() {
        let mut board = Board::starting_position();
        board.clear_square(sq("d8"));
        let diff = board.material(Color::White) - board.material(Color::Black);
        assert!((diff - PieceKind::Queen.default_value()).abs() < 1e-9);
        assert_eq!(Board::empty().material(Color::White), 0.0);
    }

    #[test]
    fn test_en_passant_clears_pawn_beside_origin() {
        let mut board = Board::empty();
        board.set_piece(sq("d5"), Piece::new(Color::White, PieceKind::Pawn));
        board.set_piece(sq("e5"), Piece::new(Color::Black, PieceKind::Pawn));
        let mv = Move::between(&board, sq("d5"), sq("e6")).unwrap();
        board.make_en_passant_move(&mv);

        assert!(board.piece(sq("e5")).is_none());
        assert!(board.piece(sq("d5")).is_none());
        assert_eq!(
            board.piece(sq("e6")),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
    }
}
