//! Piece, color and promotion-choice types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chess piece types.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All piece types in index order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Parse a piece kind from a letter (p, n, b, r, q, k), either case
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Convert piece kind to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Default material value of the piece kind.
    ///
    /// Pawn=1, Knight=3.2, Bishop=3.33, Rook=5.1, Queen=8.8. The king is
    /// never traded and is worth nothing.
    #[inline]
    #[must_use]
    pub const fn default_value(self) -> f64 {
        match self {
            PieceKind::Pawn => 1.0,
            PieceKind::Knight => 3.2,
            PieceKind::Bishop => 3.33,
            PieceKind::Rook => 5.1,
            PieceKind::Queen => 8.8,
            PieceKind::King => 0.0,
        }
    }

    /// Returns true if this piece slides along rays (Bishop, Rook, Queen)
    #[inline]
    #[must_use]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::Pawn => write!(f, "pawn"),
            PieceKind::Knight => write!(f, "knight"),
            PieceKind::Bishop => write!(f, "bishop"),
            PieceKind::Rook => write!(f, "rook"),
            PieceKind::Queen => write!(f, "queen"),
            PieceKind::King => write!(f, "king"),
        }
    }
}

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors, White first
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Home row of this color's pieces (1 for White, 8 for Black)
    #[inline]
    #[must_use]
    pub const fn home_row(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 8,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// An immutable chess piece: a kind owned by one side.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    #[must_use]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Piece { color, kind }
    }

    /// Default material value of this piece
    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        self.kind.default_value()
    }

    /// Letter for the piece, uppercase for White
    #[must_use]
    pub fn to_char(self) -> char {
        let c = self.kind.to_char();
        if self.color == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    /// Unicode chess glyph for text displays
    #[must_use]
    pub const fn figurine(self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::King) => '♔',
            (Color::Black, PieceKind::Pawn) => '♟',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::King) => '♚',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.kind, self.color)
    }
}

/// The pieces a pawn may be traded for on reaching the last rank.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PromotionChoice {
    Knight,
    Bishop,
    Rook,
    Queen,
}

impl PromotionChoice {
    /// All choices in order of typical preference (queen first)
    pub const ALL: [PromotionChoice; 4] = [
        PromotionChoice::Queen,
        PromotionChoice::Rook,
        PromotionChoice::Bishop,
        PromotionChoice::Knight,
    ];

    #[inline]
    #[must_use]
    pub const fn kind(self) -> PieceKind {
        match self {
            PromotionChoice::Knight => PieceKind::Knight,
            PromotionChoice::Bishop => PieceKind::Bishop,
            PromotionChoice::Rook => PieceKind::Rook,
            PromotionChoice::Queen => PieceKind::Queen,
        }
    }
}

impl From<PromotionChoice> for PieceKind {
    fn from(choice: PromotionChoice) -> Self {
        choice.kind()
    }
}

impl TryFrom<PieceKind> for PromotionChoice {
    type Error = PieceKind;

    fn try_from(kind: PieceKind) -> Result<Self, Self::Error> {
        match kind {
            PieceKind::Knight => Ok(PromotionChoice::Knight),
            PieceKind::Bishop => Ok(PromotionChoice::Bishop),
            PieceKind::Rook => Ok(PromotionChoice::Rook),
            PieceKind::Queen => Ok(PromotionChoice::Queen),
            other => Err(other),
        }
    }
}

impl fmt::Display for PromotionChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())
    }
}
