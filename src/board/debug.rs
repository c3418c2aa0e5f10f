use std::fmt;

use super::{Board, Piece, SquareId};

const BORDER: &str = "  +---+---+---+---+---+---+---+---+";

impl fmt::Display for Board {
    /// Grid with row 8 on top; white pieces uppercase, empty squares as `.`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{BORDER}")?;
        for row in (1..=8u8).rev() {
            write!(f, "{row} |")?;
            for col in 1..=8u8 {
                let ch = self
                    .piece(SquareId::from_parts(col, row))
                    .map_or('.', Piece::to_char);
                write!(f, " {ch} |")?;
            }
            writeln!(f)?;
            writeln!(f, "{BORDER}")?;
        }
        write!(f, "    a   b   c   d   e   f   g   h")
    }
}

impl Board {
    /// One line per occupied square, e.g. `e1 {king (white)}`
    #[must_use]
    pub fn describe(&self) -> String {
        self.squares()
            .filter(|sq| !sq.is_empty())
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
