use once_cell::sync::Lazy;

use super::SquareId;

const KNIGHT_DELTAS: [(i32, i32); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

const KING_DELTAS: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

fn reach_table(deltas: &[(i32, i32)]) -> [u64; 64] {
    let mut reach = [0u64; 64];
    for id in SquareId::all() {
        let mut mask = 0u64;
        for &(d_col, d_row) in deltas {
            if let Some(to) = id.offset(d_col, d_row) {
                mask |= 1u64 << to.index();
            }
        }
        reach[id.index()] = mask;
    }
    reach
}

/// Squares a knight on each square can jump to, one bit per `SquareId::index`
pub(crate) static KNIGHT_REACH: Lazy<[u64; 64]> = Lazy::new(|| reach_table(&KNIGHT_DELTAS));

/// Squares adjacent to each square
pub(crate) static KING_REACH: Lazy<[u64; 64]> = Lazy::new(|| reach_table(&KING_DELTAS));

/// Iterate the squares of a mask in a1..h8 order
pub(crate) fn squares_of(mut mask: u64) -> impl Iterator<Item = SquareId> {
    std::iter::from_fn(move || {
        if mask == 0 {
            return None;
        }
        let idx = mask.trailing_zeros() as usize;
        mask &= mask - 1;
        Some(SquareId::from_index(idx))
    })
}
