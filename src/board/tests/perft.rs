//! Perft (performance test) for move generation correctness.

use std::time::Instant;

use super::position;
use crate::board::{Color, RulesConfig};
use crate::game::Game;

struct TestPosition {
    name: &'static str,
    placement: &'static str,
    to_move: Color,
    depths: &'static [(usize, u64)],
}

// Shallow enough that no promotion is reached, so the counts do not depend
// on how promotions are expanded.
const TEST_POSITIONS: &[TestPosition] = &[
    TestPosition {
        name: "Initial Position",
        placement: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
        to_move: Color::White,
        depths: &[(1, 20), (2, 400), (3, 8902)],
    },
    TestPosition {
        name: "Initial Position, Black first",
        placement: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
        to_move: Color::Black,
        depths: &[(1, 20), (2, 400)],
    },
    TestPosition {
        name: "Kiwipete",
        placement: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
        to_move: Color::White,
        depths: &[(1, 48)],
    },
    TestPosition {
        name: "Position 3",
        placement: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8",
        to_move: Color::White,
        depths: &[(1, 14), (2, 191), (3, 2812)],
    },
    TestPosition {
        name: "Castling",
        placement: "r3k2r/8/8/8/8/8/8/R3K2R",
        to_move: Color::White,
        depths: &[(1, 26)],
    },
];

fn game(placement: &str, to_move: Color) -> Game {
    Game::from_position(position(placement), to_move, RulesConfig::default())
}

#[test]
fn test_perft_positions() {
    for pos in TEST_POSITIONS {
        let game = game(pos.placement, pos.to_move);
        for &(depth, expected) in pos.depths {
            let start = Instant::now();
            let nodes = game.perft(depth);
            println!(
                "{} depth {}: {} nodes in {:?}",
                pos.name,
                depth,
                nodes,
                start.elapsed()
            );
            assert_eq!(nodes, expected, "{} depth {}", pos.name, depth);
        }
    }
}

#[test]
#[ignore = "slow in debug builds"]
fn test_perft_deeper() {
    let kiwipete = game(
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
        Color::White,
    );
    let castling = game("r3k2r/8/8/8/8/8/8/R3K2R", Color::White);
    let position3 = game("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8", Color::White);

    assert_eq!(kiwipete.perft(2), 2039);
    assert_eq!(castling.perft(2), 568);
    assert_eq!(position3.perft(4), 43238);
}
