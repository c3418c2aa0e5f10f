use std::env;
use std::time::Duration;

use log::info;
use rand::prelude::*;

use chess_rules::board::Color;
use chess_rules::game::{AlwaysQueen, Game, GameStatus};

const DEFAULT_MAX_PLIES: usize = 200;
const CLOCK: Duration = Duration::from_secs(300);

/// Random self-play until mate, stalemate or the ply cap.
///
/// Usage: `chess_rules [max_plies] [seed]`
fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let max_plies = args
        .get(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_MAX_PLIES);
    let seed = args
        .get(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| thread_rng().gen());
    let mut rng = StdRng::seed_from_u64(seed);
    info!("self-play with seed {seed}, at most {max_plies} plies");

    let mut game = Game::new();
    let mut status = GameStatus::InProgress;
    for _ in 0..max_plies {
        let color = game.to_move();
        let moves = game.legal_moves(color);
        let Some(&mv) = moves.choose(&mut rng) else {
            break;
        };
        if let Err(err) = game.play(color, mv, CLOCK, &mut AlwaysQueen) {
            eprintln!("move {mv} rejected: {err}");
            return;
        }
        println!("{:>3}. {color} {mv}", game.course().move_count());
        match game.status() {
            Ok(GameStatus::InProgress) => {}
            Ok(end) => {
                status = end;
                break;
            }
            Err(err) => {
                eprintln!("{err}");
                return;
            }
        }
    }

    println!("{}", game.board());
    println!("result: {status}");
    for color in Color::BOTH {
        println!("{color} material: {:.2}", game.board().material(color));
    }
    let captured: Vec<String> = game
        .course()
        .captured_pieces()
        .iter()
        .map(|p| p.figurine().to_string())
        .collect();
    println!("captured: {}", captured.join(" "));
}
