use std::env;
use std::process;
use std::time::Duration;

use chess_rules::game::{AlwaysQueen, Game};

/// Split `e2e4` into its two square names
fn split_move(text: &str) -> Option<(&str, &str)> {
    (text.len() == 4 && text.is_ascii()).then(|| text.split_at(2))
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: check_mate_status <move1> <move2> ...");
        return;
    }

    let mut game = Game::new();
    for text in args.iter().skip(1) {
        let Some((from, to)) = split_move(text) else {
            eprintln!("cannot read move '{text}', expected e.g. e2e4");
            process::exit(2);
        };
        if let Err(err) = game.play_notation(from, to, Duration::ZERO, &mut AlwaysQueen) {
            eprintln!("move {text}: {err}");
            process::exit(1);
        }
    }

    let color = game.to_move();
    let legal_moves = game.legal_moves(color);
    let calc = game.calc();
    println!("side_to_move: {color}");
    println!("legal_moves: {}", legal_moves.len());
    println!("checkmate: {}", calc.is_checkmate(color).unwrap_or(false));
    println!("stalemate: {}", calc.is_stalemate(color).unwrap_or(false));
    for mv in &legal_moves {
        println!("{}{}", mv.from_id(), mv.to_id());
    }
}
