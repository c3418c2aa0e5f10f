//! Check, checkmate and stalemate detection.

use super::{play, position, sq};
use crate::board::{Board, CalcError, Color, GameCalc, GameCourse};

#[test]
fn test_fools_mate() {
    let mut board = Board::starting_position();
    let mut course = GameCourse::new();
    play(&mut board, &mut course, "f2", "f3");
    play(&mut board, &mut course, "e7", "e5");
    play(&mut board, &mut course, "g2", "g4");
    play(&mut board, &mut course, "d8", "h4");

    let calc = GameCalc::new(&board, &course);
    assert!(calc.is_check(Color::White).unwrap());
    assert!(calc.is_checkmate(Color::White).unwrap());
    assert!(!calc.is_checkmate(Color::Black).unwrap());
    assert!(calc.targets(sq("e1")).unwrap().is_empty());
    assert!(calc.legal_moves(Color::White).is_empty());
}

#[test]
fn test_back_rank_mate() {
    let board = position("3R2k1/5ppp/8/8/8/8/8/6K1");
    let course = GameCourse::new();
    let calc = GameCalc::new(&board, &course);
    assert!(calc.is_checkmate(Color::Black).unwrap());
    assert!(!calc.is_stalemate(Color::Black).unwrap());
}

#[test]
fn test_check_with_escape_is_not_mate() {
    let board = position("3R2k1/5pp1/7p/8/8/8/8/6K1");
    let course = GameCourse::new();
    let calc = GameCalc::new(&board, &course);
    assert!(calc.is_check(Color::Black).unwrap());
    assert!(!calc.is_checkmate(Color::Black).unwrap());
    assert_eq!(calc.targets(sq("g8")).unwrap(), vec![sq("h7")]);
}

#[test]
fn test_check_answered_by_capture_is_not_mate() {
    // king boxed in, but the checking rook can be taken
    let board = position("r2R2k1/5ppp/8/8/8/8/8/6K1");
    let course = GameCourse::new();
    let calc = GameCalc::new(&board, &course);
    assert!(calc.is_check(Color::Black).unwrap());
    assert!(calc.targets(sq("g8")).unwrap().is_empty());
    assert!(!calc.is_checkmate(Color::Black).unwrap());
    assert_eq!(calc.targets(sq("a8")).unwrap(), vec![sq("d8")]);
}

#[test]
fn test_check_answered_by_block_is_not_mate() {
    let board = position("6k1/5ppp/8/8/8/8/2r5/R5K1");
    let course = GameCourse::new();
    let calc = GameCalc::new(&board, &course);
    assert!(!calc.is_check(Color::Black).unwrap());

    let board = position("R5k1/5ppp/8/8/8/8/8/2r3K1");
    let calc = GameCalc::new(&board, &course);
    assert!(calc.is_check(Color::Black).unwrap());
    assert!(!calc.is_checkmate(Color::Black).unwrap());
    assert_eq!(calc.targets(sq("c1")).unwrap(), vec![sq("c8")]);
}

#[test]
fn test_stalemate() {
    let board = position("7k/5Q2/6K1/8/8/8/8/8");
    let course = GameCourse::new();
    let calc = GameCalc::new(&board, &course);
    assert!(!calc.is_checkmate(Color::Black).unwrap());
    assert!(calc.is_stalemate(Color::Black).unwrap());
    assert!(!calc.has_legal_move(Color::Black));
    assert!(calc.has_legal_move(Color::White));
}

#[test]
fn test_is_attacked_for_pieces_and_kings() {
    let board = position("4k3/8/8/3p4/4P3/8/8/4K3");
    let course = GameCourse::new();
    let calc = GameCalc::new(&board, &course);
    assert!(calc.is_attacked(sq("d5")));
    assert!(calc.is_attacked(sq("e4")));
    assert!(!calc.is_attacked(sq("e1")));
    assert!(!calc.is_attacked(sq("d4")));
}

#[test]
fn test_missing_king_errors() {
    let board = position("8/8/8/8/8/8/8/4K3");
    let course = GameCourse::new();
    let calc = GameCalc::new(&board, &course);
    assert_eq!(
        calc.is_checkmate(Color::Black),
        Err(CalcError::MissingKing {
            color: Color::Black
        })
    );
    assert_eq!(calc.is_check(Color::White), Ok(false));
}
