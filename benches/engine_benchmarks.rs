//! Benchmarks for rule query performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_rules::board::{
    Board, BoardBuilder, Color, GameCalc, GameCourse, RulesConfig, SquareId,
};
use chess_rules::game::{AlwaysQueen, Game};

fn position(placement: &str) -> Board {
    BoardBuilder::new().placement(placement).unwrap().build()
}

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R";
const MIDDLEGAME: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R";

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.sample_size(10);

    let startpos = Game::new();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| startpos.perft(black_box(depth)))
        });
    }

    let kiwipete = Game::from_position(position(KIWIPETE), Color::White, RulesConfig::default());
    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| kiwipete.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");
    let course = GameCourse::new();

    let startpos = Board::starting_position();
    group.bench_function("startpos", |b| {
        let calc = GameCalc::new(&startpos, &course);
        b.iter(|| black_box(calc.legal_moves(Color::White)))
    });

    let middlegame = position(MIDDLEGAME);
    group.bench_function("middlegame", |b| {
        let calc = GameCalc::new(&middlegame, &course);
        b.iter(|| black_box(calc.legal_moves(Color::White)))
    });

    let kiwipete = position(KIWIPETE);
    group.bench_function("kiwipete", |b| {
        let calc = GameCalc::new(&kiwipete, &course);
        b.iter(|| black_box(calc.legal_moves(Color::White)))
    });

    let config = RulesConfig::default().with_parallel_threshold(0);
    group.bench_function("kiwipete_parallel", |b| {
        let calc = GameCalc::with_config(&kiwipete, &course, config);
        b.iter(|| black_box(calc.legal_moves_parallel(Color::White)))
    });

    group.finish();
}

fn bench_status(c: &mut Criterion) {
    let mut group = c.benchmark_group("status");

    let mut mated = Game::new();
    for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
        mated
            .play_notation(from, to, Default::default(), &mut AlwaysQueen)
            .unwrap();
    }
    group.bench_function("fools_mate", |b| {
        b.iter(|| black_box(mated.calc().is_checkmate(Color::White)))
    });

    let kiwipete = position(KIWIPETE);
    let course = GameCourse::new();
    group.bench_function("kiwipete_castling", |b| {
        let calc = GameCalc::new(&kiwipete, &course);
        let e1: SquareId = "e1".parse().unwrap();
        b.iter(|| black_box(calc.is_castling_possible(e1, true)))
    });

    group.finish();
}

criterion_group!(benches, bench_perft, bench_movegen, bench_status);
criterion_main!(benches);
