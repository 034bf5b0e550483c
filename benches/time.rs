//! Criterion benchmarks measure time of the clearly separated pieces of code.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use regicide::{Board, ChessGame, GameId, Player, Square};

/// A short game where every piece type moves at least once.
const OPENING: [(&str, &str); 12] = [
    ("e2", "e4"),
    ("e7", "e5"),
    ("g1", "f3"),
    ("b8", "c6"),
    ("f1", "c4"),
    ("g8", "f6"),
    ("d2", "d3"),
    ("f8", "c5"),
    ("c1", "g5"),
    ("d8", "e7"),
    ("a2", "a3"),
    ("a8", "b8"),
];

fn opening_moves() -> Vec<(Square, Square)> {
    OPENING
        .iter()
        .map(|&(from, to)| (from.parse().unwrap(), to.parse().unwrap()))
        .collect()
}

fn play(moves: &[(Square, Square)]) -> ChessGame {
    let mut game = ChessGame::new(GameId(1));
    game.start(|| false).unwrap();
    for &(from, to) in moves {
        game.make_move(from, to).unwrap();
    }
    game
}

fn moves(c: &mut Criterion) {
    let moves = opening_moves();
    let _ = c.bench_with_input(
        BenchmarkId::new("play opening", format!("{} moves", moves.len())),
        &moves,
        |b, moves| {
            b.iter(|| criterion::black_box(play(moves)));
        },
    );
}

fn rejected_moves(c: &mut Criterion) {
    let board = Board::starting();
    // Every source and target combination for White, almost all illegal.
    let attempts: Vec<(Square, Square)> = Square::iter()
        .flat_map(|from| Square::iter().map(move |to| (from, to)))
        .collect();
    let _ = c.bench_with_input(
        BenchmarkId::new("validate moves", format!("{} attempts", attempts.len())),
        &attempts,
        |b, attempts| {
            b.iter(|| {
                for &(from, to) in attempts {
                    let mut board = board.clone();
                    let _ = criterion::black_box(board.make_move(from, to, Player::White));
                }
            });
        },
    );
}

fn score(c: &mut Criterion) {
    let game = play(&opening_moves());
    let _ = c.bench_function("score", |b| {
        b.iter(|| {
            criterion::black_box(game.score(Player::White) + game.score(Player::Black))
        });
    });
}

fn snapshot(c: &mut Criterion) {
    let game = play(&opening_moves());
    let _ = c.bench_function("snapshot to json", |b| {
        b.iter(|| {
            let snapshot = game.snapshot().unwrap();
            criterion::black_box(serde_json::to_string(&snapshot).unwrap())
        });
    });
}

criterion_group! {
    name = game;
    config = Criterion::default().sample_size(100);
    targets = moves, rejected_moves, score, snapshot
}

criterion_main!(game);
