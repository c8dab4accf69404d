use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, Game, GameConfig, Tetromino};
use blockfall::types::{Cell, GameAction, PieceKind, Tint, Vec2};

fn vertical_i(x: f64, y: f64) -> Tetromino {
    Tetromino::new(PieceKind::I, Tint(0), Vec2::new(x, y), Vec2::new(0.0, 10.0))
}

fn bench_tick(c: &mut Criterion) {
    let mut game = Game::new(GameConfig::with_seed(12345));

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            game.tick(black_box(Duration::from_millis(16)), None);
            if game.pieces_locked() > 200 {
                game.restart();
            }
        })
    });
}

fn bench_tick_soft_drop(c: &mut Criterion) {
    let mut game = Game::new(GameConfig::with_seed(12345));

    // Locks a piece every few ticks, so this covers clearing and promotion.
    c.bench_function("game_tick_soft_drop", |b| {
        b.iter(|| {
            game.tick(
                black_box(Duration::from_millis(16)),
                Some(GameAction::Accelerate),
            );
            if game.pieces_locked() > 200 {
                game.restart();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::default();
            // Fill the bottom 4 rows except the last column.
            for row in 18..22 {
                for col in 2..11 {
                    board.insert(Cell::new(col, row), Tint(1));
                }
            }
            let mut piece = vertical_i(110.0, 215.0);
            board.check_bounds(&mut piece);
            black_box(board.clear_full_rows(&piece));
        })
    });
}

fn bench_check_bounds(c: &mut Criterion) {
    let mut board = Board::default();
    for row in 12..22 {
        board.insert(Cell::new(6, row), Tint(1));
    }

    c.bench_function("check_bounds_falling", |b| {
        b.iter(|| {
            let mut piece = vertical_i(60.0, 50.0);
            black_box(board.check_bounds(&mut piece));
        })
    });
}

fn bench_lateral_gates(c: &mut Criterion) {
    let board = Board::default();
    let piece = vertical_i(60.0, 100.0);

    c.bench_function("can_go_left_right", |b| {
        b.iter(|| {
            black_box(board.can_go_left(black_box(&piece)));
            black_box(board.can_go_right(black_box(&piece)));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_tick_soft_drop,
    bench_line_clear,
    bench_check_bounds,
    bench_lateral_gates
);
criterion_main!(benches);
