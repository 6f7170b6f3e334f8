use std::hint::black_box;

use burokku_core::*;
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

/// Parity-filled board: nothing completed, worst case for placement scans.
fn checkerboard() -> Board {
    let mono = shape_by_name("mono").unwrap().shape();
    let mut board = Board::new();
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if (row + col) % 2 == 0 {
                board.place(mono, (row, col)).unwrap();
            }
        }
    }
    board
}

fn bench_can_place_anywhere(c: &mut Criterion) {
    let board = checkerboard();
    let square = shape_by_name("square").unwrap().shape();
    let mono = shape_by_name("mono").unwrap().shape();

    c.bench_function("can_place_anywhere/miss", |b| {
        b.iter(|| black_box(&board).can_place_anywhere(black_box(square)))
    });
    c.bench_function("can_place_anywhere/hit", |b| {
        b.iter(|| black_box(&board).can_place_anywhere(black_box(mono)))
    });
}

fn bench_scan_completed(c: &mut Criterion) {
    let bar3 = shape_by_name("bar3-row").unwrap().shape();
    let bar2 = shape_by_name("bar2-row").unwrap().shape();
    let mut board = Board::new();
    // eight rows filled to eight of their nine cells
    for row in 0..8u8 {
        board.place(bar3, (row, 0)).unwrap();
        board.place(bar3, (row, 3)).unwrap();
        board.place(bar2, (row, 6)).unwrap();
    }

    c.bench_function("scan_completed/near_full", |b| {
        b.iter(|| black_box(&board).scan_completed())
    });
}

fn bench_attempt_placement(c: &mut Criterion) {
    c.bench_function("attempt_placement/fresh_board", |b| {
        b.iter_batched(
            || {
                let mut source = RandomShapeSource::new(0xbeef);
                let engine = PlayEngine::new(&mut source);
                (engine, source)
            },
            |(mut engine, mut source)| engine.attempt_placement(0, (0, 0), &mut source),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_can_place_anywhere,
    bench_scan_completed,
    bench_attempt_placement
);
criterion_main!(benches);
