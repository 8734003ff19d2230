use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sweeper_core::*;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for difficulty in Difficulty::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(difficulty),
            &difficulty,
            |b, &difficulty| {
                let mut seed = 0u64;
                b.iter(|| {
                    seed = seed.wrapping_add(1);
                    RandomMinefieldGenerator::new(seed)
                        .generate(black_box(difficulty.config()))
                        .unwrap()
                })
            },
        );
    }
    group.finish();
}

fn bench_cascade(c: &mut Criterion) {
    let mut group = c.benchmark_group("cascade");
    for difficulty in Difficulty::ALL {
        // every mine in the last row keeps one large zero region above it
        let config = difficulty.config();
        let (rows, cols) = config.size;
        let cols = CellCount::from(cols);
        let mines: Vec<Coord2> = (0..config.mines)
            .map(|i| (rows - 1 - (i / cols) as Coord, (i % cols) as Coord))
            .collect();
        let board = Board::from_mine_coords(config.size, &mines).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(difficulty), &board, |b, board| {
            b.iter(|| {
                let mut board = board.clone();
                black_box(board.reveal((0, 0)))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate, bench_cascade);
criterion_main!(benches);
