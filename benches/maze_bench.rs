use criterion::{criterion_group, criterion_main, Criterion};
use grid_maze::{MazeGenerator, PathFinder, Point};
use rand::{rngs::StdRng, SeedableRng};
use std::hint::black_box;

const SIZES: [usize; 3] = [51, 201, 501];

fn generation_bench(c: &mut Criterion) {
    for n in SIZES {
        c.bench_function(format!("generate {n}x{n}").as_str(), |b| {
            b.iter(|| {
                let mut generator = MazeGenerator::new(StdRng::seed_from_u64(0));
                black_box(generator.generate(n, n).unwrap())
            })
        });
    }
}

fn search_bench(c: &mut Criterion) {
    let finder = PathFinder::new();
    for n in SIZES {
        let grid = MazeGenerator::new(StdRng::seed_from_u64(0))
            .generate(n, n)
            .unwrap();
        let start = Point::new(1, 1);
        let end = Point::new(n as i32 - 2, n as i32 - 2);
        c.bench_function(format!("solve {n}x{n}, corner to corner").as_str(), |b| {
            b.iter(|| black_box(finder.find_path(&grid, start, end).unwrap()))
        });
    }
}

criterion_group!(benches, generation_bench, search_bench);
criterion_main!(benches);
