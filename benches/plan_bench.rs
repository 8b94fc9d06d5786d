use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use shuffle_major::{
    build_shuffle_major_plan, flatten, make_grid, AccessOrder, Bases, GridStore, Size,
};
use std::time::Duration;

fn bench_build_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_plan");
    for exp in [6u32, 8, 10] {
        let n = 1usize << exp;
        let size = Size::new(n, n).unwrap();
        group.throughput(Throughput::Elements((n * n) as u64));

        let candidates = [
            ("2x2", Bases::new(2, 2).unwrap()),
            ("4x4", Bases::new(4, 4).unwrap()),
        ];
        for (label, bases) in candidates {
            // 4x4 only divides evenly for even exponents
            if label == "4x4" && exp % 2 == 1 {
                continue;
            }
            group.bench_with_input(BenchmarkId::new(label, n), &size, |b, &size| {
                b.iter(|| build_shuffle_major_plan(black_box(size), bases).unwrap())
            });
        }
    }
    group.finish();
}

fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten");
    for n in [256usize, 1024] {
        let grid: GridStore<f64> = make_grid(n, n).unwrap();
        group.throughput(Throughput::Elements((n * n) as u64));

        let row = AccessOrder::row_major(grid.size()).unwrap();
        let block = AccessOrder::block_recursive(grid.size(), Bases::new(2, 2).unwrap()).unwrap();

        group.bench_with_input(BenchmarkId::new("row_major", n), &n, |b, _| {
            b.iter(|| flatten(black_box(&grid), &row).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("block_recursive", n), &n, |b, _| {
            b.iter(|| flatten(black_box(&grid), &block).unwrap())
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(20)
        .measurement_time(Duration::from_secs(3));
    targets = bench_build_plan, bench_flatten
}
criterion_main!(benches);
