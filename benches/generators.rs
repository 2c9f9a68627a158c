use criterion::{criterion_group, criterion_main, Criterion};
use mazes::{
    generators,
    grid::Grid,
    observers::{NoopObserver, RecordingObserver},
    units::{ColumnsCount, RowsCount},
};

fn bench_recursive_backtracker_maze_32(c: &mut Criterion) {
    let mut rng = generators::seeded_rng(32);
    c.bench_function("recursive_backtracker_maze_32", move |b| {
        b.iter(|| {
            let mut g = Grid::with_dimensions(RowsCount(32), ColumnsCount(32)).unwrap();
            generators::recursive_backtracker(&mut g, &mut rng, &mut NoopObserver).unwrap();
            g
        })
    });
}

fn bench_recursive_backtracker_maze_350(c: &mut Criterion) {
    let mut rng = generators::seeded_rng(350);
    c.bench_function("recursive_backtracker_maze_350", move |b| {
        b.iter(|| {
            let mut g = Grid::with_dimensions(RowsCount(350), ColumnsCount(350)).unwrap();
            generators::recursive_backtracker(&mut g, &mut rng, &mut NoopObserver).unwrap();
            g
        })
    });
}

fn bench_recursive_backtracker_recorded_32(c: &mut Criterion) {
    let mut rng = generators::seeded_rng(32);
    c.bench_function("recursive_backtracker_recorded_32", move |b| {
        b.iter(|| {
            let mut g = Grid::with_dimensions(RowsCount(32), ColumnsCount(32)).unwrap();
            let mut observer = RecordingObserver::new();
            generators::recursive_backtracker(&mut g, &mut rng, &mut observer).unwrap();
            observer
        })
    });
}

criterion_group!(
    benches,
    bench_recursive_backtracker_maze_32,
    bench_recursive_backtracker_maze_350,
    bench_recursive_backtracker_recorded_32
);
criterion_main!(benches);
