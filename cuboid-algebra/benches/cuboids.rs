#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use cuboid_algebra::math::{Coordinate, Cuboid, Point};
use cuboid_algebra::set::Cuboids;

fn intersect_bench(c: &mut Criterion) {
    let a = Cuboid::new([0, 0, 0], [1000, 1000, 1000]);
    let b = Cuboid::new([-500, 250, 250], [500, 750, 750]);
    c.bench_function("intersect", |bencher| {
        bencher.iter(|| black_box(a).intersect(black_box(b)));
    });
    c.bench_function("split_at", |bencher| {
        bencher.iter(|| black_box(a).split_at(black_box(Point::new(10, 500, 990))));
    });
}

/// Merging a grid of tiles which all collapse into one cuboid.
fn merge_tiles_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge tiles");
    for tiles_per_axis in [2, 4, 6] {
        let pieces = tiles(tiles_per_axis);
        group.bench_function(
            BenchmarkId::from_parameter(format!("{tiles_per_axis}³")),
            |bencher| {
                bencher.iter(|| {
                    pieces
                        .iter()
                        .fold(Cuboids::new(), |region, &tile| region.merge(tile))
                });
            },
        );
    }
    group.finish();
}

/// Carving holes out of one large cuboid, which leaves many fragments to recombine.
fn remove_holes_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove holes");
    for holes_per_axis in [2, 3, 4] {
        let holes: Vec<Cuboid> = tiles(holes_per_axis)
            .into_iter()
            .map(|tile| {
                let min = tile.min();
                Cuboid::new(min.map(|v| v * 10 + 2), min.map(|v| v * 10 + 5))
            })
            .collect();
        let outer = Cuboid::new([0, 0, 0], [holes_per_axis * 10; 3]);
        group.bench_function(
            BenchmarkId::from_parameter(format!("{holes_per_axis}³")),
            |bencher| {
                bencher.iter(|| {
                    holes
                        .iter()
                        .fold(Cuboids::from(outer), |region, &hole| region.remove(hole))
                });
            },
        );
    }
    group.finish();
}

fn tiles(per_axis: Coordinate) -> Vec<Cuboid> {
    let mut tiles = Vec::new();
    for z in 0..per_axis {
        for y in 0..per_axis {
            for x in 0..per_axis {
                tiles.push(Cuboid::single_point(Point::new(x, y, z)));
            }
        }
    }
    tiles
}

criterion_group!(
    benches,
    intersect_bench,
    merge_tiles_bench,
    remove_holes_bench
);
criterion_main!(benches);
