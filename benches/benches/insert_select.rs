// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};

use bracken_quadtree::{Point2D, QuadTree, Rect2D};

const WORLD: Rect2D = Rect2D::new(0, 0, 4096, 4096);

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_coord(&mut self, extent: i64) -> i64 {
        (self.next_u64() % extent as u64) as i64
    }
}

fn gen_random_points(count: usize, seed: u64) -> Vec<Point2D> {
    let mut rng = Rng::new(seed);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        out.push(Point2D::new(rng.next_coord(4096), rng.next_coord(4096)));
    }
    out
}

fn gen_clustered_points(count: usize, seed: u64) -> Vec<Point2D> {
    let mut rng = Rng::new(seed);
    let mut out = Vec::with_capacity(count);
    // A handful of tight clusters stresses the depth budget path.
    for _ in 0..count {
        let cx = (rng.next_u64() % 8) as i64 * 512 + 256;
        let cy = (rng.next_u64() % 8) as i64 * 512 + 256;
        out.push(Point2D::new(
            cx + rng.next_coord(32) - 16,
            cy + rng.next_coord(32) - 16,
        ));
    }
    out
}

fn build_tree(points: &[Point2D], capacity: usize, depth: usize) -> QuadTree<u32> {
    let mut tree = QuadTree::new(WORLD, capacity, depth);
    for (i, p) in points.iter().enumerate() {
        let _ = tree.insert(*p, i as u32);
    }
    tree
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for &count in &[1_000_usize, 10_000] {
        let points = gen_random_points(count, 0x5eed_1);
        group.throughput(Throughput::Elements(count as u64));
        for &capacity in &[4_usize, 32] {
            group.bench_function(format!("uniform_n{count}_cap{capacity}"), |b| {
                b.iter_batched(
                    || points.clone(),
                    |pts| black_box(build_tree(&pts, capacity, 8)),
                    BatchSize::SmallInput,
                );
            });
        }
    }
    let clustered = gen_clustered_points(10_000, 0x5eed_2);
    group.throughput(Throughput::Elements(10_000));
    group.bench_function("clustered_n10000_cap4", |b| {
        b.iter_batched(
            || clustered.clone(),
            |pts| black_box(build_tree(&pts, 4, 8)),
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("select");
    let points = gen_random_points(10_000, 0x5eed_3);
    for &capacity in &[4_usize, 32] {
        let tree = build_tree(&points, capacity, 8);
        let window = Rect2D::new(1000, 1000, 1256, 1256);
        group.bench_function(format!("window_cap{capacity}"), |b| {
            b.iter(|| black_box(tree.select(black_box(window)).count()));
        });
        group.bench_function(format!("window_within_cap{capacity}"), |b| {
            b.iter(|| black_box(tree.select_within(black_box(window)).count()));
        });
        group.bench_function(format!("full_bounds_cap{capacity}"), |b| {
            b.iter(|| black_box(tree.select(black_box(WORLD)).count()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_select);
criterion_main!(benches);
