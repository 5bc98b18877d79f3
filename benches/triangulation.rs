//! Benchmarks for incremental triangulation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use lawson::primitives::Point2;
use lawson::DelaunayMesh;

/// Generates deterministic pseudo-random points inside the region the
/// default super-triangle contains.
fn generate_random_points(count: usize, seed: u64) -> Vec<Point2<f64>> {
    let mut points = Vec::with_capacity(count);
    let mut state = seed;

    for _ in 0..count {
        // xorshift for deterministic random
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let x = 100.0 + (state as f64 / u64::MAX as f64) * 1300.0;

        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let y = 100.0 + (state as f64 / u64::MAX as f64) * 1300.0;

        points.push(Point2::new(x, y));
    }

    points
}

fn bench_full_triangulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_triangulation");

    for count in [10, 50, 100] {
        let points = generate_random_points(count, 12345);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("points", count), &points, |b, pts| {
            b.iter(|| {
                let mut mesh = DelaunayMesh::new(black_box(pts)).unwrap();
                while !mesh.is_done() {
                    let _ = mesh.step();
                }
                mesh.triangles().len()
            })
        });
    }

    group.finish();
}

fn bench_single_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_step");

    for count in [50, 100] {
        let points = generate_random_points(count, 6789);

        // Measure one insertion into an almost-complete mesh, which is the
        // worst case for the conservative whole-mesh adjacency rebuild.
        group.bench_with_input(BenchmarkId::new("last_of", count), &points, |b, pts| {
            let mut prepared = DelaunayMesh::new(pts).unwrap();
            while prepared.remaining() > 1 {
                let _ = prepared.step();
            }

            b.iter(|| {
                let mut mesh = prepared.clone();
                let _ = mesh.step();
                mesh.triangles().len()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_full_triangulation, bench_single_step);
criterion_main!(benches);
