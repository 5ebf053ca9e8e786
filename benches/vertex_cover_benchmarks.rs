use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use vc_algos::graph::generators;
use vc_algos::vertex_cover::Algorithm;

fn bench_heuristics(c: &mut Criterion) {
    let mut group = c.benchmark_group("vertex_cover_heuristics");
    let mut rng = StdRng::seed_from_u64(42);

    for &n in &[50, 100, 200] {
        let graph = generators::random(n, 0.1, &mut rng).unwrap();
        for algorithm in [Algorithm::Greedy, Algorithm::TwoApproximation] {
            group.bench_with_input(BenchmarkId::new(algorithm.name(), n), &graph, |b, graph| {
                b.iter(|| algorithm.run(black_box(graph)).run_to_completion())
            });
        }
    }
    group.finish();
}

fn bench_brute_force(c: &mut Criterion) {
    let mut group = c.benchmark_group("vertex_cover_brute_force");
    let mut rng = StdRng::seed_from_u64(7);

    for &n in &[8, 12, 16] {
        let graph = generators::random(n, 0.3, &mut rng).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, graph| {
            b.iter(|| Algorithm::BruteForce.run(black_box(graph)).run_to_completion())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_heuristics, bench_brute_force);
criterion_main!(benches);
