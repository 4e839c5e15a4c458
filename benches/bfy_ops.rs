use bfy_graph::{bellman_ford_yen, WeightedDigraph};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random graph with non-negative weights, so no negative cycle exists
fn random_graph(n: usize, m: usize, seed: u64) -> WeightedDigraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut builder = WeightedDigraph::builder(n).unwrap();
    for v in 1..n {
        // Spanning chain keeps every vertex reachable from 0
        builder.add_edge(v - 1, v, rng.gen_range(0..100)).unwrap();
    }
    for _ in n.saturating_sub(1)..m {
        let from = rng.gen_range(0..n);
        let to = rng.gen_range(0..n);
        builder.add_edge(from, to, rng.gen_range(0..100)).unwrap();
    }
    builder.build()
}

/// Chain whose last vertex closes a cycle of weight -1 back to vertex 1
fn chain_with_negative_cycle(n: usize) -> WeightedDigraph {
    let mut builder = WeightedDigraph::builder(n).unwrap();
    for v in 1..n {
        builder.add_edge(v - 1, v, 1).unwrap();
    }
    builder.add_edge(n - 1, 1, -(n as i64 - 1)).unwrap();
    builder.build()
}

/// Benchmark convergence on graphs without negative cycles
fn bench_shortest_path_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path_tree");

    for &n in &[100usize, 1_000, 10_000] {
        let graph = random_graph(n, n * 5, 42);
        group.throughput(Throughput::Elements(graph.n_edges() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, graph| {
            b.iter(|| black_box(bellman_ford_yen(graph, 0).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark detection of a cycle that needs every round to show up
fn bench_negative_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("negative_cycle");

    for &n in &[100usize, 1_000] {
        let graph = chain_with_negative_cycle(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, graph| {
            b.iter(|| {
                let result = bellman_ford_yen(graph, 0).unwrap();
                assert!(result.is_negative_cycle());
                black_box(result)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_shortest_path_tree, bench_negative_cycle);
criterion_main!(benches);
