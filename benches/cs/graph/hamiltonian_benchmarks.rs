use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hamiltonian::graph::{AdjacencyMatrix, PathFinder, Strategy};

/// Undirected ladder graph: two rails of `rungs` vertices joined at each rung.
fn ladder(rungs: usize) -> AdjacencyMatrix {
    let mut g = AdjacencyMatrix::new(2 * rungs).unwrap();
    for i in 0..rungs {
        g.add_edge(i, rungs + i).unwrap();
        if i + 1 < rungs {
            g.add_edge(i, i + 1).unwrap();
            g.add_edge(rungs + i, rungs + i + 1).unwrap();
        }
    }
    g
}

/// Complete graph on `n - 1` vertices plus one isolated vertex: no path exists
/// and every ordering is explored.
fn complete_plus_isolated(n: usize) -> AdjacencyMatrix {
    let mut g = AdjacencyMatrix::new(n).unwrap();
    for u in 0..n - 1 {
        for v in 0..n - 1 {
            if u != v {
                g.add_arc(u, v).unwrap();
            }
        }
    }
    g
}

fn bench_hamiltonian(c: &mut Criterion) {
    let mut group = c.benchmark_group("hamiltonian_path");
    for strategy in [Strategy::Recursive, Strategy::Iterative] {
        let finder = PathFinder::new().with_strategy(strategy);
        for rungs in [4, 8, 12] {
            let g = ladder(rungs);
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}/ladder", strategy), rungs),
                &g,
                |b, g| b.iter(|| finder.search(black_box(g), 0).unwrap()),
            );
        }
        for n in [6, 8] {
            let g = complete_plus_isolated(n);
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}/exhaustive", strategy), n),
                &g,
                |b, g| b.iter(|| finder.search(black_box(g), 0).unwrap()),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_hamiltonian);
criterion_main!(benches);
