use arcrank::graph::EvidenceGraph;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

#[derive(Debug, Clone, Copy)]
struct GraphSpec {
    nodes: usize,
    chord_stride: usize,
}

impl GraphSpec {
    fn build(&self) -> EvidenceGraph<u64> {
        let n = self.nodes as u64;
        let mut g: EvidenceGraph<u64> = EvidenceGraph::new();
        for v in 0..n {
            g.add_node(v);
        }

        // A directed ring keeps every node cyclic, so the ratio rule (the
        // expensive path) runs on most rounds.
        for v in 0..n {
            g.add_edge(v, (v + 1) % n, 1.0 + (v % 7) as f64)
                .expect("ring endpoints are declared");
        }

        let stride = self.chord_stride as u64;
        if stride > 1 && stride < n {
            for v in 0..n {
                g.add_edge((v + stride) % n, v, 0.5)
                    .expect("chord endpoints are declared");
            }
        }

        g
    }
}

fn bench_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("order");
    for &nodes in &[200usize, 1000, 3000] {
        let spec = GraphSpec {
            nodes,
            chord_stride: 17,
        };
        let g = spec.build();
        group.bench_with_input(BenchmarkId::from_parameter(nodes), &g, |b, g| {
            b.iter(|| arcrank::order(black_box(g)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_order);
criterion_main!(benches);
