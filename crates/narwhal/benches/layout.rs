use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use narwhal::graphlib::{Graph, Point, VertexId, shortest_path};
use narwhal::{KamadaKawaiOptions, LayoutSession, layout};
use std::hint::black_box;
use std::time::Duration;

#[derive(Debug, Clone)]
struct RingSpec {
    node_count: usize,
    edges: Vec<(usize, usize, u32)>,
}

impl RingSpec {
    fn build(&self) -> Graph<()> {
        let mut g = Graph::new();
        for i in 0..self.node_count {
            // Golden-angle spiral keeps the seed free of coincident vertices.
            let t = i as f64 * 2.399963;
            let r = 40.0 + 8.0 * i as f64;
            g.add_vertex_at((), Point::new(r * t.cos(), r * t.sin()));
        }
        for &(from, to, weight) in &self.edges {
            if from >= self.node_count || to >= self.node_count {
                continue;
            }
            let _ = g.add_edge(VertexId(from), VertexId(to), weight);
        }
        g
    }
}

fn build_ring_spec(node_count: usize, chord_every: usize) -> RingSpec {
    let mut edges = Vec::new();
    for i in 0..node_count {
        edges.push((i, (i + 1) % node_count, 1 + (i % 4) as u32));
    }
    // Chords shorten some routes so D and the farthest walk disagree.
    for i in (0..node_count).step_by(chord_every) {
        edges.push((i, (i + node_count / 3) % node_count, 3));
    }
    RingSpec { node_count, edges }
}

fn bench_matrices(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrices");

    for (name, nodes) in [("ring_50", 50usize), ("ring_150", 150usize)] {
        let spec = build_ring_spec(nodes, 5);
        group.bench_with_input(BenchmarkId::new("shortest_path", name), &spec, |b, spec| {
            let g = spec.build();
            let far = VertexId(nodes / 2);
            b.iter(|| black_box(shortest_path(&g, VertexId(0), black_box(far))));
        });
        group.bench_with_input(BenchmarkId::new("session_build", name), &spec, |b, spec| {
            b.iter_batched(
                || spec.build(),
                |mut g| {
                    let session = LayoutSession::new(&mut g, &KamadaKawaiOptions::default());
                    black_box(session.map(|s| s.matrices().unreachable_pairs))
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("kamada_kawai");
    group.measurement_time(Duration::from_secs(10));

    let cases = [("ring_20", 20usize, 4usize), ("ring_60", 60usize, 6usize)];

    for (name, nodes, chord_every) in cases {
        let spec = build_ring_spec(nodes, chord_every);
        group.bench_with_input(BenchmarkId::new("layout", name), &spec, |b, spec| {
            b.iter_batched(
                || spec.build(),
                |mut g| {
                    let report = layout(black_box(&mut g), &KamadaKawaiOptions::default());
                    black_box(report.map(|r| r.passes))
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_matrices, bench_layout);
criterion_main!(benches);
