use criterion::*;
use graph_builder::prelude::*;
use graph_gen::presets::{Input, LARGE, MEDIUM, SMALL, USE_CASE};
use graph_gen::RandomGraphGenerator;

/// Builds CSR graphs from generated input. Generation happens once per input,
/// only graph construction is measured.
fn make_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("make_graph");
    group.sampling_mode(SamplingMode::Flat);

    for input in [USE_CASE, SMALL, MEDIUM, LARGE] {
        for csr_layout in [
            CsrLayout::Unsorted,
            CsrLayout::Sorted,
            CsrLayout::Deduplicated,
        ] {
            group.bench_function(format!("{}_{csr_layout:?}", input.name), |b| {
                bench_make_graph(b, input, csr_layout)
            });
        }
    }

    group.finish();
}

fn bench_make_graph(b: &mut Bencher, input: Input, csr_layout: CsrLayout) {
    let edges = RandomGraphGenerator::default()
        .generate(input.low, input.high, input.vertex_count, input.edge_count)
        .unwrap()
        .dense_edges();

    b.iter_batched(
        || edges.clone(),
        |edges| {
            black_box(
                GraphBuilder::new()
                    .csr_layout(csr_layout)
                    .edges(edges)
                    .build::<DirectedCsrGraph<usize>>(),
            )
        },
        BatchSize::SmallInput,
    )
}

criterion_group!(benches, make_graph);
criterion_main!(benches);
