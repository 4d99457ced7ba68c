use std::sync::atomic::Ordering;
use std::time::{Duration, Instant};

use graph::prelude::*;
use graph_gen::presets::Input;
use graph_gen::{GeneratorConfig, RandomGraphGenerator};
use log::info;

use super::Result;

pub(crate) fn bench(
    config: GeneratorConfig,
    input: Input,
    runs: u64,
    warmup_runs: u64,
    sssp_start: Option<usize>,
) -> Result<()> {
    let start = Instant::now();
    let generated = RandomGraphGenerator::new(config).generate(
        input.low,
        input.high,
        input.vertex_count,
        input.edge_count,
    )?;
    let edges = generated.dense_edges();

    info!(
        "Generated {} vertices and {} edges ({}) in {:?}",
        generated.vertex_count(),
        generated.edge_count(),
        input.name,
        start.elapsed()
    );

    let average = time(runs, warmup_runs, || make_graph(&edges));
    info!("Average runtime: {:?}", average);

    if let Some(start_node) = sssp_start {
        let graph = make_graph(&edges);
        let reachable = sssp(&graph, start_node)?;

        info!(
            "{} of {} nodes are reachable from node {}",
            reachable,
            graph.node_count(),
            start_node
        );
    }

    Ok(())
}

fn make_graph(edges: &[(usize, usize)]) -> DirectedCsrGraph<usize, (), f32> {
    GraphBuilder::new()
        .csr_layout(CsrLayout::Sorted)
        .edges_with_values(edges.iter().map(|&(s, t)| (s, t, 1.0)))
        .build()
}

/// Returns the number of nodes reachable from `start_node`, including itself.
fn sssp(graph: &DirectedCsrGraph<usize, (), f32>, start_node: usize) -> Result<usize> {
    if start_node >= graph.node_count() {
        return Err(format!(
            "start node {start_node} is not part of a graph with {} nodes",
            graph.node_count()
        )
        .into());
    }

    let distances = delta_stepping(graph, DeltaSteppingConfig::new(start_node, 1.0));

    Ok(distances
        .iter()
        .filter(|d| d.load(Ordering::Relaxed) < f32::MAX)
        .count())
}

/// Runs `f` `warmup_runs` times, then `runs` times while measuring. Returns
/// the average duration of the measured runs.
fn time<T>(runs: u64, warmup_runs: u64, mut f: impl FnMut() -> T) -> Duration {
    for run in 1..=warmup_runs {
        let start = Instant::now();
        std::hint::black_box(f());
        let took = start.elapsed();

        info!("Warm-up run {} of {} finished in {:.6?}", run, warmup_runs, took);
    }

    let mut durations = vec![];

    for run in 1..=runs {
        let start = Instant::now();
        std::hint::black_box(f());
        let took = start.elapsed();
        durations.push(took);

        info!("Run {} of {} finished in {:.6?}", run, runs, took);
    }

    let total = durations
        .into_iter()
        .reduce(|a, b| a + b)
        .unwrap_or_default();

    total / runs.max(1) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_counts_all_runs() {
        let mut calls = 0;
        time(3, 2, || calls += 1);

        assert_eq!(calls, 5);
    }

    #[test]
    fn sssp_on_path() {
        let graph = make_graph(&[(0, 1), (1, 2), (3, 0)]);

        assert_eq!(sssp(&graph, 0).unwrap(), 3);
        assert_eq!(sssp(&graph, 3).unwrap(), 4);
        assert_eq!(sssp(&graph, 2).unwrap(), 1);
        assert!(sssp(&graph, 4).is_err());
    }

    #[test]
    fn bench_use_case() {
        let input = Input {
            name: "tiny",
            low: 0,
            high: 100,
            vertex_count: 10,
            edge_count: 20,
        };

        bench(GeneratorConfig::default(), input, 2, 1, Some(0)).unwrap();
    }
}
