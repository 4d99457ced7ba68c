use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use graph_gen::prelude::*;
use log::{debug, info};

use super::Result;

pub(crate) fn generate(
    config: GeneratorConfig,
    input: Input,
    output: Option<PathBuf>,
    labels: Labels,
    batches: usize,
    batch_offset: i64,
) -> Result<()> {
    info!(
        "Generating {} vertices from [{}, {}] and {} edges in {} batch(es) with seed {}",
        input.vertex_count, input.low, input.high, input.edge_count, batches, config.seed
    );

    let mut generator = RandomGraphGenerator::new(config);
    let graph = grow_in_batches(&mut generator, input, batches, batch_offset)?;

    debug!("set of nodes to add: {}", graph.vertex_set());
    debug!("set of edges to add: {}", graph.edge_set());

    match output {
        Some(path) => {
            info!("Writing edge list to {}", path.display());
            graph.write_edge_list(BufWriter::new(File::create(path)?), labels)?;
        }
        None => graph.write_edge_list(io::stdout().lock(), labels)?,
    }

    Ok(())
}

/// Batch `i` draws its vertices from the input range shifted by
/// `i * batch_offset`.
fn grow_in_batches(
    generator: &mut RandomGraphGenerator,
    input: Input,
    batches: usize,
    batch_offset: i64,
) -> std::result::Result<SimpleGraph<i64>, Error> {
    let mut graph = SimpleGraph::default();

    for batch in 0..batches {
        let shift = batch_offset.saturating_mul(batch as i64);
        let growth = generator.grow(
            &mut graph,
            input.low.saturating_add(shift),
            input.high.saturating_add(shift),
            input.vertex_count,
            input.edge_count,
        )?;

        info!(
            "Batch {} of {} added {} vertices and {} edges",
            batch + 1,
            batches,
            growth.new_vertices,
            growth.new_edges
        );
    }

    Ok(graph)
}
