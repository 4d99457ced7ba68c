use std::path::PathBuf;

use clap::Parser;
use graph_gen::prelude::*;
use log::LevelFilter;

mod bench;
mod generate;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.level_filter().as_str()),
    )
    .init();

    let input = args.input.input();

    match args.command {
        Command::Generate {
            output,
            labels,
            batches,
            batch_offset,
        } => generate::generate(args.config, input, output, labels, batches, batch_offset)?,
        Command::Bench {
            runs,
            warmup_runs,
            sssp_start,
        } => bench::bench(args.config, input, runs, warmup_runs, sssp_start)?,
    }

    Ok(())
}

#[derive(Debug, Parser)]
#[command(author, version, about, propagate_version = true)]
struct Args {
    #[command(flatten)]
    config: GeneratorConfig,

    #[command(flatten)]
    input: InputArgs,

    /// Increase logging output, can be repeated.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Decrease logging output, can be repeated.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    quiet: u8,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    fn level_filter(&self) -> LevelFilter {
        match i16::from(self.verbose) - i16::from(self.quiet) {
            i16::MIN..=-3 => LevelFilter::Off,
            -2 => LevelFilter::Error,
            -1 => LevelFilter::Warn,
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, clap::Args)]
struct InputArgs {
    /// Named input size: use_case, small, medium or large.
    #[arg(long, default_value = "use_case", value_parser = parse_preset)]
    preset: Input,

    /// Lower bound of the vertex range, overrides the preset.
    #[arg(long, allow_negative_numbers = true)]
    low: Option<i64>,

    /// Upper bound of the vertex range, overrides the preset.
    #[arg(long, allow_negative_numbers = true)]
    high: Option<i64>,

    /// Number of vertices, overrides the preset.
    #[arg(long)]
    vertices: Option<usize>,

    /// Number of edges, overrides the preset.
    #[arg(long)]
    edges: Option<usize>,
}

impl InputArgs {
    fn input(&self) -> Input {
        Input {
            name: self.preset.name,
            low: self.low.unwrap_or(self.preset.low),
            high: self.high.unwrap_or(self.preset.high),
            vertex_count: self.vertices.unwrap_or(self.preset.vertex_count),
            edge_count: self.edges.unwrap_or(self.preset.edge_count),
        }
    }
}

fn parse_preset(name: &str) -> std::result::Result<Input, String> {
    Input::by_name(name).ok_or_else(|| format!("unknown preset '{name}'"))
}

#[derive(Debug, clap::Subcommand)]
enum Command {
    /// Generate a random simple graph and write it as an edge list.
    Generate {
        /// Output file, stdout if absent.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Vertex ids written for each edge.
        #[arg(long, value_enum, default_value_t = Labels::Dense)]
        labels: Labels,

        /// Number of batches the graph is grown in.
        #[arg(long, default_value_t = 1)]
        batches: usize,

        /// Shift of the vertex range between two batches.
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        batch_offset: i64,
    },
    /// Time building a CSR graph from a generated graph.
    Bench {
        /// Number of measured runs.
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
        runs: u64,

        /// Number of runs before measuring.
        #[arg(short, long, default_value_t = 0)]
        warmup_runs: u64,

        /// Run single-source shortest paths with unit weights from this node
        /// of the built graph.
        #[arg(long)]
        sssp_start: Option<usize>,
    },
}
