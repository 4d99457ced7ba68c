//! A library for generating reproducible random simple graphs that serve as
//! input for graph tests and benchmarks.
//!
//! A simple graph has neither self-loops nor duplicate edges. The generator
//! draws a set of distinct vertex identifiers from an integer range and a set
//! of distinct directed edges between those vertices. All randomness comes
//! from a single seeded source, so the same seed and the same sequence of
//! calls always produce the same graph.
//!
//! # How to generate a graph
//!
//! ```
//! use graph_gen::prelude::*;
//!
//! let mut generator = RandomGraphGenerator::with_seed(1234);
//!
//! let vertices: Vec<i32> = generator.generate_vertices(0, 10_000, 1_000).unwrap();
//! let edges = generator.generate_edges(&vertices, 1_000).unwrap();
//!
//! assert_eq!(vertices.len(), 1_000);
//! assert_eq!(edges.len(), 1_000);
//! assert!(vertices.windows(2).all(|w| w[0] < w[1]));
//! assert!(edges.iter().all(|(s, t)| s != t));
//! ```
//!
//! Both steps can be combined into a [`SimpleGraph`], which also knows how to
//! relabel its vertices into the dense `0..n` id space graph libraries expect:
//!
//! ```
//! use graph_gen::prelude::*;
//!
//! let mut generator = RandomGraphGenerator::default();
//! let graph: SimpleGraph<u32> = generator.generate(100, 200, 10, 20).unwrap();
//!
//! assert_eq!(graph.vertex_count(), 10);
//! assert_eq!(graph.edge_count(), 20);
//! assert!(graph.dense_edges().iter().all(|&(s, t)| s < 10 && t < 10));
//! ```
//!
//! Requests that cannot be satisfied are rejected before any sampling:
//!
//! ```
//! use graph_gen::prelude::*;
//!
//! let mut generator = RandomGraphGenerator::default();
//!
//! assert!(matches!(
//!     generator.generate_vertices(10, 10, 1),
//!     Err(Error::InvalidRange { .. })
//! ));
//! assert!(matches!(
//!     generator.generate_vertices(0, 9, 11),
//!     Err(Error::InfeasibleCount { .. })
//! ));
//! ```

pub mod config;
pub mod generator;
pub mod output;
pub mod prelude;
pub mod presets;
pub mod simple;
pub mod vertex;

pub use crate::config::FeasibilityBound;
pub use crate::config::GeneratorConfig;
pub use crate::generator::RandomGraphGenerator;
pub use crate::simple::SimpleGraph;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid range [{low}, {high}], upper bound must be greater than lower bound")]
    InvalidRange { low: i128, high: i128 },
    #[error("cannot draw {requested} distinct items from a domain of {available}")]
    InfeasibleCount { requested: u128, available: u128 },
    #[error("gave up after {attempts} draws with {collected} of {requested} items collected")]
    AttemptsExhausted {
        attempts: u64,
        collected: usize,
        requested: usize,
    },
    #[error("error while writing graph")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}
