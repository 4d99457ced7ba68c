use std::collections::BTreeSet;

use log::debug;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GeneratorConfig;
use crate::simple::{Growth, SimpleGraph};
use crate::vertex::VertexId;
use crate::Error;

/// Generates random simple graphs from a single seeded random source.
///
/// Vertices and edges are drawn by rejection sampling: candidates are drawn
/// uniformly and discarded if they are already present (or, for edges, if
/// both endpoints are equal) until the requested number of distinct items is
/// collected. Each request is checked for feasibility before the first draw
/// and is limited to [`GeneratorConfig::attempt_budget`] draws.
///
/// The random source advances with every draw, so successive calls on the
/// same generator return different results. Two generators created from the
/// same config return identical results for identical call sequences.
#[derive(Debug)]
pub struct RandomGraphGenerator<R = StdRng> {
    rng: R,
    config: GeneratorConfig,
}

impl RandomGraphGenerator<StdRng> {
    pub fn new(config: GeneratorConfig) -> Self {
        Self::from_rng(StdRng::seed_from_u64(config.seed), config)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(GeneratorConfig::with_seed(seed))
    }
}

impl Default for RandomGraphGenerator<StdRng> {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl<R: Rng> RandomGraphGenerator<R> {
    /// Creates a generator drawing from the given random source. The seed of
    /// `config` is ignored.
    pub fn from_rng(rng: R, config: GeneratorConfig) -> Self {
        Self { rng, config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Returns `count` distinct values from `[low, high]` in ascending order.
    ///
    /// The order of the result is unrelated to the order in which values were
    /// drawn.
    pub fn generate_vertices<V: VertexId>(
        &mut self,
        low: V,
        high: V,
        count: usize,
    ) -> Result<Vec<V>, Error> {
        let vertices = self.sample_vertices(low, high, count)?;
        Ok(vertices.into_iter().collect())
    }

    /// Returns `count` distinct directed edges `(source, target)` with
    /// `source != target`, both endpoints taken from `vertices`.
    ///
    /// Repeated values in `vertices` are treated as a single vertex.
    pub fn generate_edges<V: VertexId>(
        &mut self,
        vertices: &[V],
        count: usize,
    ) -> Result<BTreeSet<(V, V)>, Error> {
        let mut distinct = vertices.to_vec();
        distinct.sort_unstable();
        distinct.dedup();

        self.sample_edges(&distinct, count)
    }

    /// Generates `vertex_count` vertices from `[low, high]` followed by
    /// `edge_count` edges between them.
    pub fn generate<V: VertexId>(
        &mut self,
        low: V,
        high: V,
        vertex_count: usize,
        edge_count: usize,
    ) -> Result<SimpleGraph<V>, Error> {
        let vertices = self.generate_vertices(low, high, vertex_count)?;
        let edges = self.sample_edges(&vertices, edge_count)?;

        Ok(SimpleGraph::from_parts(vertices, edges))
    }

    /// Adds a batch of `vertex_count` vertices from `[low, high]` to `graph`
    /// and a batch of `edge_count` edges drawn over all vertices of the grown
    /// graph.
    ///
    /// Vertices and edges that already exist are merged, the returned
    /// [`Growth`] counts what is actually new. If generation fails, `graph`
    /// is left unchanged.
    pub fn grow<V: VertexId>(
        &mut self,
        graph: &mut SimpleGraph<V>,
        low: V,
        high: V,
        vertex_count: usize,
        edge_count: usize,
    ) -> Result<Growth, Error> {
        let mut vertices = self.sample_vertices(low, high, vertex_count)?;
        vertices.extend(graph.vertices().iter().copied());
        let vertices = vertices.into_iter().collect::<Vec<_>>();

        let edges = self.sample_edges(&vertices, edge_count)?;

        Ok(graph.merge(vertices, edges))
    }

    fn sample_vertices<V: VertexId>(
        &mut self,
        low: V,
        high: V,
        count: usize,
    ) -> Result<BTreeSet<V>, Error> {
        if high <= low {
            return Err(Error::InvalidRange {
                low: low.as_i128(),
                high: high.as_i128(),
            });
        }

        let available = self.config.bounds.vertex_domain(V::distance(low, high));
        if available < count as u128 {
            return Err(Error::InfeasibleCount {
                requested: count as u128,
                available,
            });
        }

        let distribution = Uniform::<V>::new_inclusive(low, high);
        let mut budget = AttemptBudget::new(self.config.attempt_budget(count));
        let mut vertices = BTreeSet::new();

        while vertices.len() < count {
            let vertex = budget
                .draw(&distribution, &mut self.rng)
                .ok_or_else(|| budget.exhausted(vertices.len(), count))?;
            vertices.insert(vertex);
        }

        debug!(
            "Generated {} vertices in [{}, {}] using {} draws",
            count, low, high, budget.used
        );

        Ok(vertices)
    }

    /// `vertices` must be free of duplicates.
    fn sample_edges<V: VertexId>(
        &mut self,
        vertices: &[V],
        count: usize,
    ) -> Result<BTreeSet<(V, V)>, Error> {
        let available = self.config.bounds.edge_domain(vertices.len());
        if available < count as u128 {
            return Err(Error::InfeasibleCount {
                requested: count as u128,
                available,
            });
        }

        let mut edges = BTreeSet::new();

        if count == 0 {
            return Ok(edges);
        }

        let distribution = Uniform::<usize>::new_inclusive(0, vertices.len() - 1);
        let mut budget = AttemptBudget::new(self.config.attempt_budget(count));

        while edges.len() < count {
            let source = budget
                .draw(&distribution, &mut self.rng)
                .ok_or_else(|| budget.exhausted(edges.len(), count))?;

            let mut target = source;
            while target == source {
                target = budget
                    .draw(&distribution, &mut self.rng)
                    .ok_or_else(|| budget.exhausted(edges.len(), count))?;
            }

            edges.insert((vertices[source], vertices[target]));
        }

        debug!(
            "Generated {} edges over {} vertices using {} draws",
            count,
            vertices.len(),
            budget.used
        );

        Ok(edges)
    }
}

struct AttemptBudget {
    used: u64,
    limit: u64,
}

impl AttemptBudget {
    fn new(limit: u64) -> Self {
        Self { used: 0, limit }
    }

    fn draw<T, D, R>(&mut self, distribution: &D, rng: &mut R) -> Option<T>
    where
        D: Distribution<T>,
        R: Rng,
    {
        if self.used == self.limit {
            return None;
        }
        self.used += 1;
        Some(distribution.sample(rng))
    }

    fn exhausted(&self, collected: usize, requested: usize) -> Error {
        Error::AttemptsExhausted {
            attempts: self.used,
            collected,
            requested,
        }
    }
}
