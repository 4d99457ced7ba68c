use std::collections::BTreeSet;

use crate::vertex::VertexId;

/// A generated simple graph: distinct vertices and distinct directed edges
/// without self-loops.
///
/// Vertices are kept in ascending order. Edges are kept in a [`BTreeSet`], so
/// iterating them yields the same order for the same seed, which keeps graphs
/// built from them reproducible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimpleGraph<V> {
    vertices: Vec<V>,
    edges: BTreeSet<(V, V)>,
}

/// Number of vertices and edges a batch added to a graph.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Growth {
    pub new_vertices: usize,
    pub new_edges: usize,
}

impl<V> Default for SimpleGraph<V> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            edges: BTreeSet::new(),
        }
    }
}

impl<V: VertexId> SimpleGraph<V> {
    /// `vertices` must be sorted and free of duplicates, every edge endpoint
    /// must be one of `vertices`.
    pub(crate) fn from_parts(vertices: Vec<V>, edges: BTreeSet<(V, V)>) -> Self {
        debug_assert!(vertices.windows(2).all(|w| w[0] < w[1]));
        Self { vertices, edges }
    }

    /// Replaces the vertices with `vertices`, a sorted superset of the current
    /// ones, and adds `edges`.
    pub(crate) fn merge(&mut self, vertices: Vec<V>, edges: BTreeSet<(V, V)>) -> Growth {
        debug_assert!(vertices.len() >= self.vertices.len());

        let new_vertices = vertices.len() - self.vertices.len();
        let edge_count = self.edges.len();

        self.vertices = vertices;
        self.edges.extend(edges);

        Growth {
            new_vertices,
            new_edges: self.edges.len() - edge_count,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn edges(&self) -> &BTreeSet<(V, V)> {
        &self.edges
    }

    pub fn contains_vertex(&self, vertex: V) -> bool {
        self.vertices.binary_search(&vertex).is_ok()
    }

    /// Returns the position of `vertex` within [`SimpleGraph::vertices`].
    pub fn dense_id(&self, vertex: V) -> Option<usize> {
        self.vertices.binary_search(&vertex).ok()
    }

    /// Returns all edges with both endpoints relabeled to their position
    /// within [`SimpleGraph::vertices`], i.e. into the id space `0..n`.
    ///
    /// Edges are returned in the iteration order of [`SimpleGraph::edges`].
    pub fn dense_edges(&self) -> Vec<(usize, usize)> {
        self.edges
            .iter()
            .filter_map(|&(s, t)| Some((self.dense_id(s)?, self.dense_id(t)?)))
            .collect()
    }
}
