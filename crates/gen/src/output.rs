use std::collections::BTreeSet;
use std::fmt::{self, Display};
use std::io::Write;

use log::info;

use crate::simple::SimpleGraph;
use crate::vertex::VertexId;
use crate::Error;

/// Selects the vertex ids written for each edge.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Labels {
    /// Positions of the endpoints in the sorted vertex list, `0..n`.
    #[default]
    Dense,
    /// The generated vertex values.
    Original,
}

impl<V: VertexId> SimpleGraph<V> {
    /// Writes one edge per line, source and target separated by a single
    /// space.
    ///
    /// This is the edge list format read by `graph_builder`'s
    /// `EdgeListInput`. Note that such readers derive the node count from the
    /// highest id, so vertices without edges are only preserved implicitly
    /// and [`Labels::Original`] requires non-negative vertex values.
    ///
    /// ```
    /// use graph_gen::prelude::*;
    ///
    /// let graph: SimpleGraph<u32> = RandomGraphGenerator::default()
    ///     .generate(0, 100, 3, 6)
    ///     .unwrap();
    ///
    /// let mut buf = Vec::new();
    /// graph.write_edge_list(&mut buf, Labels::Dense).unwrap();
    ///
    /// assert_eq!(
    ///     String::from_utf8(buf).unwrap(),
    ///     "0 1\n0 2\n1 0\n1 2\n2 0\n2 1\n"
    /// );
    /// ```
    pub fn write_edge_list<W: Write>(&self, mut writer: W, labels: Labels) -> Result<(), Error> {
        match labels {
            Labels::Dense => {
                for (source, target) in self.dense_edges() {
                    writeln!(writer, "{source} {target}")?;
                }
            }
            Labels::Original => {
                for (source, target) in self.edges() {
                    writeln!(writer, "{source} {target}")?;
                }
            }
        }

        writer.flush()?;

        info!(
            "Wrote {} edges over {} vertices ({:?} labels)",
            self.edge_count(),
            self.vertex_count(),
            labels
        );

        Ok(())
    }

    /// Formats the vertices as `{v1, v2, ...}`.
    pub fn vertex_set(&self) -> VertexSet<'_, V> {
        VertexSet(self.vertices())
    }

    /// Formats the edges as `{{s1, t1}, {s2, t2}, ...}`.
    pub fn edge_set(&self) -> EdgeSet<'_, V> {
        EdgeSet(self.edges())
    }
}

pub struct VertexSet<'a, V>(&'a [V]);

impl<V: Display> Display for VertexSet<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, vertex) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{vertex}")?;
        }
        f.write_str("}")
    }
}

pub struct EdgeSet<'a, V>(&'a BTreeSet<(V, V)>);

impl<V: Display> Display for EdgeSet<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (source, target)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{{{source}, {target}}}")?;
        }
        f.write_str("}")
    }
}
