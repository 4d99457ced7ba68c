use std::fs::File;
use std::io::BufWriter;

use graph_builder::prelude::*;
use graph_gen::presets::USE_CASE;
use graph_gen::{output::Labels, RandomGraphGenerator, SimpleGraph};

fn use_case() -> SimpleGraph<i64> {
    RandomGraphGenerator::with_seed(1234)
        .generate(
            USE_CASE.low,
            USE_CASE.high,
            USE_CASE.vertex_count,
            USE_CASE.edge_count,
        )
        .unwrap()
}

fn max_dense_id(edges: &[(usize, usize)]) -> usize {
    edges.iter().map(|&(s, t)| s.max(t)).max().unwrap()
}

#[test]
fn directed_graph_from_generated_edges() {
    let generated = use_case();
    let edges = generated.dense_edges();

    let graph: DirectedCsrGraph<usize> = GraphBuilder::new()
        .csr_layout(CsrLayout::Deduplicated)
        .edges(edges.clone())
        .build();

    assert_eq!(graph.node_count(), max_dense_id(&edges) + 1);
    assert!(graph.node_count() <= generated.vertex_count());
    assert_eq!(graph.edge_count(), generated.edge_count());

    let out_degrees: usize = (0..graph.node_count()).map(|n| graph.out_degree(n)).sum();
    let in_degrees: usize = (0..graph.node_count()).map(|n| graph.in_degree(n)).sum();
    assert_eq!(out_degrees, generated.edge_count());
    assert_eq!(in_degrees, generated.edge_count());

    for &(source, target) in &edges {
        assert!(graph.out_neighbors(source).any(|&t| t == target));
        assert!(graph.in_neighbors(target).any(|&s| s == source));
    }
}

#[test]
fn undirected_graph_from_generated_edges() {
    let generated = use_case();

    let graph: UndirectedCsrGraph<u32> = GraphBuilder::new()
        .csr_layout(CsrLayout::Sorted)
        .edges(
            generated
                .dense_edges()
                .into_iter()
                .map(|(s, t)| (s as u32, t as u32)),
        )
        .build();

    assert_eq!(graph.edge_count() as usize, generated.edge_count());

    let degrees: usize = (0..graph.node_count())
        .map(|n| graph.degree(n) as usize)
        .sum();
    assert_eq!(degrees, 2 * generated.edge_count());
}

#[test]
fn generated_graph_has_no_self_loops() {
    let generated = use_case();

    let graph: DirectedCsrGraph<usize> = GraphBuilder::new()
        .csr_layout(CsrLayout::Sorted)
        .edges(generated.dense_edges())
        .build();

    for node in 0..graph.node_count() {
        assert!(graph.out_neighbors(node).all(|&t| t != node));
    }
}

#[test]
fn edge_list_file_round_trip() {
    let generated = use_case();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("use_case.el");

    let writer = BufWriter::new(File::create(&path).unwrap());
    generated.write_edge_list(writer, Labels::Dense).unwrap();

    let graph: DirectedCsrGraph<usize> = GraphBuilder::new()
        .csr_layout(CsrLayout::Sorted)
        .file_format(EdgeListInput::default())
        .path(&path)
        .build()
        .unwrap();

    let edges = generated.dense_edges();
    assert_eq!(graph.node_count(), max_dense_id(&edges) + 1);
    assert_eq!(graph.edge_count(), generated.edge_count());
    for &(source, target) in &edges {
        assert!(graph.out_neighbors(source).any(|&t| t == target));
    }
}

#[test]
fn edge_list_with_original_labels() {
    let generated = use_case();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("use_case_original.el");

    generated
        .write_edge_list(File::create(&path).unwrap(), Labels::Original)
        .unwrap();

    let graph: DirectedCsrGraph<usize> = GraphBuilder::new()
        .file_format(EdgeListInput::default())
        .path(&path)
        .build()
        .unwrap();

    assert_eq!(graph.edge_count(), generated.edge_count());
    for &(source, target) in generated.edges() {
        let (source, target) = (source as usize, target as usize);
        assert!(graph.out_neighbors(source).any(|&t| t == target));
    }
}

// Five labeled vertices and seven directed edges.
#[test]
fn construct_small_directed_graph() {
    const A: usize = 0;
    const B: usize = 1;
    const C: usize = 2;
    const D: usize = 3;
    const E: usize = 4;

    let graph: DirectedCsrGraph<usize> = GraphBuilder::new()
        .csr_layout(CsrLayout::Sorted)
        .edges(vec![
            (A, B),
            (A, D),
            (C, A),
            (D, C),
            (C, E),
            (B, D),
            (D, E),
        ])
        .build();

    assert_eq!(graph.node_count(), 5);
    assert_eq!(graph.edge_count(), 7);
    assert_eq!(graph.out_neighbors(A).as_slice(), &[B, D]);
    assert_eq!(graph.out_neighbors(D).as_slice(), &[C, E]);
    assert_eq!(graph.in_neighbors(E).as_slice(), &[C, D]);
    assert_eq!(graph.in_neighbors(A).as_slice(), &[C]);
}

#[test]
fn two_nodes_one_edge() {
    let graph: DirectedCsrGraph<u32> = GraphBuilder::new().edges(vec![(0, 1)]).build();

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
}
