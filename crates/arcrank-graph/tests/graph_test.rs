use arcrank_graph::{Edge, Error, EvidenceGraph};

#[test]
fn from_parts_accepts_co_indexed_arrays() {
    let g = EvidenceGraph::from_parts(
        vec!["a", "b", "c"],
        vec![Edge::new("a", "b"), Edge::new("b", "c")],
        vec![1.0, -2.0],
    )
    .unwrap();

    assert_eq!(g.node_count(), 3);
    assert_eq!(g.edge_count(), 2);
    assert_eq!(g.nodes(), &["a", "b", "c"]);
    assert_eq!(g.edges()[1], Edge::new("b", "c"));
    assert_eq!(g.weights(), &[1.0, -2.0]);
    assert!(g.has_node("b"));
    assert!(!g.has_node("d"));
}

#[test]
fn from_parts_rejects_length_mismatch() {
    let err = EvidenceGraph::from_parts(
        vec!["a", "b"],
        vec![Edge::new("a", "b"), Edge::new("b", "a")],
        vec![1.0],
    )
    .unwrap_err();

    assert!(matches!(
        err,
        Error::LengthMismatch {
            edges: 2,
            weights: 1
        }
    ));
}

#[test]
fn from_parts_rejects_duplicate_nodes() {
    let err = EvidenceGraph::<&str>::from_parts(vec!["a", "b", "a"], Vec::new(), Vec::new())
        .unwrap_err();

    assert!(matches!(err, Error::DuplicateNode { .. }));
}

#[test]
fn from_parts_rejects_unknown_endpoints() {
    let err = EvidenceGraph::from_parts(
        vec!["a", "b"],
        vec![Edge::new("a", "b"), Edge::new("b", "z")],
        vec![1.0, 1.0],
    )
    .unwrap_err();

    assert!(matches!(err, Error::UnknownEndpoint { index: 1, .. }));
}

#[test]
fn from_parts_rejects_self_loops() {
    let err = EvidenceGraph::from_parts(
        vec!["a", "b"],
        vec![Edge::new("a", "a")],
        vec![1.0],
    )
    .unwrap_err();

    assert!(matches!(err, Error::SelfLoop { index: 0, .. }));
}

#[test]
fn add_edge_requires_declared_endpoints() {
    let mut g: EvidenceGraph<u64> = EvidenceGraph::new();
    g.add_node(0).add_node(1);

    assert!(g.add_edge(0, 7, 1.0).is_err());
    assert_eq!(g.edge_count(), 0);

    g.add_edge(0, 1, 1.0).unwrap();
    assert_eq!(g.edge_count(), 1);
}

#[test]
fn add_edge_rejects_self_loops() {
    let mut g: EvidenceGraph<u64> = EvidenceGraph::new();
    g.add_node(3);

    let err = g.add_edge(3, 3, 0.5).unwrap_err();
    assert!(matches!(err, Error::SelfLoop { index: 0, .. }));
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn add_node_is_idempotent() {
    let mut g: EvidenceGraph<&str> = EvidenceGraph::new();
    g.add_node("a").add_node("b").add_node("a");

    assert_eq!(g.nodes(), &["a", "b"]);
}

#[test]
fn parallel_and_reversed_duplicate_edges_are_kept() {
    let mut g: EvidenceGraph<&str> = EvidenceGraph::new();
    g.add_node("a").add_node("b");
    g.add_edge("a", "b", 1.0).unwrap();
    g.add_edge("a", "b", 2.0).unwrap();
    g.add_edge("b", "a", 3.0).unwrap();

    assert_eq!(g.edge_count(), 3);
    assert_eq!(g.weights(), &[1.0, 2.0, 3.0]);
}

#[test]
fn flip_negative_edges_swaps_endpoints_and_negates() {
    let mut g = EvidenceGraph::from_parts(
        vec!["a", "b", "c"],
        vec![Edge::new("a", "b"), Edge::new("b", "c"), Edge::new("a", "c")],
        vec![2.0, -3.0, 0.0],
    )
    .unwrap();
    assert!(!g.is_normalized());

    g.flip_negative_edges();

    assert!(g.is_normalized());
    assert_eq!(
        g.edges(),
        &[Edge::new("a", "b"), Edge::new("c", "b"), Edge::new("a", "c")]
    );
    assert_eq!(g.weights(), &[2.0, 3.0, 0.0]);
}

#[test]
fn flip_negative_edges_is_a_no_op_on_normalized_input() {
    let mut g = EvidenceGraph::from_parts(
        vec!["a", "b"],
        vec![Edge::new("a", "b"), Edge::new("b", "a")],
        vec![1.0, -4.0],
    )
    .unwrap();

    g.flip_negative_edges();
    let edges = g.edges().to_vec();
    let weights = g.weights().to_vec();

    g.flip_negative_edges();
    assert_eq!(g.edges(), edges.as_slice());
    assert_eq!(g.weights(), weights.as_slice());
}

#[test]
fn edge_reversed_swaps_source_and_target() {
    assert_eq!(Edge::new(1u64, 2u64).reversed(), Edge::new(2u64, 1u64));
}
